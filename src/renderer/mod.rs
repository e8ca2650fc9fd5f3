//! Rendering module
//!
//! Games describe a `Frame` of filled rectangles; `RenderState` draws it with
//! a single solid-color wgpu pipeline.

pub mod frame;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use frame::{Color, Frame, colors};
pub use pipeline::RenderState;
pub use vertex::Vertex;
