//! Shape generation for 2D primitives

use super::frame::{Color, Frame};
use super::vertex::Vertex;
use crate::sim::Rect;

/// Convert window pixels (origin top-left, y down) to NDC
pub fn pixel_to_ndc(x: f32, y: f32, viewport: (u32, u32)) -> (f32, f32) {
    let (w, h) = viewport;
    (x / w as f32 * 2.0 - 1.0, 1.0 - y / h as f32 * 2.0)
}

/// Two triangles covering `rect`
pub fn rect(rect: &Rect, color: [f32; 4], viewport: (u32, u32)) -> [Vertex; 6] {
    let (x0, y0) = pixel_to_ndc(rect.left() as f32, rect.top() as f32, viewport);
    let (x1, y1) = pixel_to_ndc(rect.right() as f32, rect.bottom() as f32, viewport);

    [
        Vertex::new(x0, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Vertices for every fill of a frame, in draw order
pub fn frame_vertices(frame: &Frame, viewport: (u32, u32), linear: bool) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(frame.fills.len() * 6);
    for (r, color) in &frame.fills {
        vertices.extend_from_slice(&rect(r, Color::to_f32(*color, linear), viewport));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::frame::colors;

    #[test]
    fn test_full_viewport_rect_spans_ndc() {
        let verts = rect(&Rect::new(0, 0, 540, 480), [1.0; 4], (540, 480));
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), -1.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 1.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), -1.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 1.0);
    }

    #[test]
    fn test_top_left_pixel_is_top_left_ndc() {
        assert_eq!(pixel_to_ndc(0.0, 0.0, (100, 100)), (-1.0, 1.0));
        assert_eq!(pixel_to_ndc(50.0, 50.0, (100, 100)), (0.0, 0.0));
    }

    #[test]
    fn test_frame_vertices_keep_order() {
        let mut frame = Frame::new(colors::NAVY);
        frame.fill(Rect::new(0, 0, 10, 10), colors::WHITE);
        frame.fill(Rect::new(5, 5, 10, 10), colors::RED);
        let verts = frame_vertices(&frame, (100, 100), false);
        assert_eq!(verts.len(), 12);
        assert_eq!(verts[0].color, colors::WHITE.to_f32(false));
        assert_eq!(verts[11].color, colors::RED.to_f32(false));
    }
}
