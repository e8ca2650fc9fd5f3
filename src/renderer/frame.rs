//! Backend-independent description of one frame
//!
//! Games only ever clear the screen and fill rectangles, so a frame is a clear
//! color plus an ordered list of fills. Later fills draw over earlier ones.

use crate::sim::Rect;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Normalised components. With `linear` set, rgb is converted from sRGB
    /// for use with an sRGB render target.
    pub fn to_f32(self, linear: bool) -> [f32; 4] {
        let channel = |c: u8| {
            let c = c as f32 / 255.0;
            if !linear {
                c
            } else if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };
        [channel(self.r), channel(self.g), channel(self.b), self.a as f32 / 255.0]
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const NAVY: Color = Color::rgb(0, 0, 128);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub clear: Color,
    pub fills: Vec<(Rect, Color)>,
}

impl Frame {
    pub fn new(clear: Color) -> Self {
        Self {
            clear,
            fills: Vec::new(),
        }
    }

    pub fn fill(&mut self, rect: Rect, color: Color) {
        self.fills.push((rect, color));
    }

    /// Drop all fills and start over with a new clear color
    pub fn reset(&mut self, clear: Color) {
        self.clear = clear;
        self.fills.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_extremes_survive_linearisation() {
        let close = |a: [f32; 4], b: [f32; 4]| a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-6);
        assert!(close(colors::WHITE.to_f32(true), [1.0, 1.0, 1.0, 1.0]));
        assert!(close(colors::RED.to_f32(true), [1.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_linearisation_darkens_midtones() {
        let [_, _, gamma, _] = colors::NAVY.to_f32(false);
        let [_, _, linear, _] = colors::NAVY.to_f32(true);
        assert!((gamma - 128.0 / 255.0).abs() < 1e-6);
        assert!(linear < gamma);
        assert!((linear - 0.2158).abs() < 1e-3);
    }

    #[test]
    fn test_reset_clears_fills() {
        let mut frame = Frame::new(colors::NAVY);
        frame.fill(Rect::new(0, 0, 1, 1), colors::WHITE);
        frame.reset(colors::RED);
        assert_eq!(frame, Frame::new(colors::RED));
    }
}
