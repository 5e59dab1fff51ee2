//! Draw primitives for 2D rendering
//!
//! The scene is described as a flat list of shapes in back-to-front order.
//! Any 2D backend that can fill rectangles, triangles and text can paint it.

use glam::Vec2;

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    /// CSS hex form, e.g. `#64ffda`
    pub fn css(&self) -> String {
        format!("#{:06x}", self.0 & 0x00ff_ffff)
    }
}

/// Portfolio palette
pub mod colors {
    use super::Color;

    pub const GROUND: Color = Color(0x64ffda);
    pub const PLAYER: Color = Color(0xe6f1ff);
    pub const BOOK: Color = Color(0x8892b0);
    pub const SCHOOL: Color = Color(0x233554);
    pub const MOUNTAIN: Color = Color(0x233554);
    pub const LABEL: Color = Color(0x64ffda);
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Filled axis-aligned rectangle (top-left + size)
    Rect { min: Vec2, size: Vec2, color: Color },
    /// Filled triangle
    Triangle { points: [Vec2; 3], color: Color },
    /// Single line of text, `pos` is the baseline start
    Text {
        pos: Vec2,
        text: &'static str,
        font: &'static str,
        color: Color,
    },
}

impl Shape {
    pub fn rect(min: Vec2, size: Vec2, color: Color) -> Self {
        Self::Rect { min, size, color }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Rect { color, .. } | Self::Triangle { color, .. } | Self::Text { color, .. } => {
                *color
            }
        }
    }
}
