//! Paint command set for icon rendering

use crate::rendering::layout::RasterGlyph;

/// Opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    /// `#1DA1F2`
    pub const TWITTER_BLUE: Color = Color::rgb(0x1D, 0xA1, 0xF2);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Composite `fg` over `self` with `alpha` in 0..=255.
    /// Full alpha yields `fg` exactly.
    pub fn blend(self, fg: Color, alpha: u8) -> Color {
        let a = alpha as u32;
        let mix = |bg: u8, fg: u8| ((bg as u32 * (255 - a) + fg as u32 * a + 127) / 255) as u8;
        Color {
            r: mix(self.r, fg.r),
            g: mix(self.g, fg.g),
            b: mix(self.b, fg.b),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    SolidRect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Color,
    },
    /// Glyph drawn with its pen origin at (`x`, `y`)
    Glyph {
        x: i32,
        y: i32,
        glyph: RasterGlyph,
        color: Color,
    },
}
