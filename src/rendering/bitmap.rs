//! Built-in 5x7 bitmap font, the last resort when no system font loads.
//!
//! Glyphs are stored as seven rows of five bits, most significant bit on the
//! left. Lowercase letters are drawn with their uppercase shapes; anything
//! outside `A..=Z` has no glyph.

use crate::rendering::layout::{GlyphBox, RasterGlyph};

pub const CELL_WIDTH: u32 = 5;
pub const CELL_HEIGHT: u32 = 7;

/// Rows from the top of the cell to the ink's top edge.
const CELL_TOP: i32 = 0;

const GLYPHS: [[u8; 7]; 26] = [
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // A
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // B
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // C
    [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E], // D
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // E
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // F
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // G
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // H
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // I
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // J
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // L
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11], // M
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11], // N
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // O
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // P
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // Q
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // R
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // S
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // U
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // V
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A], // W
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // X
    [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04], // Y
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // Z
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitmapFont;

impl BitmapFont {
    pub fn new() -> Self {
        BitmapFont
    }

    /// Rasterize `ch` into a coverage bitmap trimmed to its ink.
    ///
    /// Covered pixels are 255 and uncovered ones 0, so the glyph is drawn
    /// without anti-aliasing.
    pub fn rasterize(&self, ch: char) -> Option<RasterGlyph> {
        let upper = ch.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return None;
        }
        let rows = &GLYPHS[(upper as u8 - b'A') as usize];
        let lit = |col: u32, row: u32| rows[row as usize] & (1 << (CELL_WIDTH - 1 - col)) != 0;

        let mut min_x = CELL_WIDTH;
        let mut max_x = 0;
        let mut min_y = CELL_HEIGHT;
        let mut max_y = 0;
        for row in 0..CELL_HEIGHT {
            for col in 0..CELL_WIDTH {
                if lit(col, row) {
                    min_x = min_x.min(col);
                    max_x = max_x.max(col);
                    min_y = min_y.min(row);
                    max_y = max_y.max(row);
                }
            }
        }
        if min_x > max_x {
            return None;
        }

        let width = max_x - min_x + 1;
        let height = max_y - min_y + 1;
        let mut coverage = Vec::with_capacity((width * height) as usize);
        for row in min_y..=max_y {
            for col in min_x..=max_x {
                coverage.push(if lit(col, row) { 255 } else { 0 });
            }
        }

        Some(RasterGlyph {
            bbox: GlyphBox {
                left: min_x as i32,
                top: CELL_TOP + min_y as i32,
                width,
                height,
            },
            coverage,
        })
    }
}
