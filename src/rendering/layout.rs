//! Glyph boxes and the centering math used to place them on an icon

/// Ink rectangle of a rasterized glyph.
///
/// `left` and `top` are offsets from the pen origin, which sits at the top-left
/// corner of the text line. Fonts with a side bearing or an ascender above the cap
/// height report non-zero offsets here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphBox {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

/// A glyph ready to blit: its box plus a row-major coverage mask
/// (`width * height` bytes, 0 = background, 255 = solid ink).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterGlyph {
    pub bbox: GlyphBox,
    pub coverage: Vec<u8>,
}

impl RasterGlyph {
    pub fn coverage_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.bbox.width || y >= self.bbox.height {
            return 0;
        }
        self.coverage[(y * self.bbox.width + x) as usize]
    }
}

/// Pen origin that centers `bbox` on a square icon of side `size`.
///
/// Each axis is `(size - extent) / 2` minus the box's own offset from the pen,
/// so the ink, not the pen, ends up centered.
pub fn centered_origin(size: u32, bbox: &GlyphBox) -> (i32, i32) {
    let x = (size as i32 - bbox.width as i32).div_euclid(2) - bbox.left;
    let y = (size as i32 - bbox.height as i32).div_euclid(2) - bbox.top;
    (x, y)
}
