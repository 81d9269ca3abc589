//! Font resolution for icon glyphs
//!
//! A font is resolved per render by walking an ordered list of TrueType
//! candidates at the requested pixel size. The first file that loads wins.
//! Unreadable or unparsable files are skipped quietly, and the built-in bitmap
//! font terminates the chain, so resolution itself never fails.

use std::path::Path;
#[cfg(feature = "truetype")]
use std::path::PathBuf;

use log::debug;

use crate::rendering::bitmap::BitmapFont;
use crate::rendering::layout::RasterGlyph;
#[cfg(feature = "truetype")]
use crate::rendering::layout::GlyphBox;

/// System fonts tried in order: macOS Helvetica, then Linux DejaVu Sans Bold.
pub const DEFAULT_FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
];

/// Pixel size of the glyph font for an icon of side `size`.
pub fn point_size(size: u32, scale: f32) -> f32 {
    (size as f32 * scale).round().max(1.0)
}

/// A resolved font handle
pub enum IconFont {
    #[cfg(feature = "truetype")]
    TrueType {
        font: fontdue::Font,
        px: f32,
        source: PathBuf,
    },
    Builtin(BitmapFont),
}

impl IconFont {
    /// Short description for log lines
    pub fn describe(&self) -> String {
        match self {
            #[cfg(feature = "truetype")]
            IconFont::TrueType { source, px, .. } => format!("{} @ {}px", source.display(), px),
            IconFont::Builtin(_) => "built-in bitmap font".to_string(),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, IconFont::Builtin(_))
    }

    /// Rasterize `ch`, or `None` when the font has no glyph for it.
    pub fn rasterize(&self, ch: char) -> Option<RasterGlyph> {
        match self {
            #[cfg(feature = "truetype")]
            IconFont::TrueType { font, px, .. } => rasterize_truetype(font, *px, ch),
            IconFont::Builtin(bitmap) => bitmap.rasterize(ch),
        }
    }
}

/// Walk `candidates` in order and return the first font that loads at `px`,
/// falling back to the built-in bitmap font.
pub fn resolve_font<P: AsRef<Path>>(candidates: &[P], px: f32) -> IconFont {
    #[cfg(feature = "truetype")]
    for candidate in candidates {
        let path = candidate.as_ref();
        match load_truetype(path, px) {
            Ok(font) => {
                debug!("Using font {}", font.describe());
                return font;
            }
            Err(reason) => debug!("Skipping font {}: {}", path.display(), reason),
        }
    }

    #[cfg(not(feature = "truetype"))]
    if !candidates.is_empty() {
        debug!(
            "TrueType support disabled; ignoring {} font candidate(s) at {}px",
            candidates.len(),
            px
        );
    }

    debug!("No TrueType candidate loaded; using the built-in bitmap font");
    IconFont::Builtin(BitmapFont::new())
}

#[cfg(feature = "truetype")]
fn load_truetype(path: &Path, px: f32) -> std::result::Result<IconFont, String> {
    let bytes = std::fs::read(path).map_err(|e| e.to_string())?;
    let settings = fontdue::FontSettings {
        scale: px,
        ..fontdue::FontSettings::default()
    };
    let font = fontdue::Font::from_bytes(bytes, settings).map_err(|e| e.to_string())?;
    Ok(IconFont::TrueType {
        font,
        px,
        source: path.to_path_buf(),
    })
}

#[cfg(feature = "truetype")]
fn rasterize_truetype(font: &fontdue::Font, px: f32, ch: char) -> Option<RasterGlyph> {
    if font.lookup_glyph_index(ch) == 0 {
        return None;
    }
    let (metrics, coverage) = font.rasterize(ch, px);
    if metrics.width == 0 || metrics.height == 0 {
        return None;
    }

    // fontdue measures `ymin` up from the baseline; the pen origin sits on the
    // ascender line, `ascent` pixels above it.
    let ascent = font
        .horizontal_line_metrics(px)
        .map(|m| m.ascent)
        .unwrap_or(px)
        .round() as i32;
    let height = metrics.height as i32;

    Some(RasterGlyph {
        bbox: GlyphBox {
            left: metrics.xmin,
            top: ascent - (metrics.ymin + height),
            width: metrics.width as u32,
            height: metrics.height as u32,
        },
        coverage,
    })
}
