//! Browser-extension icon generator
//!
//! Renders square PNG icons, each a solid background with a single centered
//! glyph, at the sizes extension manifests ask for.
//!
//! # Features
//!
//! - **truetype** (default): draws the glyph with a system TrueType font via `fontdue`
//! - **Built-in fallback**: a 5x7 bitmap font is used when no system font loads,
//!   so rendering never fails for lack of fonts
//!
//! # Example
//!
//! ```no_run
//! use ext_icons::IconConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = IconConfig::default();
//! let written = ext_icons::generate_icons(&config, |path, icon| {
//!     println!("✓ Created {} ({}x{})", path.display(), icon.width, icon.height);
//! })?;
//! assert_eq!(written.len(), 3);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use log::{debug, warn};

pub mod error;
pub use error::{Error, Result};

pub mod rendering;
pub use rendering::paint::Color;
pub use rendering::Icon;

use rendering::font::{self, DEFAULT_FONT_CANDIDATES};
use rendering::layout;
use rendering::paint::PaintCommand;
use rendering::raster;

/// Icon sizes generated by default, in pixels
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

/// Icon generation settings
///
/// There is no configuration file; `Default` carries the fixed icon design:
/// a white `X` on `#1DA1F2`, drawn at 70% of the icon height, written to
/// `icons/icon{size}.png` for sizes 16, 48 and 128.
///
/// # Examples
///
/// ```
/// let cfg = ext_icons::IconConfig::default();
/// assert_eq!(cfg.glyph, 'X');
/// assert_eq!(cfg.output_path(48), std::path::Path::new("icons/icon48.png"));
/// ```
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// Fill color of the whole square
    pub background: Color,
    /// Glyph color
    pub foreground: Color,
    /// Character drawn in the middle of the icon
    pub glyph: char,
    /// Font pixel size as a fraction of the icon size
    pub font_scale: f32,
    /// TrueType files tried in order before the built-in font
    pub font_candidates: Vec<PathBuf>,
    /// Sizes generated by `generate_icons`, in order
    pub sizes: Vec<u32>,
    /// Directory the icons are written to
    pub out_dir: PathBuf,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            background: Color::TWITTER_BLUE,
            foreground: Color::WHITE,
            glyph: 'X',
            font_scale: 0.7,
            font_candidates: DEFAULT_FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
            sizes: DEFAULT_SIZES.to_vec(),
            out_dir: PathBuf::from("icons"),
        }
    }
}

impl IconConfig {
    /// `{out_dir}/icon{size}.png`
    pub fn output_path(&self, size: u32) -> PathBuf {
        self.out_dir.join(format!("icon{}.png", size))
    }
}

/// Render a `size x size` icon and encode it as PNG without touching disk.
pub fn render_icon(size: u32, config: &IconConfig) -> Result<Icon> {
    if size == 0 {
        return Err(Error::InvalidSize(size));
    }

    let px = font::point_size(size, config.font_scale);
    let font = font::resolve_font(config.font_candidates.as_slice(), px);
    if font.is_builtin() && !config.font_candidates.is_empty() {
        warn!(
            "No system font available for the {}x{} icon; glyph drawn with the built-in bitmap font",
            size, size
        );
    } else {
        debug!("Rendering {}x{} icon with {}", size, size, font.describe());
    }

    let mut commands = vec![PaintCommand::SolidRect {
        x: 0,
        y: 0,
        width: size,
        height: size,
        color: config.background,
    }];

    match font.rasterize(config.glyph) {
        Some(glyph) => {
            let (x, y) = layout::centered_origin(size, &glyph.bbox);
            commands.push(PaintCommand::Glyph {
                x,
                y,
                glyph,
                color: config.foreground,
            });
        }
        None => warn!(
            "{} has no glyph for {:?}; icon will be blank",
            font.describe(),
            config.glyph
        ),
    }

    let image = raster::rasterize(size, size, &commands)?;
    let png_data = raster::encode_png(&image)?;
    Ok(Icon {
        width: size,
        height: size,
        png_data,
    })
}

/// Render a `size x size` icon and write it to `output_path`.
///
/// The parent directory must already exist. An existing file is overwritten.
pub fn create_icon(size: u32, output_path: &Path, config: &IconConfig) -> Result<Icon> {
    let icon = render_icon(size, config)?;
    icon.save(output_path)?;
    Ok(icon)
}

/// Create `config.out_dir` and write one icon per entry of `config.sizes`.
///
/// `on_created` runs after each file is written. The first failure aborts the
/// run; icons after it are not attempted.
pub fn generate_icons<F>(config: &IconConfig, mut on_created: F) -> Result<Vec<PathBuf>>
where
    F: FnMut(&Path, &Icon),
{
    std::fs::create_dir_all(&config.out_dir).map_err(|e| Error::io(&config.out_dir, e))?;

    let mut written = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let path = config.output_path(size);
        let icon = create_icon(size, &path, config)?;
        on_created(&path, &icon);
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin_config() -> IconConfig {
        IconConfig {
            font_candidates: Vec::new(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = IconConfig::default();
        assert_eq!(config.sizes, vec![16, 48, 128]);
        assert_eq!(config.background, Color::rgb(0x1D, 0xA1, 0xF2));
        assert_eq!(config.foreground, Color::WHITE);
        assert_eq!(config.font_candidates.len(), 2);
        assert_eq!(config.output_path(16), PathBuf::from("icons").join("icon16.png"));
    }

    #[test]
    fn zero_size_is_rejected() {
        let err = render_icon(0, &builtin_config()).unwrap_err();
        assert!(matches!(err, Error::InvalidSize(0)));
    }

    #[test]
    fn render_reports_requested_size() {
        let icon = render_icon(48, &builtin_config()).unwrap();
        assert_eq!((icon.width, icon.height), (48, 48));
        assert_eq!(&icon.png_data[0..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn missing_glyph_still_renders_background() {
        let config = IconConfig {
            glyph: '#',
            ..builtin_config()
        };
        let icon = render_icon(16, &config).unwrap();
        assert_eq!(icon.width, 16);
    }

    #[test]
    fn unloadable_candidates_render_like_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let config = IconConfig {
            font_candidates: vec![dir.path().join("absent.ttf")],
            ..Default::default()
        };
        let fallback = render_icon(48, &config).unwrap();
        let builtin = render_icon(48, &builtin_config()).unwrap();
        assert_eq!(fallback.png_data, builtin.png_data);
    }

    #[test]
    fn generate_stops_at_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        let config = IconConfig {
            sizes: vec![16, 0, 128],
            out_dir: dir.path().join("nested").join("icons"),
            ..builtin_config()
        };
        let mut seen = Vec::new();
        let err = generate_icons(&config, |_, icon| seen.push(icon.width)).unwrap_err();
        assert!(matches!(err, Error::InvalidSize(0)));
        assert_eq!(seen, vec![16]);
        assert!(config.output_path(16).exists());
        assert!(!config.output_path(128).exists());
    }
}
