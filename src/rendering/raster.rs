//! Executes paint commands into an RGB buffer and encodes it as PNG

use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};

use crate::rendering::paint::{Color, PaintCommand};
use crate::{Error, Result};

/// Run `commands` in order on a black `width x height` canvas.
///
/// Pixels outside the canvas are clipped. Callers are expected to open with a
/// full-size `SolidRect` so nothing of the initial black survives.
pub fn rasterize(width: u32, height: u32, commands: &[PaintCommand]) -> Result<RgbImage> {
    if width == 0 || height == 0 {
        return Err(Error::Render(format!("empty canvas {}x{}", width, height)));
    }
    let mut img = RgbImage::new(width, height);

    for cmd in commands {
        match cmd {
            PaintCommand::SolidRect {
                x,
                y,
                width: w,
                height: h,
                color,
            } => fill_rect(&mut img, *x, *y, *w, *h, *color),
            PaintCommand::Glyph { x, y, glyph, color } => {
                let ox = x + glyph.bbox.left;
                let oy = y + glyph.bbox.top;
                for gy in 0..glyph.bbox.height {
                    for gx in 0..glyph.bbox.width {
                        let alpha = glyph.coverage_at(gx, gy);
                        if alpha == 0 {
                            continue;
                        }
                        let Some((px, py)) = clip(&img, ox + gx as i32, oy + gy as i32) else {
                            continue;
                        };
                        let Rgb([r, g, b]) = *img.get_pixel(px, py);
                        let out = Color::rgb(r, g, b).blend(*color, alpha);
                        img.put_pixel(px, py, Rgb(out.to_array()));
                    }
                }
            }
        }
    }

    Ok(img)
}

/// Encode an RGB buffer as an 8-bit RGB PNG (no alpha channel).
pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}

fn fill_rect(img: &mut RgbImage, x: i32, y: i32, w: u32, h: u32, color: Color) {
    let x0 = x.max(0) as u32;
    let y0 = y.max(0) as u32;
    let x1 = (x as i64 + w as i64).clamp(0, img.width() as i64) as u32;
    let y1 = (y as i64 + h as i64).clamp(0, img.height() as i64) as u32;
    for py in y0..y1 {
        for px in x0..x1 {
            img.put_pixel(px, py, Rgb(color.to_array()));
        }
    }
}

fn clip(img: &RgbImage, x: i32, y: i32) -> Option<(u32, u32)> {
    if x < 0 || y < 0 || x as u32 >= img.width() || y as u32 >= img.height() {
        return None;
    }
    Some((x as u32, y as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::layout::{GlyphBox, RasterGlyph};

    fn background(size: u32) -> PaintCommand {
        PaintCommand::SolidRect {
            x: 0,
            y: 0,
            width: size,
            height: size,
            color: Color::TWITTER_BLUE,
        }
    }

    #[test]
    fn solid_rect_fills_canvas() {
        let img = rasterize(4, 4, &[background(4)]).unwrap();
        assert!(img.pixels().all(|p| p.0 == [0x1D, 0xA1, 0xF2]));
    }

    #[test]
    fn glyph_is_blended_and_clipped() {
        let glyph = RasterGlyph {
            bbox: GlyphBox { left: 1, top: 0, width: 2, height: 1 },
            coverage: vec![255, 0],
        };
        let cmds = [
            background(4),
            PaintCommand::Glyph { x: 0, y: 1, glyph: glyph.clone(), color: Color::WHITE },
            // Entirely off-canvas
            PaintCommand::Glyph { x: 10, y: 10, glyph, color: Color::WHITE },
        ];
        let img = rasterize(4, 4, &cmds).unwrap();
        assert_eq!(img.get_pixel(1, 1).0, [255, 255, 255]);
        assert_eq!(img.get_pixel(2, 1).0, [0x1D, 0xA1, 0xF2]);
        assert_eq!(img.get_pixel(0, 1).0, [0x1D, 0xA1, 0xF2]);
    }

    #[test]
    fn empty_canvas_is_rejected() {
        assert!(matches!(rasterize(0, 4, &[]), Err(Error::Render(_))));
    }

    #[test]
    fn encodes_png_signature() {
        let img = rasterize(8, 8, &[background(8)]).unwrap();
        let png = encode_png(&img).unwrap();
        assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n");
    }
}
