//! Icon rendering: font resolution, glyph layout, painting and PNG encoding

pub mod bitmap;
pub mod font;
pub mod layout;
pub mod paint;
pub mod raster;

use std::path::Path;

use log::info;
use sha2::{Digest, Sha256};

use crate::{Error, Result};

/// A rendered, PNG-encoded icon.
#[derive(Debug, Clone)]
pub struct Icon {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl Icon {
    /// Hex SHA-256 of the encoded PNG. Rendering is deterministic, so equal
    /// inputs give equal digests.
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(&self.png_data))
    }

    /// Write the PNG to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.png_data).map_err(|e| Error::io(path, e))?;
        info!(
            "Wrote {} ({}x{}, {} bytes, sha256 {})",
            path.display(),
            self.width,
            self.height,
            self.png_data.len(),
            self.digest()
        );
        Ok(())
    }
}
