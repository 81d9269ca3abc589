//! Error types for icon generation

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for icon operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or writing icons
#[derive(Error, Debug)]
pub enum Error {
    /// Icon dimension was zero
    #[error("Invalid icon size: {0} (must be a positive number of pixels)")]
    InvalidSize(u32),

    /// Filesystem operation failed
    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// Failed to assemble the pixel buffer
    #[error("Rendering failed: {0}")]
    Render(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
