//! Error types with diagnostics using miette
//!
//! Prompt resolution and rendering are total; the only fallible step is
//! handing the finished canvas to the image encoder.

use std::path::Path;

use image::ImageError;
use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while writing a sprite to disk
#[derive(Error, Diagnostic, Debug)]
pub enum SpriteError {
    #[error("no image encoder for the extension of {path}")]
    #[diagnostic(
        code(pixel_pusher::save::unsupported_format),
        help("use an output path ending in .png, .bmp, .ico, .gif, .webp, .tiff or .tga")
    )]
    UnsupportedFormat {
        path: String,
        #[source]
        source: ImageError,
    },

    #[error("failed to write {path}")]
    #[diagnostic(code(pixel_pusher::save::write))]
    Write {
        path: String,
        #[source]
        source: ImageError,
    },
}

impl SpriteError {
    /// Classify an encoder failure for the given output path
    pub(crate) fn from_image(path: &Path, source: ImageError) -> Self {
        let path = path.display().to_string();
        match source {
            ImageError::Unsupported(_) => SpriteError::UnsupportedFormat { path, source },
            source => SpriteError::Write { path, source },
        }
    }

    /// The output path the failed write targeted
    pub fn path(&self) -> &str {
        match self {
            SpriteError::UnsupportedFormat { path, .. } | SpriteError::Write { path, .. } => path,
        }
    }
}
