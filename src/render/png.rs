//! PNG output for rendered surfaces.
//!
//! Encoding is behind the `SurfaceEncoder` trait so the same generation code
//! can target other formats or a platform encoder.

use std::fs;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};

use crate::error::{ForgeError, Result};

use super::Surface;

/// Serializes a finished surface into a compressed byte stream.
pub trait SurfaceEncoder {
    fn encode(&self, surface: &Surface) -> Result<Vec<u8>>;
}

/// PNG encoder with fixed settings.
///
/// No timestamps or other ancillary chunks are written, so encoding the same
/// surface twice gives identical bytes.
#[derive(Debug, Clone, Copy)]
pub struct Png {
    compression: CompressionType,
    filter: FilterType,
}

impl Png {
    pub fn new() -> Self {
        Self {
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }

    /// Trade encoding time for smaller output.
    pub fn best() -> Self {
        Self {
            compression: CompressionType::Best,
            ..Self::new()
        }
    }
}

impl Default for Png {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceEncoder for Png {
    fn encode(&self, surface: &Surface) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        let encoder = PngEncoder::new_with_quality(&mut bytes, self.compression, self.filter);

        encoder
            .write_image(
                &surface.to_rgba_buffer(),
                surface.width(),
                surface.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(|e| ForgeError::Encode {
                message: format!("Failed to encode PNG: {}", e),
            })?;

        if bytes.is_empty() {
            return Err(ForgeError::Encode {
                message: "PNG encoder produced no data".to_string(),
            });
        }

        Ok(bytes)
    }
}

/// Write encoded image bytes to a file.
pub fn write_png(bytes: &[u8], path: &Path) -> Result<()> {
    fs::write(path, bytes).map_err(|e| ForgeError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })
}
