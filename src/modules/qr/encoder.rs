//! QR code encoder rendering colored PNG rasters

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use qrcode::{EcLevel, QrCode};

use crate::core::error::AppError;

/// QR code encoder
#[derive(Debug, Clone, Copy)]
pub struct QrEncoder {
    ecc_level: EcLevel,
}

impl QrEncoder {
    /// Encoder with Medium error correction (~15% recovery)
    pub fn new() -> Self {
        Self {
            ecc_level: EcLevel::M,
        }
    }

    /// Encode `data` into a raster where every module is `module_size` pixels square.
    ///
    /// The symbol version is the smallest one that fits `data` at the configured
    /// error correction level. Dark modules use `fill`, the rest (quiet zone
    /// included) use `back`.
    pub fn encode(
        &self,
        data: &str,
        fill: Rgb<u8>,
        back: Rgb<u8>,
        module_size: u32,
    ) -> Result<RgbImage, AppError> {
        let code = QrCode::with_error_correction_level(data.as_bytes(), self.ecc_level)
            .map_err(|e| {
                tracing::error!(
                    "Failed to encode QR code ({} bytes, ecc={:?}): {}",
                    data.len(),
                    self.ecc_level,
                    e
                );
                AppError::Encoding(format!("Failed to create QR code: {}", e))
            })?;

        let image = code
            .render::<Rgb<u8>>()
            .dark_color(fill)
            .light_color(back)
            .quiet_zone(true)
            .module_dimensions(module_size, module_size)
            .build();

        Ok(image)
    }

    /// Encode `data` and serialize the raster as PNG bytes
    pub fn encode_png(
        &self,
        data: &str,
        fill: Rgb<u8>,
        back: Rgb<u8>,
        module_size: u32,
    ) -> Result<Vec<u8>, AppError> {
        let image = self.encode(data, fill, back, module_size)?;

        let mut buf = Vec::new();
        DynamicImage::ImageRgb8(image)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .map_err(|e| {
                tracing::error!("Failed to serialize QR code as PNG: {}", e);
                AppError::Encoding(format!("Failed to write PNG: {}", e))
            })?;

        Ok(buf)
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new()
    }
}
