use chrono::{DateTime, Local};
use tracing::{error, info};

use crate::core::config::QrConfig;
use crate::core::error::{AppError, Result};
use crate::features::qr_codes::dtos::{GenerateQrRequestDto, GenerateQrResponseDto};
use crate::features::qr_codes::models::{QrCodeRequest, QrDefaults};
use crate::modules::qr::QrEncoder;
use crate::modules::storage::LocalStorage;
use crate::shared::constants::{
    QR_FILE_EXTENSION, QR_FILE_PREFIX, QR_SUCCESS_MESSAGE, QR_TIMESTAMP_FORMAT,
};

/// Service that renders QR codes and stores them as PNG files
pub struct QrCodeService {
    storage: LocalStorage,
    encoder: QrEncoder,
    defaults: QrDefaults,
}

impl QrCodeService {
    pub fn new(config: &QrConfig) -> Self {
        Self {
            storage: LocalStorage::new(config.output_dir.clone()),
            encoder: QrEncoder::new(),
            defaults: QrDefaults::from(config),
        }
    }

    /// Resolve a validated DTO against the configured defaults
    pub fn resolve(&self, dto: GenerateQrRequestDto) -> Result<QrCodeRequest> {
        QrCodeRequest::resolve(dto, &self.defaults)
    }

    /// Generate a QR code for `request`, stamped with the current local time
    pub async fn generate(&self, request: QrCodeRequest) -> Result<GenerateQrResponseDto> {
        self.generate_at(request, Local::now()).await
    }

    /// Ensure the directory, encode, write `QRCode_<timestamp>.png`
    pub async fn generate_at(
        &self,
        request: QrCodeRequest,
        now: DateTime<Local>,
    ) -> Result<GenerateQrResponseDto> {
        // Checked per request so a directory removed at runtime comes back
        self.storage.ensure_dir().await?;

        // Large symbols at big module sizes take hundreds of ms to rasterize
        let encoder = self.encoder;
        let (url, fill, back, module_size) = (
            request.url.clone(),
            request.fill_color,
            request.back_color,
            request.module_size,
        );
        let png = tokio::task::spawn_blocking(move || {
            encoder.encode_png(&url, fill, back, module_size)
        })
        .await
        .map_err(|e| {
            error!("QR encoding task failed: {}", e);
            AppError::Encoding(format!("Encoding task failed: {}", e))
        })??;

        let stem = format!("{}_{}", QR_FILE_PREFIX, now.format(QR_TIMESTAMP_FORMAT));
        let path = self
            .storage
            .write_new(&stem, QR_FILE_EXTENSION, &png)
            .await?;

        info!(
            "QR code generated: path={}, url_len={}, module_size={}",
            path.display(),
            request.url.len(),
            request.module_size
        );

        Ok(GenerateQrResponseDto {
            message: QR_SUCCESS_MESSAGE.to_string(),
            path: path.display().to_string(),
        })
    }
}
