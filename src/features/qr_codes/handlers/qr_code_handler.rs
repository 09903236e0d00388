use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::qr_codes::dtos::{GenerateQrRequestDto, GenerateQrResponseDto};
use crate::features::qr_codes::services::QrCodeService;
use crate::shared::types::{ErrorResponse, ValidationErrorResponse};

/// Generate a QR code for a URL
///
/// Encodes `url` into a PNG written to the configured output directory and
/// returns the path of the new file.
#[utoipa::path(
    post,
    path = "/generate_qr/",
    request_body = GenerateQrRequestDto,
    responses(
        (status = 200, description = "QR code generated", body = GenerateQrResponseDto),
        (status = 422, description = "Validation error", body = ValidationErrorResponse),
        (status = 500, description = "Directory, encoding or write failure", body = ErrorResponse)
    ),
    tag = "qr-codes"
)]
pub async fn generate_qr(
    State(service): State<Arc<QrCodeService>>,
    AppJson(dto): AppJson<GenerateQrRequestDto>,
) -> Result<Json<GenerateQrResponseDto>> {
    dto.validate()?;

    let request = service.resolve(dto)?;
    let response = service.generate(request).await?;
    Ok(Json(response))
}
