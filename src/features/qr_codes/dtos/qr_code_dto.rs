use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::validation::{validate_color, validate_http_url};

/// Request DTO for generating a QR code
///
/// Omitted colors fall back to the operator defaults (`FILL_COLOR`,
/// `BACK_COLOR`); an omitted size falls back to 10 pixels per module.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateQrRequestDto {
    /// Absolute http(s) URL to encode (required)
    #[validate(
        required(code = "missing", message = "Field required"),
        custom(function = "validate_http_url")
    )]
    #[schema(example = "https://example.com")]
    pub url: Option<String>,

    /// Module color: CSS color name or `#rgb` / `#rrggbb`
    #[validate(custom(function = "validate_color"))]
    #[schema(example = "red")]
    pub fill_color: Option<String>,

    /// Background color: CSS color name or `#rgb` / `#rrggbb`
    #[validate(custom(function = "validate_color"))]
    #[schema(example = "white")]
    pub back_color: Option<String>,

    /// Pixels per module, 1 to 50
    #[validate(range(
        min = 1,
        max = 50,
        code = "range",
        message = "Size must be between 1 and 50"
    ))]
    #[schema(example = 10, minimum = 1, maximum = 50)]
    pub size: Option<i64>,
}

/// Response DTO for a generated QR code
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerateQrResponseDto {
    #[schema(example = "QR code generated successfully")]
    pub message: String,
    /// Location of the written PNG
    #[schema(example = "./qr_codes/QRCode_20261019120000.png")]
    pub path: String,
}
