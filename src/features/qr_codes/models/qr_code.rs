use image::Rgb;

use crate::core::config::QrConfig;
use crate::core::error::AppError;
use crate::features::qr_codes::dtos::GenerateQrRequestDto;
use crate::modules::qr::parse_color;
use crate::shared::constants::DEFAULT_MODULE_SIZE;
use crate::shared::types::FieldError;

/// Operator-configured defaults applied to omitted request fields
#[derive(Debug, Clone)]
pub struct QrDefaults {
    pub fill_color: String,
    pub back_color: String,
    pub size: i64,
}

impl From<&QrConfig> for QrDefaults {
    fn from(config: &QrConfig) -> Self {
        Self {
            fill_color: config.default_fill_color.clone(),
            back_color: config.default_back_color.clone(),
            size: DEFAULT_MODULE_SIZE,
        }
    }
}

/// A validated generation request with every default resolved
#[derive(Debug, Clone, PartialEq)]
pub struct QrCodeRequest {
    pub url: String,
    pub fill_color: Rgb<u8>,
    pub back_color: Rgb<u8>,
    pub module_size: u32,
}

impl QrCodeRequest {
    /// Resolve a DTO that already passed `validate()` against the defaults
    pub fn resolve(dto: GenerateQrRequestDto, defaults: &QrDefaults) -> Result<Self, AppError> {
        let url = dto.url.ok_or_else(|| {
            AppError::Validation(vec![FieldError::body_field(
                "url",
                "Field required",
                "missing",
            )])
        })?;

        let fill_color = resolve_color(
            "fill_color",
            dto.fill_color.as_deref().unwrap_or(&defaults.fill_color),
        )?;
        let back_color = resolve_color(
            "back_color",
            dto.back_color.as_deref().unwrap_or(&defaults.back_color),
        )?;

        let size = dto.size.unwrap_or(defaults.size);
        let module_size = u32::try_from(size)
            .ok()
            .filter(|s| *s > 0)
            .ok_or_else(|| {
                AppError::Validation(vec![FieldError::body_field(
                    "size",
                    "Size must be between 1 and 50",
                    "range",
                )])
            })?;

        Ok(Self {
            url,
            fill_color,
            back_color,
            module_size,
        })
    }
}

fn resolve_color(field: &str, value: &str) -> Result<Rgb<u8>, AppError> {
    parse_color(value).ok_or_else(|| {
        AppError::Validation(vec![FieldError::body_field(
            field,
            format!("Unknown color '{}', expected a color name or #rgb/#rrggbb", value),
            "color",
        )])
    })
}
