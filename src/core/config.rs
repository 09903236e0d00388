use std::env;
use std::path::PathBuf;

use crate::modules::qr::parse_color;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub qr: QrConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

/// Output location and operator defaults for generated QR codes
#[derive(Debug, Clone)]
pub struct QrConfig {
    /// Directory the PNG files are written to (created on demand)
    pub output_dir: PathBuf,
    /// Module color used when a request omits `fill_color`
    pub default_fill_color: String,
    /// Background color used when a request omits `back_color`
    pub default_back_color: String,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            // Only error if it's not "file not found" - that's acceptable
            if !e.not_found() {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            qr: QrConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 64 * 1024; // 64KB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl QrConfig {
    pub const DEFAULT_OUTPUT_DIR: &'static str = "./qr_codes";
    pub const DEFAULT_FILL_COLOR: &'static str = "red";
    pub const DEFAULT_BACK_COLOR: &'static str = "white";

    pub fn from_env() -> Result<Self, String> {
        let output_dir = env::var("QR_CODE_DIR")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_OUTPUT_DIR.to_string());

        let default_fill_color =
            env::var("FILL_COLOR").unwrap_or_else(|_| Self::DEFAULT_FILL_COLOR.to_string());
        let default_back_color =
            env::var("BACK_COLOR").unwrap_or_else(|_| Self::DEFAULT_BACK_COLOR.to_string());

        Self::new(output_dir, default_fill_color, default_back_color)
    }

    /// Build a config, rejecting default colors that could never render
    pub fn new(
        output_dir: impl Into<PathBuf>,
        default_fill_color: impl Into<String>,
        default_back_color: impl Into<String>,
    ) -> Result<Self, String> {
        let default_fill_color = default_fill_color.into();
        let default_back_color = default_back_color.into();

        if parse_color(&default_fill_color).is_none() {
            return Err(format!(
                "FILL_COLOR must be a color name or hex triplet, got '{}'",
                default_fill_color
            ));
        }
        if parse_color(&default_back_color).is_none() {
            return Err(format!(
                "BACK_COLOR must be a color name or hex triplet, got '{}'",
                default_back_color
            ));
        }

        Ok(Self {
            output_dir: output_dir.into(),
            default_fill_color,
            default_back_color,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "QR Generation API".to_string());
        let version =
            env::var("SWAGGER_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Encode URLs into QR code images stored on disk".to_string());

        Ok(Self {
            title,
            version,
            description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qr_config_accepts_named_and_hex_colors() {
        let config = QrConfig::new("/tmp/qr", "navy", "#FFF").unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/qr"));
        assert_eq!(config.default_fill_color, "navy");
        assert_eq!(config.default_back_color, "#FFF");
    }

    #[test]
    fn test_qr_config_rejects_unknown_color() {
        let err = QrConfig::new("/tmp/qr", "not-a-color", "white").unwrap_err();
        assert!(err.contains("FILL_COLOR"));

        let err = QrConfig::new("/tmp/qr", "red", "#12345").unwrap_err();
        assert!(err.contains("BACK_COLOR"));
    }

    #[test]
    fn test_server_address() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_allowed_origins: vec!["*".to_string()],
            max_request_body_size: 1024,
        };
        assert_eq!(config.server_address(), "0.0.0.0:8000");
    }
}
