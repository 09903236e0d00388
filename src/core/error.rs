use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::shared::types::{ErrorResponse, FieldError, ValidationErrorResponse};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {}", summarize(.0))]
    Validation(Vec<FieldError>),

    #[error("{context} '{}': {source}", .path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl AppError {
    pub fn io(context: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            context,
            path: path.into(),
            source,
        }
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.loc.join("."), e.msg))
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| (field.to_string(), errs.clone()))
            .collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let detail = fields
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.into_iter().map(move |err| {
                    let msg = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {}", field));
                    FieldError::body_field(&field, msg, err.code.to_string())
                })
            })
            .collect();

        AppError::Validation(detail)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Io and Encoding failures are logged where they are detected
        match self {
            AppError::Validation(detail) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrorResponse { detail }),
            )
                .into_response(),
            AppError::Io { .. } | AppError::Encoding(_) => server_error(&self),
        }
    }
}

fn server_error(err: &AppError) -> Response {
    let body = Json(ErrorResponse {
        detail: format!("An error occurred: {}", err),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}

pub type Result<T> = std::result::Result<T, AppError>;
