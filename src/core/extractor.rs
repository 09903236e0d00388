use axum::{
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;
use crate::shared::types::FieldError;

/// Custom JSON extractor that reports body problems as validation errors
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppJsonRejection(rejection)),
        }
    }
}

pub struct AppJsonRejection(JsonRejection);

impl AppJsonRejection {
    fn field_error(&self) -> FieldError {
        match &self.0 {
            JsonRejection::JsonDataError(err) => {
                FieldError::body(format!("Invalid JSON data: {}", err.body_text()), "type_error")
            }
            JsonRejection::JsonSyntaxError(err) => FieldError::body(
                format!("Invalid JSON syntax: {}", err.body_text()),
                "json_invalid",
            ),
            JsonRejection::MissingJsonContentType(_) => FieldError::body(
                "Expected request with `Content-Type: application/json`",
                "content_type",
            ),
            other => FieldError::body(
                format!("Failed to parse JSON body: {}", other.body_text()),
                "json_invalid",
            ),
        }
    }
}

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request body: {}", self.0.body_text());
        if self.0.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return self.0.into_response();
        }
        AppError::Validation(vec![self.field_error()]).into_response()
    }
}
