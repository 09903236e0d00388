use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Location of the offending value, e.g. `["body", "url"]`
    pub loc: Vec<String>,
    /// Human readable explanation
    pub msg: String,
    /// Machine readable error kind, e.g. `missing`, `url_parsing`, `range`
    #[serde(rename = "type")]
    pub error_type: String,
}

impl FieldError {
    /// Error located at a field of the request body
    pub fn body_field(field: &str, msg: impl Into<String>, error_type: impl Into<String>) -> Self {
        Self {
            loc: vec!["body".to_string(), field.to_string()],
            msg: msg.into(),
            error_type: error_type.into(),
        }
    }

    /// Error about the request body as a whole
    pub fn body(msg: impl Into<String>, error_type: impl Into<String>) -> Self {
        Self {
            loc: vec!["body".to_string()],
            msg: msg.into(),
            error_type: error_type.into(),
        }
    }
}

/// Body of a 422 response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub detail: Vec<FieldError>,
}

/// Body of a 500 response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}
