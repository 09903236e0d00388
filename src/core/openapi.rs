use utoipa::{Modify, OpenApi};

use crate::features::qr_codes::{dtos as qr_dtos, handlers as qr_handlers};
use crate::shared::types::{ErrorResponse, FieldError, ValidationErrorResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // QR codes
        qr_handlers::generate_qr,
    ),
    components(
        schemas(
            // Shared
            FieldError,
            ValidationErrorResponse,
            ErrorResponse,
            // QR codes
            qr_dtos::GenerateQrRequestDto,
            qr_dtos::GenerateQrResponseDto,
        )
    ),
    tags(
        (name = "qr-codes", description = "QR code generation"),
    ),
    info(
        title = "QR Generation API",
        version = "0.1.0",
        description = "Encode URLs into QR code images stored on disk",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_documents_generate_route() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/generate_qr/"));
    }

    #[test]
    fn test_swagger_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Custom".to_string(),
            version: "9.9.9".to_string(),
            description: "Docs".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Custom");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("Docs"));
    }
}
