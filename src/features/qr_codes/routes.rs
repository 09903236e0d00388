use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::post, Router};

use crate::features::qr_codes::handlers;
use crate::features::qr_codes::services::QrCodeService;

/// Create routes for the QR code feature
///
/// Public (no authentication). The trailing slash in the path is part of
/// the contract.
pub fn routes(service: Arc<QrCodeService>, max_body_size: usize) -> Router {
    Router::new()
        .route(
            "/generate_qr/",
            post(handlers::generate_qr).layer(DefaultBodyLimit::max(max_body_size)),
        )
        .with_state(service)
}
