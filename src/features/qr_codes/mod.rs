//! QR code generation feature.
//!
//! Encodes a URL into a PNG QR code stored in the configured output
//! directory and returns the file path.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/generate_qr/` | No | Generate a QR code image for a URL |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::QrCodeService;
