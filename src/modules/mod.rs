//! Modules layer - Infrastructure components
//!
//! Contains the QR renderer and the filesystem storage client.

pub mod qr;
pub mod storage;
