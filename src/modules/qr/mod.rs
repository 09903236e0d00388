//! QR rendering module
//!
//! Turns text into colored QR rasters and parses the color notation
//! accepted by the API.

mod color;
mod encoder;

pub use color::parse_color;
pub use encoder::QrEncoder;
