mod qr_code;

pub use qr_code::{QrCodeRequest, QrDefaults};
