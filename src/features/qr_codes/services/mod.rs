mod qr_code_service;

pub use qr_code_service::QrCodeService;
