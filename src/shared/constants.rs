/// Prefix of every generated QR code file name
pub const QR_FILE_PREFIX: &str = "QRCode";

/// Extension of generated QR code files
pub const QR_FILE_EXTENSION: &str = "png";

/// Local-time timestamp embedded in file names (second granularity)
pub const QR_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Module size used when a request omits `size`
pub const DEFAULT_MODULE_SIZE: i64 = 10;

/// Message returned on successful generation
pub const QR_SUCCESS_MESSAGE: &str = "QR code generated successfully";
