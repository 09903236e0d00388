pub mod qr_code_handler;

pub use qr_code_handler::{__path_generate_qr, generate_qr};
