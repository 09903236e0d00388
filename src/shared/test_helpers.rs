#[cfg(test)]
use image::DynamicImage;

#[cfg(test)]
use std::path::Path;

/// Decode the first QR code found in `img` with rqrr
#[cfg(test)]
pub fn decode_qr_image(img: &DynamicImage) -> String {
    let mut prepared = rqrr::PreparedImage::prepare(img.to_luma8());
    let grids = prepared.detect_grids();
    assert!(!grids.is_empty(), "no QR code found in image");

    let (_meta, content) = grids[0].decode().expect("QR code should decode");
    content
}

/// Load a PNG from disk and decode the QR code it contains
#[cfg(test)]
pub fn decode_qr_file(path: &Path) -> String {
    let img = image::open(path).expect("QR image should be readable");
    decode_qr_image(&img)
}
