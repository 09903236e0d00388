use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;
use validator::ValidationError;

use crate::modules::qr::parse_color;

lazy_static! {
    /// Regex for hex color triplets
    /// - Valid: "#fff", "#FF0000", "#1e90ff"
    /// - Invalid: "fff", "#ffff", "#12345", "#ggg"
    pub static ref HEX_COLOR_REGEX: Regex =
        Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap();
}

/// Require an absolute http(s) URL with a host
pub fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    let url = Url::parse(value).map_err(|e| {
        ValidationError::new("url_parsing").with_message(Cow::Owned(format!(
            "Input should be a valid URL, {}",
            e
        )))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ValidationError::new("url_scheme")
            .with_message(Cow::Borrowed("URL scheme should be 'http' or 'https'")));
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(ValidationError::new("url_parsing")
            .with_message(Cow::Borrowed("Input should be a valid URL, empty host")));
    }

    Ok(())
}

/// Require a CSS color name or a hex triplet
pub fn validate_color(value: &str) -> Result<(), ValidationError> {
    match parse_color(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("color").with_message(Cow::Owned(format!(
            "Unknown color '{}', expected a color name or #rgb/#rrggbb",
            value
        )))),
    }
}
