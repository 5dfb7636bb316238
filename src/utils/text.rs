//! Text utilities.

use crate::{Error, Result};
use base64::Engine;

/// Collapse whitespace runs into single dashes for use in file names.
pub fn slug(text: &str) -> String {
    let trimmed = text.trim();
    if let Ok(re) = regex::Regex::new(r"\s+") {
        re.replace_all(trimmed, "-").into_owned()
    } else {
        trimmed.split_whitespace().collect::<Vec<_>>().join("-")
    }
}

/// Decode a `data:<mime>;base64,<payload>` URL into raw bytes.
pub fn decode_data_url(url: &str) -> Result<Vec<u8>> {
    let payload = url
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(";base64,"))
        .map(|(_, payload)| payload)
        .ok_or_else(|| Error::other(format!("Not a base64 data URL: {:.32}...", url)))?;

    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| Error::other(format!("Invalid base64 image payload: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_collapses_whitespace() {
        assert_eq!(slug("أزياء   ريم"), "أزياء-ريم");
        assert_eq!(slug("  My Cool Store  "), "My-Cool-Store");
        assert_eq!(slug("one\ttwo\nthree"), "one-two-three");
    }

    #[test]
    fn test_decode_data_url_round_trip() {
        let encoded = base64::engine::general_purpose::STANDARD.encode(b"jpeg-bytes");
        let url = format!("data:image/jpeg;base64,{encoded}");
        assert_eq!(decode_data_url(&url).unwrap(), b"jpeg-bytes");
    }

    #[test]
    fn test_decode_data_url_rejects_plain_urls() {
        assert!(decode_data_url("https://example.com/a.jpg").is_err());
        assert!(decode_data_url("data:image/jpeg;base64,!!!").is_err());
    }
}
