//! RFC 2397 `data:` URLs for inline contents.

use std::fmt::Write;

/// Prefix of an unencoded-media-type, non-base64 data URL.
const PREFIX: &str = "data:,";

/// Encode `contents` as a percent-escaped `data:` URL.
pub(crate) fn encode(contents: &str) -> String {
    let mut url = String::with_capacity(PREFIX.len().saturating_add(contents.len()));
    url.push_str(PREFIX);
    for byte in contents.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~' | b'/') {
            url.push(char::from(byte));
        } else {
            // Writing to a String cannot fail.
            let _ = write!(url, "%{byte:02X}");
        }
    }
    url
}
