//! Byte-level loading: honour the encoding named in the XML declaration.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use once_cell::sync::Lazy;
use regex::bytes::Regex;
use std::path::Path;
use tracing::debug;

use crate::core::GrantError;

static ENCODING_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?-u)^<\?xml[^>]*?\sencoding\s*=\s*["']([A-Za-z0-9._:\-]+)["']"#)
        .expect("encoding declaration regex")
});

/// Encoding label from the XML declaration, if the document starts with one.
fn declared_encoding(bytes: &[u8]) -> Option<&[u8]> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    ENCODING_DECL
        .captures(bytes)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_bytes())
}

/// Decode raw filing bytes to a string.
///
/// A byte-order mark wins over the declaration. Without either, the input
/// must be UTF-8. Bytes that are invalid in the chosen encoding are an
/// [`GrantError::Xml`].
pub fn decode_xml(bytes: &[u8]) -> Result<String, GrantError> {
    let encoding = match declared_encoding(bytes) {
        Some(label) => Encoding::for_label(label).ok_or_else(|| {
            GrantError::Xml(format!(
                "unsupported encoding {:?}",
                String::from_utf8_lossy(label)
            ))
        })?,
        None => UTF_8,
    };
    // An ASCII-readable declaration cannot be UTF-16 without a BOM.
    let encoding = if encoding == UTF_16LE || encoding == UTF_16BE {
        UTF_8
    } else {
        encoding
    };

    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(GrantError::Xml(format!(
            "input is not valid {}",
            used.name()
        )));
    }
    debug!(encoding = used.name(), "decoded filing");
    Ok(text.into_owned())
}

/// Read a filing from disk and decode it.
pub fn read_xml(path: impl AsRef<Path>) -> Result<String, GrantError> {
    let bytes = std::fs::read(path)?;
    decode_xml(&bytes)
}
