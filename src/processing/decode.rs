// src/processing/decode.rs

use crate::core_types::RemoteFile;
use crate::errors::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Reverses the base64 transport encoding of a fetched blob into UTF-8 text.
///
/// The contents endpoint wraps its base64 payload at 60 columns, so ASCII
/// whitespace is removed before decoding.
///
/// # Errors
/// Returns [`Error::Decode`] for malformed base64 and [`Error::Utf8`] when the
/// decoded bytes are not text.
///
/// # Examples
/// ```
/// use readmeify::processing::decode_content;
///
/// assert_eq!(decode_content("aGVs\nbG8=\n").unwrap(), "hello");
/// assert!(decode_content("not base64!").is_err());
/// ```
pub fn decode_content(encoded: &str) -> Result<String> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = STANDARD.decode(compact.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}

/// Encodes a document for the write endpoint.
pub fn encode_content(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decodes a [`RemoteFile`], rejecting encodings other than base64.
pub fn decode_remote_file(file: &RemoteFile) -> Result<String> {
    if file.encoding != "base64" {
        return Err(Error::UnsupportedEncoding(file.encoding.clone()));
    }
    decode_content(&file.content)
}
