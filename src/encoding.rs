//! ISO-8859-1 (latin-1) text codec for DFHack init files.
//!
//! DFHack reads its init scripts as latin-1, so hack commands and tooltips
//! must reach the disk as one byte per character.  Every byte decodes to
//! the code point of the same value, which makes decoding total; encoding
//! fails for characters above `U+00FF`.
use crate::error::EncodingError;

/// Encode `text` as latin-1 bytes.
///
/// # Errors
///
/// Returns [`EncodingError::Unrepresentable`] for the first character whose
/// code point is above `U+00FF`.
pub fn encode(text: &str) -> Result<Vec<u8>, EncodingError> {
    text.char_indices()
        .map(|(offset, ch)| {
            u8::try_from(u32::from(ch)).map_err(|_| EncodingError::Unrepresentable { ch, offset })
        })
        .collect()
}

/// Decode latin-1 bytes into a `String`.
#[must_use]
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
