//! Text codec for array-valued columns.
//!
//! `images` and `amenities` are stored as a JSON array inside a TEXT
//! column. This is the authoritative encoding for ordered string
//! sequences in the listings table; `decode(encode(xs)) == xs` holds
//! for every sequence including the empty one.

use thiserror::Error;

#[cfg(test)]
mod tests;

/// An error which can occur when decoding a stored string list
#[derive(Debug, Error)]
#[error("stored list is not a JSON string array: {0}")]
pub struct ListDecodeError(#[from] serde_json::Error);

/// Encode an ordered string sequence into its stored text form.
pub fn encode_string_list(items: &[String]) -> String {
    // Vec<String> serialization cannot fail
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

/// Decode the stored text form back into an ordered string sequence.
///
/// Empty or blank stored text decodes to the empty sequence, never an
/// error; malformed non-empty text is a parse fault.
pub fn decode_string_list(raw: &str) -> Result<Vec<String>, ListDecodeError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(raw)?)
}
