//! Percent-encoding for the URL input field.
//!
//! The field always holds the encoded form of what the user typed. Every
//! keystroke is run through [`normalize_input`], which decodes the current
//! value when it looks encoded so that a previously encoded URL can be edited
//! in place, and falls back to treating the value as raw text otherwise.

use std::borrow::Cow;

use extractor_logging::extractor_trace;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed percent escape at byte {offset}")]
    MalformedEscape { offset: usize },
    #[error("decoded bytes are not valid UTF-8")]
    InvalidUtf8,
}

/// Raw text resolved from a field value, together with its encoded form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedInput {
    pub raw: String,
    pub encoded: String,
}

/// Percent-encode everything except ASCII alphanumerics and `-_.~`.
pub fn encode(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

/// Strict inverse of [`encode`]: every `%` must start a two-digit hex escape
/// and the decoded bytes must be UTF-8.
pub fn decode(value: &str) -> Result<String, DecodeError> {
    let bytes = value.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape_ok = bytes
                .get(i + 1..i + 3)
                .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));
            if !escape_ok {
                return Err(DecodeError::MalformedEscape { offset: i });
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    urlencoding::decode(value)
        .map(Cow::into_owned)
        .map_err(|_| DecodeError::InvalidUtf8)
}

/// Resolve the raw text behind a field value. Never fails: a value that does
/// not decode cleanly is taken as raw text.
pub fn resolve_input(value: &str) -> String {
    if !value.contains('%') {
        return value.to_owned();
    }
    match decode(value) {
        Ok(decoded) => decoded,
        Err(err) => {
            extractor_trace!("Treating input as raw text: {}", err);
            value.to_owned()
        }
    }
}

/// Apply the keystroke policy to the current field value.
pub fn normalize_input(value: &str) -> NormalizedInput {
    let raw = resolve_input(value);
    let encoded = encode(&raw);
    NormalizedInput { raw, encoded }
}
