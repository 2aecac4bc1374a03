//! Byte-level sanitization of the source file.

use std::borrow::Cow;

/// Strip NUL bytes and decode the rest as UTF-8, substituting U+FFFD for
/// invalid sequences. Never fails; decoding problems are absorbed locally.
#[must_use]
pub fn decode_lossy(raw: &[u8]) -> String {
    if raw.contains(&0) {
        let stripped: Vec<u8> = raw.iter().copied().filter(|byte| *byte != 0).collect();
        String::from_utf8_lossy(&stripped).into_owned()
    } else {
        match String::from_utf8_lossy(raw) {
            Cow::Borrowed(text) => text.to_string(),
            Cow::Owned(text) => text,
        }
    }
}
