//! Text field normalization.

/// Normalize a single text field.
///
/// Removes ASCII control characters (0x00-0x08, 0x0B, 0x0C, 0x0E-0x1F),
/// collapses every whitespace run (spaces, tabs, newlines) into a single
/// space, and trims. Total and idempotent.
#[must_use]
pub fn normalize_text(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if is_stripped_control(ch) {
            continue;
        }
        cleaned.push(ch);
    }

    let mut normalized = String::with_capacity(cleaned.len());
    for part in cleaned.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(part);
    }
    normalized
}

/// Control characters deleted outright. Tab and newline are left for the
/// whitespace collapse instead.
fn is_stripped_control(ch: char) -> bool {
    matches!(ch, '\u{00}'..='\u{08}' | '\u{0B}' | '\u{0C}' | '\u{0E}'..='\u{1F}')
}
