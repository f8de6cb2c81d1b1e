use crate::domain::{looks_phone_like, FieldMode};

/// Rewrite a raw keystroke result into the canonical form for the mode.
///
/// Empty input passes through untouched so the field can be cleared.
/// Phone-like input keeps only digits and gains exactly one leading `+`,
/// so a paste with stray `+` or formatting collapses cleanly. Everything
/// else keeps only ASCII alphanumerics (the identifier form).
pub fn normalize(raw: &str, mode: FieldMode) -> String {
    if raw.is_empty() {
        return String::new();
    }
    if looks_phone_like(raw, mode) {
        let digits: String = raw.chars().filter(|ch| ch.is_ascii_digit()).collect();
        format!("+{}", digits)
    } else {
        raw.chars()
            .filter(|ch| ch.is_ascii_alphanumeric())
            .collect()
    }
}
