use super::FieldMode;

/// True when the value is a SID-style identifier: literal `MG` followed by
/// one or more ASCII alphanumerics. Classification is mode-independent.
pub fn is_identifier(value: &str) -> bool {
    match value.strip_prefix("MG") {
        Some(rest) => !rest.is_empty() && rest.chars().all(|ch| ch.is_ascii_alphanumeric()),
        None => false,
    }
}

/// True when the value is a fully-formed phone value: leading `+` followed
/// by one or more ASCII digits.
pub fn is_phone(value: &str) -> bool {
    match value.strip_prefix('+') {
        Some(rest) => !rest.is_empty() && rest.chars().all(|ch| ch.is_ascii_digit()),
        None => false,
    }
}

/// Whether a raw keystroke result should be normalized as a phone number.
///
/// Never in sid-only mode and always in tel-only mode. In mixed mode the
/// value counts as phone-like when, after trimming leading whitespace, it
/// starts with `+`, a digit, or `(`.
pub fn looks_phone_like(value: &str, mode: FieldMode) -> bool {
    if !mode.accepts_tel() {
        return false;
    }
    if mode.is_tel_only() {
        return true;
    }
    match value.trim_start().chars().next() {
        Some(ch) => ch == '+' || ch == '(' || ch.is_ascii_digit(),
        None => false,
    }
}
