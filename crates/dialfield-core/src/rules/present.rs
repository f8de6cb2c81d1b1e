use crate::domain::{is_identifier, FieldMode, ValidationState};

/// Visual indicator shown beside the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    None,
    Valid,
    Invalid,
}

pub const TEL_HELPER_TEXT: &str =
    "Include the country code, e.g. +14155550100 or +442079460958.";
pub const MIXED_HELPER_TEXT: &str =
    "Include the country code, e.g. +14155550100, or enter an MG identifier.";

/// Map the current raw value and validation state to an indicator.
///
/// No indicator for an empty value, an identifier value, or a disabled
/// field. Otherwise only a confirmed-valid lookup shows the check mark;
/// unknown and invalid both render the cross.
pub fn indicator(raw: &str, state: ValidationState, disabled: bool) -> Indicator {
    if raw.is_empty() || disabled || is_identifier(raw) {
        return Indicator::None;
    }
    match state {
        ValidationState::Valid => Indicator::Valid,
        ValidationState::Unknown | ValidationState::Invalid => Indicator::Invalid,
    }
}

/// Pick the helper line for the field. Host-supplied text wins; otherwise
/// tel-accepting modes get the country-code instruction and sid-only mode
/// gets nothing.
pub fn helper_text<'a>(mode: FieldMode, custom: Option<&'a str>) -> &'a str {
    if let Some(text) = custom {
        return text;
    }
    if mode.is_tel_only() {
        TEL_HELPER_TEXT
    } else if mode.accepts_tel() {
        MIXED_HELPER_TEXT
    } else {
        ""
    }
}
