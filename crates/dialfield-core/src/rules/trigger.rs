use crate::domain::{is_identifier, is_phone, FieldMode};

/// Decide whether the remote validity lookup for a debounced value should
/// be skipped entirely.
///
/// Skipped when the value is empty, the field is disabled, the mode does
/// not accept phone input (which covers sid-only), the mode is strictly
/// tel-only and the value is not a fully-formed phone value, or the value
/// is a SID identifier in a mode that accepts identifiers. A lookup is
/// therefore only ever issued for tel-accepting modes on non-identifier
/// values.
pub fn should_skip_lookup(value: &str, mode: FieldMode, disabled: bool) -> bool {
    if value.is_empty() || disabled {
        return true;
    }
    if !mode.accepts_tel() {
        return true;
    }
    if mode.is_tel_only() && !is_phone(value) {
        return true;
    }
    if is_identifier(value) && mode.accepts_sid() {
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::should_skip_lookup;
    use crate::domain::FieldMode;

    #[test]
    fn skips_empty_value() {
        assert!(should_skip_lookup("", FieldMode::tel_only(), false));
    }

    #[test]
    fn skips_disabled_field() {
        assert!(should_skip_lookup("+14155551234", FieldMode::tel_only(), true));
    }

    #[test]
    fn skips_sid_only_mode() {
        assert!(should_skip_lookup("+14155551234", FieldMode::sid_only(), false));
    }

    #[test]
    fn tel_only_skips_value_without_phone_shape() {
        assert!(should_skip_lookup("123", FieldMode::tel_only(), false));
    }

    #[test]
    fn tel_only_looks_up_phone_shaped_value() {
        assert!(!should_skip_lookup(
            "+14155551234",
            FieldMode::tel_only(),
            false
        ));
    }

    #[test]
    fn mixed_mode_skips_identifier() {
        assert!(should_skip_lookup("MGabc123", FieldMode::mixed(), false));
    }

    #[test]
    fn mixed_mode_looks_up_non_identifier() {
        assert!(!should_skip_lookup("+14155551234", FieldMode::mixed(), false));
        // Not phone-shaped, but mixed mode only filters identifiers.
        assert!(!should_skip_lookup("415", FieldMode::mixed(), false));
    }

    #[test]
    fn tel_only_still_looks_up_identifier_shaped_value() {
        // Identifier classification only suppresses the lookup when the
        // mode accepts identifiers; tel-only instead fails the phone shape.
        assert!(should_skip_lookup("MGabc123", FieldMode::tel_only(), false));
    }
}
