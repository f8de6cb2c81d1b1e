use std::time::Instant;

use dialfield_core::{
    helper_text, indicator, normalize, should_skip_lookup, Debounce, FieldMode, Indicator,
    ValidationState,
};
use dialfield_lookup::{state_for, LookupService};

/// The phone/SID input field component.
///
/// The host form owns the raw value and hands it in by mutable reference;
/// the field owns the debounce window, the debounced copy, and the
/// validation tri-state. Everything is driven from the host's tick loop.
#[derive(Debug)]
pub struct PhoneField {
    mode: FieldMode,
    disabled: bool,
    debounce: Debounce,
    debounced: String,
    validation: ValidationState,
}

impl PhoneField {
    pub fn new(mode: FieldMode, debounce_ms: u64) -> Self {
        Self {
            mode,
            disabled: false,
            debounce: Debounce::from_millis(debounce_ms),
            debounced: String::new(),
            validation: ValidationState::Unknown,
        }
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn mode(&self) -> FieldMode {
        self.mode
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn debounced_value(&self) -> &str {
        &self.debounced
    }

    pub fn validation(&self) -> ValidationState {
        self.validation
    }

    /// The host's change notification: rewrite the host-owned value into
    /// canonical form and restart the debounce window with the result.
    /// Called on every edit and once at mount.
    pub fn apply_change(&mut self, value: &mut String, now: Instant) {
        let normalized = normalize(value, self.mode);
        if *value != normalized {
            *value = normalized;
        }
        self.debounce.schedule(value, now);
    }

    /// Drive the debounce window; when it fires, install the debounced
    /// value and run the lookup trigger. A skipped or unanswered lookup
    /// leaves the state at `Unknown`.
    pub fn tick(&mut self, now: Instant, lookup: &mut dyn LookupService) {
        let Some(debounced) = self.debounce.poll(now) else {
            return;
        };
        self.debounced = debounced;
        if should_skip_lookup(&self.debounced, self.mode, self.disabled) {
            self.validation = ValidationState::Unknown;
            return;
        }
        let result = lookup.lookup(&self.debounced);
        self.validation = state_for(&result);
    }

    pub fn indicator(&self, raw: &str) -> Indicator {
        indicator(raw, self.validation, self.disabled)
    }

    pub fn helper_text<'a>(&self, custom: Option<&'a str>) -> &'a str {
        helper_text(self.mode, custom)
    }

    /// Teardown: cancel any pending debounce and forget lookup state.
    pub fn reset(&mut self) {
        self.debounce.cancel();
        self.debounced.clear();
        self.validation = ValidationState::Unknown;
    }
}
