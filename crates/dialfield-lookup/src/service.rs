use dialfield_core::ValidationState;
use serde::Deserialize;

use crate::Result;

/// Verdict returned by the validation backend for one number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LookupOutcome {
    pub id: String,
    pub valid: bool,
}

/// Remote validity lookup collaborator.
///
/// `lookup` takes `&mut self` so caching wrappers compose without interior
/// mutability. `Ok(None)` means the backend had no data for the number.
pub trait LookupService {
    fn service_name(&self) -> &'static str;
    fn lookup(&mut self, number: &str) -> Result<Option<LookupOutcome>>;
}

impl<S: LookupService + ?Sized> LookupService for Box<S> {
    fn service_name(&self) -> &'static str {
        (**self).service_name()
    }

    fn lookup(&mut self, number: &str) -> Result<Option<LookupOutcome>> {
        (**self).lookup(number)
    }
}

/// Map a lookup result to the field's tri-state. Absent data and transport
/// failures both land on `Unknown` (fails open, nothing surfaced to the
/// user).
pub fn state_for(result: &Result<Option<LookupOutcome>>) -> ValidationState {
    match result {
        Ok(Some(outcome)) => ValidationState::from_verdict(outcome.valid),
        Ok(None) | Err(_) => ValidationState::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::{state_for, LookupOutcome};
    use crate::LookupError;
    use dialfield_core::ValidationState;

    fn outcome(valid: bool) -> LookupOutcome {
        LookupOutcome {
            id: "PN1".to_string(),
            valid,
        }
    }

    #[test]
    fn verdicts_map_to_valid_and_invalid() {
        assert_eq!(
            state_for(&Ok(Some(outcome(true)))),
            ValidationState::Valid
        );
        assert_eq!(
            state_for(&Ok(Some(outcome(false)))),
            ValidationState::Invalid
        );
    }

    #[test]
    fn absent_data_and_errors_are_unknown() {
        assert_eq!(state_for(&Ok(None)), ValidationState::Unknown);
        let err = Err(LookupError::Transport("connection reset".to_string()));
        assert_eq!(state_for(&err), ValidationState::Unknown);
    }
}
