/// Outcome of the remote validity lookup for the debounced value.
///
/// `Unknown` covers no lookup performed, lookup in flight, lookup failed,
/// and lookup returned no data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationState {
    #[default]
    Unknown,
    Valid,
    Invalid,
}

impl ValidationState {
    pub fn from_verdict(valid: bool) -> Self {
        if valid {
            ValidationState::Valid
        } else {
            ValidationState::Invalid
        }
    }
}
