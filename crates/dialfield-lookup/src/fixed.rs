use std::collections::HashMap;

use crate::service::{LookupOutcome, LookupService};
use crate::Result;

/// In-memory lookup backend with a fixed set of known numbers. Used by the
/// demo when no endpoint is configured and by tests.
#[derive(Debug, Clone, Default)]
pub struct FixedLookupService {
    known: HashMap<String, LookupOutcome>,
}

impl FixedLookupService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_number(mut self, number: &str, valid: bool) -> Self {
        let outcome = LookupOutcome {
            id: format!("PN{}", number.trim_start_matches('+')),
            valid,
        };
        self.known.insert(number.to_string(), outcome);
        self
    }
}

impl LookupService for FixedLookupService {
    fn service_name(&self) -> &'static str {
        "fixed"
    }

    fn lookup(&mut self, number: &str) -> Result<Option<LookupOutcome>> {
        Ok(self.known.get(number).cloned())
    }
}
