use std::collections::HashMap;

use crate::service::{LookupOutcome, LookupService};
use crate::Result;

/// Cache-preferring wrapper around a lookup service.
///
/// A verdict (including "no data") for a key is fetched once and reused
/// for every later request with the same key; the backend is only asked
/// again when the key changes. Failed lookups are not cached, so the next
/// request for that key retries the backend.
#[derive(Debug)]
pub struct CachedLookup<S> {
    inner: S,
    cache: HashMap<String, Option<LookupOutcome>>,
}

impl<S: LookupService> CachedLookup<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: HashMap::new(),
        }
    }

    pub fn is_cached(&self, number: &str) -> bool {
        self.cache.contains_key(number)
    }
}

impl<S: LookupService> LookupService for CachedLookup<S> {
    fn service_name(&self) -> &'static str {
        self.inner.service_name()
    }

    fn lookup(&mut self, number: &str) -> Result<Option<LookupOutcome>> {
        if let Some(cached) = self.cache.get(number) {
            return Ok(cached.clone());
        }
        let fetched = self.inner.lookup(number)?;
        self.cache.insert(number.to_string(), fetched.clone());
        Ok(fetched)
    }
}
