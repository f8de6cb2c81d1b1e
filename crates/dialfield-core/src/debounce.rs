use std::time::{Duration, Instant};

use crate::error::CoreError;

pub const DEFAULT_DEBOUNCE_MS: u64 = 1_000;
pub const MAX_DEBOUNCE_MS: u64 = 60_000;

pub fn validate_debounce_ms(ms: u64) -> Result<u64, CoreError> {
    if ms == 0 || ms > MAX_DEBOUNCE_MS {
        return Err(CoreError::InvalidDebounceMs(ms));
    }
    Ok(ms)
}

/// Single-slot debounce for the field value.
///
/// Holds at most one pending update. Scheduling replaces any pending
/// update, so rapid re-edits supersede each other and only a value that
/// stays stable for the full window is ever observed via `poll`. Dropping
/// the struct drops the pending update with it, which is the teardown
/// cancellation path. Driven from the host's tick loop; no threads.
#[derive(Debug)]
pub struct Debounce {
    delay: Duration,
    pending: Option<Pending>,
}

#[derive(Debug)]
struct Pending {
    value: String,
    deadline: Instant,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending update with `value`, armed for `now + delay`.
    pub fn schedule(&mut self, value: &str, now: Instant) {
        self.pending = Some(Pending {
            value: value.to_string(),
            deadline: now + self.delay,
        });
    }

    /// Drop any pending update without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending value if its window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref().is_some_and(|p| p.deadline <= now) {
            return self.pending.take().map(|p| p.value);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{validate_debounce_ms, Debounce, MAX_DEBOUNCE_MS};
    use std::time::{Duration, Instant};

    const DELAY: Duration = Duration::from_millis(500);

    #[test]
    fn fires_after_the_window_elapses() {
        let mut debounce = Debounce::new(DELAY);
        let start = Instant::now();
        debounce.schedule("+1415", start);
        assert_eq!(debounce.poll(start), None);
        assert_eq!(debounce.poll(start + DELAY), Some("+1415".to_string()));
        // One-shot: a fired update is gone.
        assert_eq!(debounce.poll(start + DELAY * 2), None);
    }

    #[test]
    fn second_edit_within_window_supersedes_the_first() {
        let mut debounce = Debounce::new(DELAY);
        let start = Instant::now();
        debounce.schedule("+1", start);
        debounce.schedule("+14", start + Duration::from_millis(100));
        // At the first deadline only the superseded update could have
        // fired, and it must not.
        assert_eq!(debounce.poll(start + DELAY), None);
        let fired = debounce.poll(start + Duration::from_millis(100) + DELAY);
        assert_eq!(fired, Some("+14".to_string()));
    }

    #[test]
    fn cancel_drops_the_pending_update() {
        let mut debounce = Debounce::new(DELAY);
        let start = Instant::now();
        debounce.schedule("+1415", start);
        assert!(debounce.is_pending());
        debounce.cancel();
        assert!(!debounce.is_pending());
        assert_eq!(debounce.poll(start + DELAY), None);
    }

    #[test]
    fn validate_debounce_ms_bounds() {
        assert!(validate_debounce_ms(0).is_err());
        assert!(validate_debounce_ms(MAX_DEBOUNCE_MS + 1).is_err());
        assert_eq!(validate_debounce_ms(1), Ok(1));
        assert_eq!(validate_debounce_ms(MAX_DEBOUNCE_MS), Ok(MAX_DEBOUNCE_MS));
    }
}
