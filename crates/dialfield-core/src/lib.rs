pub mod debounce;
pub mod domain;
pub mod error;
pub mod rules;

pub use debounce::{validate_debounce_ms, Debounce, DEFAULT_DEBOUNCE_MS, MAX_DEBOUNCE_MS};
pub use domain::*;
pub use error::CoreError;
pub use rules::*;
