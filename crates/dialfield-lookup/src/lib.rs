pub mod cache;
pub mod error;
pub mod fixed;
pub mod http;
pub mod service;

pub use cache::CachedLookup;
pub use error::{LookupError, Result};
pub use fixed::FixedLookupService;
pub use http::HttpLookupService;
pub use service::{state_for, LookupOutcome, LookupService};
