pub mod normalize;
pub mod present;
pub mod trigger;

pub use normalize::normalize;
pub use present::{helper_text, indicator, Indicator, MIXED_HELPER_TEXT, TEL_HELPER_TEXT};
pub use trigger::should_skip_lookup;
