pub mod kind;
pub mod pattern;
pub mod state;

pub use kind::{FieldMode, InputKind};
pub use pattern::{is_identifier, is_phone, looks_phone_like};
pub use state::ValidationState;
