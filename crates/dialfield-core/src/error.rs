use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("at least one input kind is required")]
    EmptyInputKinds,
    #[error("duplicate input kind: {0}")]
    DuplicateInputKind(&'static str),
    #[error("invalid debounce delay: {0} ms")]
    InvalidDebounceMs(u64),
}
