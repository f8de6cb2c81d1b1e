use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid endpoint: {0}")]
    Endpoint(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("lookup unavailable: {0}")]
    Unavailable(String),
}

#[cfg(feature = "http-lookup")]
impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LookupError::Decode(err.to_string())
        } else {
            LookupError::Transport(err.to_string())
        }
    }
}

#[cfg(feature = "http-lookup")]
impl From<url::ParseError> for LookupError {
    fn from(err: url::ParseError) -> Self {
        LookupError::Endpoint(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
