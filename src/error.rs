use crate::{platform, repository};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("storage error: {0}")]
    Storage(#[from] repository::Error),

    #[error("platform error: {0}")]
    Platform(#[from] platform::Error),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
