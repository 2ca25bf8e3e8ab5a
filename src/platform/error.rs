#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("notifications not supported")]
    Unsupported,

    #[error("permission request failed: {0}")]
    PermissionRequestFailed(String),

    #[error("display failed: {0}")]
    DisplayFailed(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
