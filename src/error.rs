use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Notify(#[from] NotifyError),
    #[error(transparent)]
    Role(#[from] RoleError),
    #[error("telemetry initialization failed: {0}")]
    Telemetry(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(String),
    #[error("invalid configuration for {field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },
    #[error("configuration error: {0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification backend failed: {0}")]
    Backend(String),
    #[error("no live toast with id {0}")]
    UnknownToast(String),
    #[error("no notification backend is available on this platform")]
    Unsupported,
    #[error("invalid notification payload: {0}")]
    InvalidPayload(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("unknown role: {0:?}")]
    Unknown(String),
}

impl NotifyError {
    /// Whether the toast the caller referred to no longer exists.
    #[must_use]
    pub const fn is_unknown_toast(&self) -> bool {
        matches!(self, Self::UnknownToast(_))
    }
}
