//! Error type for the CLI layer

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] rulesync_core::Error),

    #[error(transparent)]
    Vendors(#[from] rulesync_vendors::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// User-facing failure that has already been explained on the
    /// console; carries the short summary only.
    #[error("{0}")]
    Message(String),
}

impl CliError {
    pub fn message(text: impl Into<String>) -> Self {
        CliError::Message(text.into())
    }
}
