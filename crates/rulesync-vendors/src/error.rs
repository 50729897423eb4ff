//! Error types for rulesync-vendors

/// Result type for adapter and skill-sync operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Core loading/config error
    #[error(transparent)]
    Core(#[from] rulesync_core::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A skill destination is occupied by something other than the
    /// expected symlink. Aborts the whole skill sync.
    #[error("{0}")]
    SkillConflict(String),
}

impl Error {
    pub fn is_skill_conflict(&self) -> bool {
        matches!(self, Error::SkillConflict(_))
    }
}
