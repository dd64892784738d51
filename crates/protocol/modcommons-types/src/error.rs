//! Error type shared across the modcommons crates.

use thiserror::Error;

/// Main error type for all module-commons operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Expected, user-facing failure. Reported as a single line.
    #[error("{0}")]
    User(String),

    /// An update payload contained a key outside the allowed set.
    #[error("cannot update key \"{key}\", only allowed to update keys {}", allowed.join(", "))]
    InvalidKey {
        /// The offending key.
        key: String,
        /// The keys a `set` payload may carry for this module type.
        allowed: Vec<String>,
    },

    /// A field value failed its validator.
    #[error("{0}")]
    Validation(String),

    /// A module could not be resolved.
    #[error("module not found: {0}")]
    NotFound(String),

    /// A module link failed to parse.
    #[error("invalid module link: {0}")]
    InvalidLink(String),

    /// Filesystem failure from the storage layer.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Record (de)serialization failure.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a user-facing error.
    pub fn user(msg: impl Into<String>) -> Self {
        Self::User(msg.into())
    }

    /// True for errors a user can act on (as opposed to I/O faults).
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::User(_)
                | Error::InvalidKey { .. }
                | Error::Validation(_)
                | Error::NotFound(_)
                | Error::InvalidLink(_)
        )
    }
}

/// Result type alias for module-commons operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_display() {
        let err = Error::InvalidKey {
            key: "beep".into(),
            allowed: vec!["title".into(), "description".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("beep"));
        assert!(msg.contains("only allowed to update keys title, description"));
    }

    #[test]
    fn test_user_error_classification() {
        assert!(Error::user("No writable modules").is_user_error());
        assert!(Error::NotFound("abc".into()).is_user_error());
        let io = Error::Io(std::io::Error::other("disk on fire"));
        assert!(!io.is_user_error());
    }
}
