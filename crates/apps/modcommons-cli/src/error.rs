//! CLI error type and exit codes.

use thiserror::Error;

/// Convenience alias used throughout the CLI.
pub type CliResult<T> = Result<T, CliError>;

/// Everything a command can fail with.
///
/// `Aborted` is not a failure of the command but of the conversation:
/// the user hit ctrl-c (or closed stdin) inside a prompt. It carries
/// its own exit code and is printed without the error cross.
#[derive(Debug, Error)]
pub enum CliError {
    /// The user asked for something invalid; message is the full story.
    #[error("{0}")]
    User(String),

    /// A prompt was cancelled.
    #[error("Aborted")]
    Aborted,

    /// Error from the module layer.
    #[error(transparent)]
    Module(#[from] modcommons_types::Error),

    /// Serialization failure when rendering output.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Build a user-facing error.
    pub fn user(message: impl Into<String>) -> Self {
        Self::User(message.into())
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Aborted => 130,
            _ => 1,
        }
    }

    /// True for errors that indicate a bug or environment problem
    /// rather than a misused command.
    pub fn is_unexpected(&self) -> bool {
        match self {
            Self::User(_) | Self::Aborted => false,
            Self::Module(err) => !err.is_user_error(),
            Self::Json(_) | Self::Io(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::user("nope").exit_code(), 1);
        assert_eq!(CliError::Aborted.exit_code(), 130);
    }

    #[test]
    fn test_user_error_displays_bare_message() {
        assert_eq!(CliError::user("No content modules").to_string(), "No content modules");
    }

    #[test]
    fn test_unexpected_classification() {
        assert!(!CliError::user("x").is_unexpected());
        assert!(!CliError::Aborted.is_unexpected());
        assert!(!CliError::Module(modcommons_types::Error::user("x")).is_unexpected());
        assert!(!CliError::Module(modcommons_types::Error::NotFound("k".into())).is_unexpected());
        let io = std::io::Error::other("disk on fire");
        assert!(CliError::Module(modcommons_types::Error::Io(io)).is_unexpected());
    }
}
