//! Error types shared by the game and simulator binaries.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlappyError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid value '{value}' for {flag}")]
    InvalidArgument { flag: String, value: String },

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("{flag} cannot be combined with {other}")]
    ConflictingFlags { flag: String, other: String },

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FlappyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = FlappyError::InvalidArgument {
            flag: "--seed".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid value 'abc' for --seed");
    }

    #[test]
    fn test_io_error_converts() {
        fn fails() -> Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "boom"))?;
            Ok(())
        }
        let err = fails().unwrap_err();
        assert!(matches!(err, FlappyError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: boom");
    }

    #[test]
    fn test_conflicting_flags_message() {
        let err = FlappyError::ConflictingFlags {
            flag: "--json".to_string(),
            other: "--frames".to_string(),
        };
        assert_eq!(err.to_string(), "--json cannot be combined with --frames");
    }
}
