//! Error types for program construction and execution.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Arity mismatch: expected {expected} inner programs, found {found}")]
    ArityMismatch { expected: usize, found: usize },

    #[error("Invalid arity: {0}")]
    InvalidArity(String),

    #[error("Malformed program: {0}")]
    MalformedProgram(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    #[error("Execution error: {0}")]
    Execution(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<bincode::Error> for Error {
    fn from(err: bincode::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::ArityMismatch { expected: 2, found: 3 };
        assert_eq!(
            err.to_string(),
            "Arity mismatch: expected 2 inner programs, found 3"
        );

        let err = Error::InvalidArity("zero".to_string());
        assert_eq!(err.to_string(), "Invalid arity: zero");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
