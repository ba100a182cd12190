//! Error types for the biolink card

use thiserror::Error;

/// Main error type for biolink operations
///
/// Rendering never fails; only loading the host configuration can.
#[derive(Error, Debug)]
pub enum BiolinkError {
    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML or has the wrong shape
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config parsed but holds a value we cannot use
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias using BiolinkError
pub type BiolinkResult<T> = Result<T, BiolinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BiolinkError::InvalidConfig("period_secs must be positive".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid config: period_secs must be positive"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BiolinkError = io_err.into();
        assert!(matches!(err, BiolinkError::Io(_)));
    }
}
