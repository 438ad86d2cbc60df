//! Error types for CodeScope

use thiserror::Error;

/// Main error type for CodeScope operations
#[derive(Debug, Error)]
pub enum ScopeError {
    #[error("Unsupported file type: {path}")]
    UnsupportedFileType { path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Project root is not a readable directory: {path}")]
    ProjectRoot { path: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Analysis error: {message}")]
    Analysis { message: String },
}

/// Result type alias for CodeScope operations
pub type Result<T> = std::result::Result<T, ScopeError>;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid configuration format: {message}")]
    InvalidFormat { message: String },

    #[error("Invalid configuration value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

impl From<ConfigError> for ScopeError {
    fn from(error: ConfigError) -> Self {
        ScopeError::Config {
            message: error.to_string(),
        }
    }
}

impl From<config::ConfigError> for ScopeError {
    fn from(error: config::ConfigError) -> Self {
        ScopeError::Config {
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_conversion() {
        let err: ScopeError = ConfigError::InvalidValue {
            key: "analysis.concurrency".into(),
            value: "0".into(),
        }
        .into();
        assert!(matches!(err, ScopeError::Config { .. }));
        assert!(err.to_string().contains("analysis.concurrency"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ScopeError = io.into();
        assert!(matches!(err, ScopeError::Io(_)));
    }
}
