use thiserror::Error;

#[derive(Error, Debug)]
pub enum MigrateError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid rewrite pattern: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to replace {path}: {message}")]
    PersistError { path: String, message: String },
}

impl MigrateError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            MigrateError::IoError(e) => match e.kind() {
                std::io::ErrorKind::NotFound => format!("File not found: {}", e),
                std::io::ErrorKind::PermissionDenied => format!("Permission denied: {}", e),
                std::io::ErrorKind::InvalidData => format!("File is not valid UTF-8 text: {}", e),
                _ => format!("File operation failed: {}", e),
            },
            MigrateError::RegexError(_) => "A built-in rewrite rule failed to compile".to_string(),
            MigrateError::ConfigError { message } => format!("Configuration problem: {}", message),
            MigrateError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            MigrateError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            MigrateError::PersistError { path, .. } => {
                format!("Could not write {} in place", path)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MigrateError::IoError(e) => match e.kind() {
                std::io::ErrorKind::NotFound => "Check --root and the target paths",
                std::io::ErrorKind::PermissionDenied => "Check file permissions on the target",
                std::io::ErrorKind::InvalidData => "Convert the file to UTF-8 and run again",
                _ => "Check the file system and run again",
            },
            MigrateError::RegexError(_) => "This is a bug in menu-migrate, please report it",
            MigrateError::ConfigError { .. }
            | MigrateError::ConfigValidationError { .. }
            | MigrateError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags"
            }
            MigrateError::PersistError { .. } => {
                "Make sure the target directory is writable, or run without --atomic"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, MigrateError>;
