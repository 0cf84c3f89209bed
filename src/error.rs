//! Error types for the theme store and its platform collaborators.

use thiserror::Error;

/// Failures surfaced by storage, the color-scheme signal or the document root.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// Reading or writing durable storage failed (e.g. quota exceeded).
    #[error("storage {op} failed for key '{key}': {message}")]
    Storage {
        op: StorageOp,
        key: String,
        message: String,
    },

    /// A platform capability (window, storage, media query, root element) is missing.
    #[error("{0} is unavailable")]
    Unavailable(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOp {
    Read,
    Write,
}

impl std::fmt::Display for StorageOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageOp::Read => f.write_str("read"),
            StorageOp::Write => f.write_str("write"),
        }
    }
}

impl ThemeError {
    pub fn read(key: &str, message: impl Into<String>) -> Self {
        ThemeError::Storage {
            op: StorageOp::Read,
            key: key.to_string(),
            message: message.into(),
        }
    }

    pub fn write(key: &str, message: impl Into<String>) -> Self {
        ThemeError::Storage {
            op: StorageOp::Write,
            key: key.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ThemeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_message() {
        let err = ThemeError::write("theme", "QuotaExceededError");
        assert_eq!(
            err.to_string(),
            "storage write failed for key 'theme': QuotaExceededError"
        );
    }

    #[test]
    fn test_unavailable_message() {
        assert_eq!(
            ThemeError::Unavailable("localStorage").to_string(),
            "localStorage is unavailable"
        );
    }
}
