use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ErrorCode {
    #[error("Invalid input provided")]
    InvalidInput,
    #[error("Resource not found")]
    NotFound,
    #[error("Storage unavailable")]
    StorageUnavailable,
    #[error("Stored record is corrupt")]
    CorruptRecord,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<String>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(details) = &self.details {
            write!(f, "{}: {} ({})", self.code, self.message, details)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(code: ErrorCode, message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Some(details.into()),
        }
    }

    pub fn storage(details: impl Into<String>) -> Self {
        Self::with_details(ErrorCode::StorageUnavailable, "Browser storage is not available", details)
    }

    pub fn corrupt(key: &str, source: &serde_json::Error) -> Self {
        Self::with_details(ErrorCode::CorruptRecord, format!("Could not read record '{key}'"), source.to_string())
    }

    /// The text shown to the user, without the code prefix.
    pub fn user_message(&self) -> &str {
        &self.message
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_details_when_present() {
        let plain = Error::new(ErrorCode::NotFound, "Party not found.");
        assert_eq!(plain.to_string(), "Resource not found: Party not found.");
        assert_eq!(plain.user_message(), "Party not found.");

        let detailed = Error::storage("localStorage is disabled");
        assert_eq!(detailed.code, ErrorCode::StorageUnavailable);
        assert_eq!(
            detailed.to_string(),
            "Storage unavailable: Browser storage is not available (localStorage is disabled)"
        );
    }

    #[test]
    fn corrupt_record_names_the_key() {
        let source = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let err = Error::corrupt("parties", &source);
        assert_eq!(err.code, ErrorCode::CorruptRecord);
        assert_eq!(err.user_message(), "Could not read record 'parties'");
        assert!(err.details.is_some());
    }
}
