//! Error types for the staff payroll system.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure a store operation, the record codec, or startup
//! configuration can report.

use thiserror::Error;

/// Broad category of a [`PayrollError`].
///
/// Validation and persistence failures are recoverable: the operation that
/// raised them has already restored the in-memory state. Format, access and
/// config failures happen at startup, terminal failures while the menu runs;
/// all of them terminate the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// User or input level violation (bad field, duplicate id, unknown id).
    Validation,
    /// A stored line could not be decoded.
    Format,
    /// Writing the record collection to the backend failed.
    Persistence,
    /// The backend could not be opened or created.
    Access,
    /// The configuration file was missing or invalid.
    Config,
    /// The interactive terminal could not be read or written.
    Terminal,
}

/// The main error type for the staff payroll system.
///
/// # Example
///
/// ```
/// use staff_payroll::error::{ErrorKind, PayrollError};
///
/// let error = PayrollError::DuplicateId {
///     id: "E1".to_string(),
/// };
/// assert_eq!(error.to_string(), "Staff ID already exists: E1");
/// assert_eq!(error.kind(), ErrorKind::Validation);
/// assert!(!error.is_fatal());
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A field value violated its constraint.
    #[error("Invalid field '{field}': {message}")]
    InvalidField {
        /// The field that was rejected.
        field: String,
        /// A description of the violated constraint.
        message: String,
    },

    /// Another record already uses this id.
    #[error("Staff ID already exists: {id}")]
    DuplicateId {
        /// The conflicting id.
        id: String,
    },

    /// No record has the requested id.
    #[error("Staff not found: {id}")]
    StaffNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// A field update targeted a category the record does not belong to.
    #[error("Staff '{id}' is {actual}, cannot apply {expected} fields")]
    CategoryMismatch {
        /// The id of the record being modified.
        id: String,
        /// The category the update was written for.
        expected: String,
        /// The category of the stored record.
        actual: String,
    },

    /// A stored line could not be turned into a record.
    #[error("Malformed record on line {line}: {message}")]
    MalformedRecord {
        /// The 1-based line number in the backend resource.
        line: usize,
        /// A description of what was wrong with the line.
        message: String,
    },

    /// Writing the records to the backend failed.
    #[error("Save failed for '{resource}': {message}")]
    PersistenceFailed {
        /// The backend resource that was being written.
        resource: String,
        /// The underlying failure.
        message: String,
    },

    /// The backend could not be read or created.
    #[error("Cannot access '{resource}': {message}")]
    StorageAccess {
        /// The backend resource.
        resource: String,
        /// The underlying failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was well-formed YAML but not an accepted value.
    #[error("Invalid value '{value}' for '{key}': {message}")]
    InvalidConfigValue {
        /// The configuration key.
        key: String,
        /// The rejected value.
        value: String,
        /// What the key accepts.
        message: String,
    },

    /// Reading menu input or writing menu output failed.
    #[error("Terminal I/O failed: {message}")]
    TerminalFailed {
        /// The underlying failure.
        message: String,
    },
}

impl PayrollError {
    /// Shorthand for an [`PayrollError::InvalidField`] error.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the broad category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidField { .. }
            | Self::DuplicateId { .. }
            | Self::StaffNotFound { .. }
            | Self::CategoryMismatch { .. } => ErrorKind::Validation,
            Self::MalformedRecord { .. } => ErrorKind::Format,
            Self::PersistenceFailed { .. } => ErrorKind::Persistence,
            Self::StorageAccess { .. } => ErrorKind::Access,
            Self::ConfigNotFound { .. }
            | Self::ConfigParseError { .. }
            | Self::InvalidConfigValue { .. } => ErrorKind::Config,
            Self::TerminalFailed { .. } => ErrorKind::Terminal,
        }
    }

    /// Returns true if the process cannot continue after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Format | ErrorKind::Access | ErrorKind::Config | ErrorKind::Terminal
        )
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_field_displays_field_and_message() {
        let error = PayrollError::invalid_field("rate", "Hourly rate must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid field 'rate': Hourly rate must be positive"
        );
    }

    #[test]
    fn test_staff_not_found_displays_id() {
        let error = PayrollError::StaffNotFound {
            id: "E9".to_string(),
        };
        assert_eq!(error.to_string(), "Staff not found: E9");
    }

    #[test]
    fn test_category_mismatch_displays_both_categories() {
        let error = PayrollError::CategoryMismatch {
            id: "E1".to_string(),
            expected: "Intern".to_string(),
            actual: "Hourly Staff".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Staff 'E1' is Hourly Staff, cannot apply Intern fields"
        );
    }

    #[test]
    fn test_malformed_record_displays_line() {
        let error = PayrollError::MalformedRecord {
            line: 3,
            message: "invalid number 'abc' for rate".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed record on line 3: invalid number 'abc' for rate"
        );
    }

    #[test]
    fn test_validation_errors_are_recoverable() {
        let errors = [
            PayrollError::invalid_field("name", "Name cannot be empty"),
            PayrollError::DuplicateId {
                id: "E1".to_string(),
            },
            PayrollError::StaffNotFound {
                id: "E1".to_string(),
            },
        ];
        for error in errors {
            assert_eq!(error.kind(), ErrorKind::Validation);
            assert!(!error.is_fatal());
        }
    }

    #[test]
    fn test_persistence_error_is_recoverable() {
        let error = PayrollError::PersistenceFailed {
            resource: "stafflist.txt".to_string(),
            message: "disk full".to_string(),
        };
        assert_eq!(error.kind(), ErrorKind::Persistence);
        assert!(!error.is_fatal());
    }

    #[test]
    fn test_startup_errors_are_fatal() {
        let format = PayrollError::MalformedRecord {
            line: 1,
            message: "bad".to_string(),
        };
        let access = PayrollError::StorageAccess {
            resource: "stafflist.txt".to_string(),
            message: "permission denied".to_string(),
        };
        let config = PayrollError::ConfigNotFound {
            path: "payroll.yaml".to_string(),
        };
        assert!(format.is_fatal());
        assert!(access.is_fatal());
        assert!(config.is_fatal());
    }

    #[test]
    fn test_invalid_config_value_displays_key_and_value() {
        let error = PayrollError::InvalidConfigValue {
            key: "log_level".to_string(),
            value: "loud".to_string(),
            message: "expected error, warn, info, debug or trace".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value 'loud' for 'log_level': expected error, warn, info, debug or trace"
        );
        assert_eq!(error.kind(), ErrorKind::Config);
        assert!(error.is_fatal());
    }

    #[test]
    fn test_terminal_failure_is_fatal() {
        let error = PayrollError::TerminalFailed {
            message: "broken pipe".to_string(),
        };
        assert_eq!(error.to_string(), "Terminal I/O failed: broken pipe");
        assert_eq!(error.kind(), ErrorKind::Terminal);
        assert!(error.is_fatal());
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayrollError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> PayrollResult<()> {
            Err(PayrollError::StaffNotFound {
                id: "E1".to_string(),
            })
        }

        fn propagates_error() -> PayrollResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
