//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Required field absent from the request body
    Missing { field: &'static str },

    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// String doesn't match required format
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Numeric field out of range
    InvalidValue { field: &'static str, reason: &'static str },

    /// Request body could not be deserialized (malformed JSON, wrong types)
    InvalidBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "missing required field '{}'", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::InvalidBody { reason } => {
                write!(f, "invalid request body: {}", reason)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "name",
            max: 128,
        };
        assert_eq!(
            err.to_string(),
            "name exceeds maximum length of 128 characters"
        );
    }

    #[test]
    fn missing_names_the_field() {
        let err = ValidationError::Missing { field: "price" };
        assert_eq!(err.to_string(), "missing required field 'price'");
    }

    #[test]
    fn invalid_body_carries_reason() {
        let err = ValidationError::InvalidBody {
            reason: "expected f64".into(),
        };
        assert_eq!(err.to_string(), "invalid request body: expected f64");
    }
}
