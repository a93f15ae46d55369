//! Plant field validation
//!
//! Each column the client can supply gets a newtype that enforces its
//! rules at construction. The repo layer only ever sees validated values.

use super::ValidationError;

/// Maximum length for plant names
const MAX_NAME_LEN: usize = 128;

/// Maximum length for image references
const MAX_IMAGE_LEN: usize = 512;

/// Validated plant name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantName(String);

impl PlantName {
    /// Create a new plant name.
    ///
    /// # Rules
    /// - Non-empty after trimming
    /// - Max 128 characters
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        if trimmed.len() > MAX_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_NAME_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PlantName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated image reference (URL or file path)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef(String);

impl ImageRef {
    /// Create a new image reference.
    ///
    /// # Rules
    /// - Non-empty after trimming
    /// - Max 512 characters
    /// - No embedded whitespace (single URL or path)
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "image" });
        }

        if trimmed.len() > MAX_IMAGE_LEN {
            return Err(ValidationError::TooLong {
                field: "image",
                max: MAX_IMAGE_LEN,
            });
        }

        if trimmed.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidFormat {
                field: "image",
                reason: "must be a single URL or path without whitespace",
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ImageRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated price in store currency
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price(f64);

impl Price {
    /// Create a new price.
    ///
    /// # Rules
    /// - Finite (NaN and infinities rejected)
    /// - Not negative
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::InvalidValue {
                field: "price",
                reason: "must be a finite number",
            });
        }

        if value < 0.0 {
            return Err(ValidationError::InvalidValue {
                field: "price",
                reason: "cannot be negative",
            });
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Validated input for creating a plant
#[derive(Debug, Clone)]
pub struct NewPlant {
    pub name: PlantName,
    pub image: ImageRef,
    pub price: Price,
}
