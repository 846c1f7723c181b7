//! Error kinds produced by field validation
//!
//! Validation failures are ordinary values, not exceptional control flow. A rule
//! reports one of two kinds:
//!
//! - [`FieldError::Required`]: the field has no usable value
//! - [`FieldError::Invalid`]: the field has a value, but it breaks a shape,
//!   length or equality constraint
//!
//! # Example
//!
//! ```rust
//! use fieldwise::FieldError;
//!
//! assert_eq!(FieldError::Required.to_string(), "Required field");
//! assert_eq!(FieldError::Invalid.message(), "Invalid value");
//! ```

use std::fmt;

/// Reason a single field failed a validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FieldError {
    /// The field is absent or empty.
    Required,
    /// The field has a value that fails a format, length or comparison check.
    Invalid,
}

impl FieldError {
    /// Human-readable message, suitable for display next to the field.
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::Required => "Required field",
            FieldError::Invalid => "Invalid value",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for FieldError {}

/// Error returned when a declarative form schema is inconsistent.
///
/// Only produced while turning a schema into a composite; evaluating rules
/// never fails this way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A rule refers to a field the schema never declares.
    UnknownField {
        /// The undeclared field name.
        field: String,
        /// The declared field whose rule holds the reference.
        referenced_by: String,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::UnknownField {
                field,
                referenced_by,
            } => write!(
                f,
                "field '{}' references undeclared field '{}'",
                referenced_by, field
            ),
        }
    }
}

impl std::error::Error for SchemaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_error_messages() {
        assert_eq!(FieldError::Required.message(), "Required field");
        assert_eq!(FieldError::Invalid.message(), "Invalid value");
    }

    #[test]
    fn field_error_display_matches_message() {
        assert_eq!(format!("{}", FieldError::Required), "Required field");
        assert_eq!(format!("{}", FieldError::Invalid), "Invalid value");
    }

    #[test]
    fn field_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(FieldError::Invalid);
        assert_eq!(err.to_string(), "Invalid value");
        assert!(err.source().is_none());
    }

    #[test]
    fn schema_error_display() {
        let err = SchemaError::UnknownField {
            field: "password".to_string(),
            referenced_by: "passwordConfirmation".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "field 'passwordConfirmation' references undeclared field 'password'"
        );
    }
}
