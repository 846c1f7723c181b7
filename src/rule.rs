//! Field validation rules
//!
//! A rule is bound to one target field when it is created and decides, given the
//! whole [`FormValues`] snapshot, whether that field is acceptable. Rules are
//! pure: the same values always produce the same answer.
//!
//! [`FieldValidation`] is the seam the [`ValidationComposite`](crate::ValidationComposite)
//! evaluates through; [`FieldRule`] is the closed set of built-in rules.
//!
//! # Example
//!
//! ```rust
//! use fieldwise::{FieldError, FieldRule, FieldValidation, FormValues};
//!
//! let rule = FieldRule::min_length("password", 5);
//!
//! let short = FormValues::from([("password", "1234")]);
//! assert_eq!(rule.validate(&short), Err(FieldError::Invalid));
//!
//! let ok = FormValues::from([("password", "12345")]);
//! assert_eq!(rule.validate(&ok), Ok(()));
//! ```

use crate::error::FieldError;
use crate::predicate::{email_shape, min_chars, not_empty, Predicate};
use crate::values::FormValues;

/// Something that can validate one named field against the current form values.
///
/// Implementations must be pure functions of `values`.
pub trait FieldValidation {
    /// Error reported when the field is rejected.
    type Error;

    /// Name of the field this validation is bound to.
    fn field(&self) -> &str;

    /// Validate the bound field.
    fn validate(&self, values: &FormValues) -> Result<(), Self::Error>;
}

/// One built-in validation rule, bound to its target field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "rule", rename_all = "snake_case"))]
pub enum FieldRule {
    /// Field must be present and non-empty.
    Required {
        /// Target field.
        field: String,
    },
    /// Field, when filled in, must look like an email address.
    Email {
        /// Target field.
        field: String,
    },
    /// Field, when present, must have at least `min` characters.
    MinLength {
        /// Target field.
        field: String,
        /// Smallest accepted length, in characters.
        min: usize,
    },
    /// Field must equal another field (password confirmation).
    CompareFields {
        /// Target field.
        field: String,
        /// Field the target is compared with.
        other: String,
    },
}

impl FieldRule {
    /// Rule rejecting an absent or empty value with [`FieldError::Required`].
    pub fn required(field: impl Into<String>) -> Self {
        FieldRule::Required {
            field: field.into(),
        }
    }

    /// Rule rejecting a non-empty value that is not an email address.
    ///
    /// Absent and empty values pass; pair with [`FieldRule::required`] to
    /// reject them.
    pub fn email(field: impl Into<String>) -> Self {
        FieldRule::Email {
            field: field.into(),
        }
    }

    /// Rule rejecting a value shorter than `min` characters.
    ///
    /// An absent value passes. An empty string is measured like any other.
    pub fn min_length(field: impl Into<String>, min: usize) -> Self {
        FieldRule::MinLength {
            field: field.into(),
            min,
        }
    }

    /// Rule rejecting a value that differs from `other`'s value.
    ///
    /// Two absent values are equal; an absent value and an empty string are
    /// not.
    pub fn compare_fields(field: impl Into<String>, other: impl Into<String>) -> Self {
        FieldRule::CompareFields {
            field: field.into(),
            other: other.into(),
        }
    }
}

impl FieldValidation for FieldRule {
    type Error = FieldError;

    fn field(&self) -> &str {
        match self {
            FieldRule::Required { field }
            | FieldRule::Email { field }
            | FieldRule::MinLength { field, .. }
            | FieldRule::CompareFields { field, .. } => field,
        }
    }

    fn validate(&self, values: &FormValues) -> Result<(), FieldError> {
        let value = values.get(self.field());
        let accepted = match self {
            FieldRule::Required { .. } => value.is_some_and(|v| not_empty().check(v)),
            FieldRule::Email { .. } => match value {
                Some(v) if !v.is_empty() => email_shape().check(v),
                _ => true,
            },
            FieldRule::MinLength { min, .. } => value.is_none_or(|v| min_chars(*min).check(v)),
            FieldRule::CompareFields { other, .. } => value == values.get(other),
        };

        if accepted {
            Ok(())
        } else if let FieldRule::Required { .. } = self {
            Err(FieldError::Required)
        } else {
            Err(FieldError::Invalid)
        }
    }
}
