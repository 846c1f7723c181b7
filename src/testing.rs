//! Testing utilities for code that wires up form validation
//!
//! Includes a configurable [`FieldValidationSpy`], assertion macros for
//! composites, and (with the `proptest` feature) an `Arbitrary` implementation
//! for [`FormValues`].
//!
//! # Examples
//!
//! ## Spying on evaluation order
//!
//! ```rust
//! use fieldwise::testing::FieldValidationSpy;
//! use fieldwise::{FormValues, ValidationComposite};
//!
//! let composite = ValidationComposite::new(vec![
//!     FieldValidationSpy::failing("any_field", "first_error"),
//!     FieldValidationSpy::failing("any_field", "second_error"),
//! ]);
//!
//! let error = composite.validate("any_field", &FormValues::new());
//! assert_eq!(error.as_deref(), Some("first_error"));
//! assert_eq!(composite.rules()[1].calls(), 0);
//! ```
//!
//! ## Assertion Macros
//!
//! ```rust
//! use fieldwise::{assert_field_error, assert_field_valid, forms, FormValues};
//!
//! let login = forms::login_validation();
//! let values = FormValues::from([("email", "user@example.com"), ("password", "1234")]);
//!
//! assert_field_valid!(login, "email", values);
//! assert_field_error!(login, "password", values, "Invalid value");
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::rule::FieldValidation;
use crate::values::FormValues;

/// A [`FieldValidation`] with a canned outcome that counts how often it runs.
#[derive(Debug)]
pub struct FieldValidationSpy {
    field: String,
    error: Option<String>,
    calls: AtomicUsize,
}

impl FieldValidationSpy {
    /// Spy bound to `field` that always passes.
    pub fn passing(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            error: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Spy bound to `field` that always fails with `error`.
    pub fn failing(field: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            error: Some(error.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times [`FieldValidation::validate`] has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Clone for FieldValidationSpy {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            error: self.error.clone(),
            calls: AtomicUsize::new(self.calls()),
        }
    }
}

impl FieldValidation for FieldValidationSpy {
    type Error = String;

    fn field(&self) -> &str {
        &self.field
    }

    fn validate(&self, _values: &FormValues) -> Result<(), String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

/// Assert that a composite accepts a field.
///
/// Panics with the reported message if the field fails.
///
/// # Example
///
/// ```rust
/// use fieldwise::{assert_field_valid, forms, FormValues};
///
/// let values = FormValues::from([("password", "12345")]);
/// assert_field_valid!(forms::login_validation(), "password", values);
/// ```
#[macro_export]
macro_rules! assert_field_valid {
    ($composite:expr, $field:expr, $values:expr) => {
        if let Some(message) = $composite.validate($field, &$values) {
            panic!(
                "Expected field {:?} to be valid, got error: {}",
                $field, message
            );
        }
    };
}

/// Assert that a composite rejects a field with a specific message.
///
/// The expected value may be anything implementing `Display`, such as a
/// string or a [`FieldError`](crate::FieldError).
///
/// # Example
///
/// ```rust
/// use fieldwise::{assert_field_error, forms, FieldError, FormValues};
///
/// let values = FormValues::new();
/// assert_field_error!(forms::login_validation(), "email", values, FieldError::Required);
/// ```
#[macro_export]
macro_rules! assert_field_error {
    ($composite:expr, $field:expr, $values:expr, $expected:expr) => {
        match $composite.validate($field, &$values) {
            Some(message) => {
                assert_eq!(message, $expected.to_string());
            }
            None => {
                panic!(
                    "Expected field {:?} to fail with {:?}, but it was valid",
                    $field,
                    $expected.to_string()
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for FormValues {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        prop::collection::btree_map("[a-z]{1,8}", ".{0,12}", 0..6)
            .prop_map(|fields| fields.into_iter().collect::<FormValues>())
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composite::ValidationComposite;
    use crate::error::FieldError;
    use crate::rule::FieldRule;

    fn password_only() -> ValidationComposite {
        ValidationComposite::new(vec![
            FieldRule::required("password"),
            FieldRule::min_length("password", 5),
        ])
    }

    #[test]
    fn passing_spy() {
        let spy = FieldValidationSpy::passing("f");
        assert_eq!(spy.field(), "f");
        assert_eq!(spy.validate(&FormValues::new()), Ok(()));
        assert_eq!(spy.calls(), 1);
    }

    #[test]
    fn failing_spy() {
        let spy = FieldValidationSpy::failing("f", "nope");
        assert_eq!(spy.validate(&FormValues::new()), Err("nope".to_string()));
        assert_eq!(spy.validate(&FormValues::new()), Err("nope".to_string()));
        assert_eq!(spy.calls(), 2);
    }

    #[test]
    fn clone_keeps_call_count() {
        let spy = FieldValidationSpy::passing("f");
        let _ = spy.validate(&FormValues::new());
        let copy = spy.clone();
        assert_eq!(copy.calls(), 1);
        let _ = copy.validate(&FormValues::new());
        assert_eq!(spy.calls(), 1);
        assert_eq!(copy.calls(), 2);
    }

    #[test]
    fn assert_field_valid_macro() {
        let values = FormValues::from([("password", "12345")]);
        assert_field_valid!(password_only(), "password", values);
    }

    #[test]
    fn assert_field_error_macro() {
        let values = FormValues::from([("password", "")]);
        assert_field_error!(password_only(), "password", values, "Required field");
        assert_field_error!(password_only(), "password", values, FieldError::Required);
    }

    #[test]
    #[should_panic(expected = "to be valid, got error")]
    fn assert_field_valid_panics_on_error() {
        let values = FormValues::new();
        assert_field_valid!(password_only(), "password", values);
    }

    #[test]
    #[should_panic(expected = "but it was valid")]
    fn assert_field_error_panics_on_valid() {
        let values = FormValues::from([("password", "12345")]);
        assert_field_error!(password_only(), "password", values, "Invalid value");
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;

        proptest! {
            #[test]
            fn arbitrary_form_values_have_nonempty_names(values in any::<FormValues>()) {
                prop_assert!(values.len() < 6);
                for (name, _) in values.iter() {
                    prop_assert!(!name.is_empty());
                }
            }
        }
    }
}
