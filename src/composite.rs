//! Form-wide rule aggregation with first-failure semantics
//!
//! A [`ValidationComposite`] holds the flat, ordered rule list for a whole form,
//! usually the concatenation of one [`ValidationBuilder`](crate::ValidationBuilder)
//! output per field. Asking it about a field scans the list in stored order,
//! looks only at rules bound to that field, and reports the first one that
//! fails.
//!
//! # Example
//!
//! ```rust
//! use fieldwise::{FormValues, ValidationBuilder as Builder, ValidationComposite};
//!
//! let composite = ValidationComposite::build([
//!     Builder::field("email").required().email().build(),
//!     Builder::field("password").required().min_length(5).build(),
//! ]);
//!
//! let values = FormValues::from([("email", ""), ("password", "1234")]);
//!
//! // required is checked before email, so an empty value reports "required"
//! assert_eq!(composite.validate("email", &values).as_deref(), Some("Required field"));
//! assert_eq!(composite.validate("password", &values).as_deref(), Some("Invalid value"));
//! assert_eq!(composite.validate("unbound_field", &values), None);
//! ```

use std::fmt;

use crate::rule::{FieldRule, FieldValidation};
use crate::values::FormValues;

/// Ordered list of field validations spanning a whole form.
///
/// Evaluation never mutates the composite, so one instance can be shared
/// read-only for the lifetime of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationComposite<R = FieldRule> {
    rules: Vec<R>,
}

impl<R: FieldValidation> ValidationComposite<R> {
    /// Create a composite from an already flattened rule list.
    pub fn new(rules: Vec<R>) -> Self {
        let composite = ValidationComposite { rules };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            rules = composite.rules.len(),
            fields = composite.fields().len(),
            "validation composite built"
        );
        composite
    }

    /// Create a composite by concatenating rule groups in order.
    ///
    /// Each group is typically the output of one builder chain.
    pub fn build<I>(groups: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = R>,
    {
        Self::new(groups.into_iter().flatten().collect())
    }

    /// The stored rules, in evaluation order.
    pub fn rules(&self) -> &[R] {
        &self.rules
    }

    /// Number of stored rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// `true` if no rule is stored.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Distinct bound field names, in order of first appearance.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for rule in &self.rules {
            let field = rule.field();
            if !fields.contains(&field) {
                fields.push(field);
            }
        }
        fields
    }

    /// Error of the first rule bound to `field` that rejects `values`.
    ///
    /// Returns `None` when every bound rule passes, including when no rule is
    /// bound to `field` at all.
    pub fn first_error(&self, field: &str, values: &FormValues) -> Option<R::Error> {
        self.rules
            .iter()
            .filter(|rule| rule.field() == field)
            .find_map(|rule| rule.validate(values).err())
    }
}

impl<R> ValidationComposite<R>
where
    R: FieldValidation,
    R::Error: fmt::Display,
{
    /// Message of the first failing rule for `field`, or `None` if it is
    /// acceptable.
    pub fn validate(&self, field: &str, values: &FormValues) -> Option<String> {
        let message = self.first_error(field, values)?.to_string();
        #[cfg(feature = "tracing")]
        tracing::trace!(field, error = %message, "field rejected");
        Some(message)
    }

    /// Validate every bound field at once.
    pub fn report(&self, values: &FormValues) -> FormReport {
        let errors = self
            .fields()
            .into_iter()
            .filter_map(|field| {
                self.validate(field, values)
                    .map(|message| (field.to_string(), message))
            })
            .collect();
        FormReport { errors }
    }

    /// `true` if no bound field currently reports an error.
    ///
    /// This is the flag a form uses to enable its submit button.
    pub fn is_valid(&self, values: &FormValues) -> bool {
        self.fields()
            .into_iter()
            .all(|field| self.first_error(field, values).is_none())
    }
}

impl<R: FieldValidation> From<Vec<R>> for ValidationComposite<R> {
    fn from(rules: Vec<R>) -> Self {
        Self::new(rules)
    }
}

impl<R: FieldValidation> FromIterator<R> for ValidationComposite<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Per-field error messages for a whole form snapshot.
///
/// Fields appear in the composite's field order; fields without an error are
/// omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FormReport {
    errors: Vec<(String, String)>,
}

impl FormReport {
    /// Error message for `field`, if it has one.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, message)| message.as_str())
    }

    /// `(field, message)` pairs for every failing field.
    pub fn errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors
            .iter()
            .map(|(name, message)| (name.as_str(), message.as_str()))
    }

    /// Number of failing fields.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// `true` if no field failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
