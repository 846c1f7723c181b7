//! Fluent construction of per-field rule lists
//!
//! [`ValidationBuilder`] records, in call order, the rules one field should be
//! checked against. The order is significant: the composite stops at the first
//! failing rule, so `required()` normally comes first.
//!
//! # Example
//!
//! ```rust
//! use fieldwise::{FieldRule, ValidationBuilder};
//!
//! let rules = ValidationBuilder::field("email").required().email().build();
//!
//! assert_eq!(
//!     rules,
//!     vec![FieldRule::required("email"), FieldRule::email("email")]
//! );
//! ```

use crate::rule::FieldRule;

/// Accumulates an ordered list of [`FieldRule`]s for a single field.
///
/// The builder does not validate anything itself, and any field name
/// (including the empty string) is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "builders do nothing until .build() is called"]
pub struct ValidationBuilder {
    field: String,
    rules: Vec<FieldRule>,
}

impl ValidationBuilder {
    /// Start an empty rule list for `name`.
    pub fn field(name: impl Into<String>) -> Self {
        ValidationBuilder {
            field: name.into(),
            rules: Vec::new(),
        }
    }

    /// Append [`FieldRule::required`].
    pub fn required(self) -> Self {
        let rule = FieldRule::required(self.field.as_str());
        self.push(rule)
    }

    /// Append [`FieldRule::email`].
    pub fn email(self) -> Self {
        let rule = FieldRule::email(self.field.as_str());
        self.push(rule)
    }

    /// Append [`FieldRule::min_length`] with the given minimum.
    pub fn min_length(self, min: usize) -> Self {
        let rule = FieldRule::min_length(self.field.as_str(), min);
        self.push(rule)
    }

    /// Append [`FieldRule::compare_fields`] against `other`.
    pub fn same_as(self, other: impl Into<String>) -> Self {
        let rule = FieldRule::compare_fields(self.field.as_str(), other);
        self.push(rule)
    }

    /// Field name this builder binds its rules to.
    pub fn field_name(&self) -> &str {
        &self.field
    }

    /// Finish and return the rules in the order they were added.
    pub fn build(self) -> Vec<FieldRule> {
        self.rules
    }

    fn push(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }
}

impl From<ValidationBuilder> for Vec<FieldRule> {
    fn from(builder: ValidationBuilder) -> Self {
        builder.build()
    }
}
