//! Declarative form schemas (feature-gated)
//!
//! A [`FormSchema`] lists, for each field, the ordered rule kinds it should be
//! checked against. It deserializes from any serde format and turns into a
//! [`ValidationComposite`] through the same builder the code path uses.
//!
//! # Example
//!
//! ```rust
//! use fieldwise::schema::FormSchema;
//! use fieldwise::FormValues;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let schema: FormSchema = serde_json::from_str(r#"{
//!     "fields": [
//!         { "name": "email", "rules": ["required", "email"] },
//!         { "name": "password", "rules": ["required", { "min_length": 5 }] }
//!     ]
//! }"#)?;
//!
//! let composite = schema.into_composite()?;
//! let values = FormValues::from([("password", "1234")]);
//! assert_eq!(composite.validate("password", &values).as_deref(), Some("Invalid value"));
//! assert_eq!(composite.validate("email", &values).as_deref(), Some("Required field"));
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::builder::ValidationBuilder;
use crate::composite::ValidationComposite;
use crate::error::SchemaError;

/// Kind of rule to attach to a field, in schema form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// See [`FieldRule::Required`](crate::FieldRule::Required).
    Required,
    /// See [`FieldRule::Email`](crate::FieldRule::Email).
    Email,
    /// See [`FieldRule::MinLength`](crate::FieldRule::MinLength).
    MinLength(usize),
    /// See [`FieldRule::CompareFields`](crate::FieldRule::CompareFields).
    SameAs(String),
}

/// One field and its ordered rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Field name.
    pub name: String,
    /// Rules, in evaluation order.
    #[serde(default)]
    pub rules: Vec<RuleKind>,
}

/// Ordered field declarations for a whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSchema {
    /// Fields, in evaluation order.
    #[serde(default)]
    pub fields: Vec<FieldSchema>,
}

impl FieldSchema {
    /// Declare a field with no rules yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Append a rule kind.
    pub fn rule(mut self, kind: RuleKind) -> Self {
        self.rules.push(kind);
        self
    }

    fn builder(&self) -> ValidationBuilder {
        self.rules
            .iter()
            .fold(ValidationBuilder::field(self.name.as_str()), |b, kind| {
                match kind {
                    RuleKind::Required => b.required(),
                    RuleKind::Email => b.email(),
                    RuleKind::MinLength(min) => b.min_length(*min),
                    RuleKind::SameAs(other) => b.same_as(other.as_str()),
                }
            })
    }
}

impl FormSchema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field declaration.
    pub fn field(mut self, field: FieldSchema) -> Self {
        self.fields.push(field);
        self
    }

    /// Check that every `same_as` target is a declared field.
    pub fn check(&self) -> Result<(), SchemaError> {
        for field in &self.fields {
            for kind in &field.rules {
                if let RuleKind::SameAs(other) = kind {
                    if !self.fields.iter().any(|f| &f.name == other) {
                        return Err(SchemaError::UnknownField {
                            field: other.clone(),
                            referenced_by: field.name.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Build the composite described by this schema.
    pub fn into_composite(self) -> Result<ValidationComposite, SchemaError> {
        self.check()?;
        Ok(ValidationComposite::build(
            self.fields.iter().map(|field| field.builder().build()),
        ))
    }
}
