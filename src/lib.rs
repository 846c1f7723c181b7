//! # Fieldwise
//!
//! Pure, synchronous form field validation built from small, ordered rules.
//!
//! ## Philosophy
//!
//! Validation is a value-in, value-out function: the form passes its current
//! values, the engine answers with the first problem for a field (or nothing).
//! No UI state, no I/O, no surprises.
//!
//! - [`FieldRule`]: one check bound to one field (required, email, minimum
//!   length, equality with another field)
//! - [`ValidationBuilder`]: a fluent way to list a field's rules in order
//! - [`ValidationComposite`]: the whole form's rules; reports the first
//!   failure per field
//!
//! ## Quick Example
//!
//! ```rust
//! use fieldwise::{FormValues, ValidationBuilder as Builder, ValidationComposite};
//!
//! let login = ValidationComposite::build([
//!     Builder::field("email").required().email().build(),
//!     Builder::field("password").required().min_length(5).build(),
//! ]);
//!
//! let values = FormValues::new()
//!     .with("email", "user@example.com")
//!     .with("password", "1234");
//!
//! assert_eq!(login.validate("email", &values), None);
//! assert_eq!(login.validate("password", &values).as_deref(), Some("Invalid value"));
//!
//! // the form's submit button stays disabled until every field passes
//! assert!(!login.is_valid(&values));
//! ```
//!
//! ## Features
//!
//! - `serde`: (de)serialize values and rules, and load `schema::FormSchema`s
//! - `tracing`: emit `tracing` events when composites are built and fields fail
//! - `proptest`: `Arbitrary` for [`FormValues`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod builder;
pub mod composite;
pub mod error;
pub mod forms;
pub mod predicate;
pub mod rule;
#[cfg(feature = "serde")]
pub mod schema;
pub mod testing;
pub mod values;

// Re-exports
pub use builder::ValidationBuilder;
pub use composite::{FormReport, ValidationComposite};
pub use error::{FieldError, SchemaError};
pub use rule::{FieldRule, FieldValidation};
pub use values::FormValues;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::builder::ValidationBuilder;
    pub use crate::composite::{FormReport, ValidationComposite};
    pub use crate::error::{FieldError, SchemaError};
    pub use crate::rule::{FieldRule, FieldValidation};
    pub use crate::values::FormValues;
}
