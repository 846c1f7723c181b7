//! Ready-made composites for the login and signup forms
//!
//! # Example
//!
//! ```rust
//! use fieldwise::forms::{self, PASSWORD, PASSWORD_CONFIRMATION};
//! use fieldwise::FormValues;
//!
//! let signup = forms::signup_validation();
//! let values = FormValues::from([(PASSWORD, "secret"), (PASSWORD_CONFIRMATION, "secrte")]);
//!
//! assert_eq!(signup.validate(PASSWORD, &values), None);
//! assert_eq!(
//!     signup.validate(PASSWORD_CONFIRMATION, &values).as_deref(),
//!     Some("Invalid value")
//! );
//! ```

use crate::builder::ValidationBuilder as Builder;
use crate::composite::ValidationComposite;

/// Email field name.
pub const EMAIL: &str = "email";
/// Password field name.
pub const PASSWORD: &str = "password";
/// Display name field name.
pub const NAME: &str = "name";
/// Password confirmation field name.
pub const PASSWORD_CONFIRMATION: &str = "passwordConfirmation";

/// Minimum length for passwords and names.
pub const MIN_LENGTH: usize = 5;

/// Validation for the login form.
///
/// - `email`: required, email
/// - `password`: required, at least 5 characters
pub fn login_validation() -> ValidationComposite {
    ValidationComposite::build([
        Builder::field(EMAIL).required().email().build(),
        Builder::field(PASSWORD).required().min_length(MIN_LENGTH).build(),
    ])
}

/// Validation for the signup form.
///
/// - `email`: required, email
/// - `name`: required, at least 5 characters
/// - `passwordConfirmation`: required, same as `password`
/// - `password`: required, at least 5 characters
pub fn signup_validation() -> ValidationComposite {
    ValidationComposite::build([
        Builder::field(EMAIL).required().email().build(),
        Builder::field(NAME).required().min_length(MIN_LENGTH).build(),
        Builder::field(PASSWORD_CONFIRMATION)
            .required()
            .same_as(PASSWORD)
            .build(),
        Builder::field(PASSWORD).required().min_length(MIN_LENGTH).build(),
    ])
}
