//! String predicates the field rules are built from
//!
//! Each predicate answers a yes/no question about a single string. Rules decide
//! what an absent value means and which [`FieldError`](crate::FieldError) a
//! failed check maps to; predicates only look at text.
//!
//! # Example
//!
//! ```rust
//! use fieldwise::predicate::*;
//!
//! assert!(not_empty().check("hello"));
//! assert!(min_chars(3).check("abc"));
//! assert!(!min_chars(3).check("ab"));
//! assert!(email_shape().check("user@example.com"));
//! assert!(!email_shape().check("not-an-email"));
//! ```

/// A check over values of type `T`.
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Predicate that checks if a string is not empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotEmpty;

impl Predicate<str> for NotEmpty {
    #[inline]
    fn check(&self, value: &str) -> bool {
        !value.is_empty()
    }
}

/// Create a predicate that checks if a string is not empty.
///
/// Whitespace counts as content.
///
/// ```rust
/// use fieldwise::predicate::*;
///
/// assert!(not_empty().check(" "));
/// assert!(!not_empty().check(""));
/// ```
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

/// Predicate that checks a string has at least `min` characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinChars(pub usize);

impl Predicate<str> for MinChars {
    #[inline]
    fn check(&self, value: &str) -> bool {
        // stop counting once min is reached
        value.chars().take(self.0).count() >= self.0
    }
}

/// Create a predicate that checks a string has at least `min` characters.
///
/// Length is counted in Unicode scalar values, not bytes.
///
/// ```rust
/// use fieldwise::predicate::*;
///
/// assert!(min_chars(5).check("abcde"));
/// assert!(!min_chars(5).check("abcd"));
/// assert!(min_chars(2).check("éé"));
/// ```
pub fn min_chars(min: usize) -> MinChars {
    MinChars(min)
}

/// Predicate that checks a string looks like `local@domain.tld`.
///
/// Accepted when the string has no whitespace, exactly one `@`, a non-empty
/// local part, and a domain of at least two non-empty labels separated by
/// dots.
#[derive(Clone, Copy, Default, Debug)]
pub struct EmailShape;

impl Predicate<str> for EmailShape {
    fn check(&self, value: &str) -> bool {
        if value.chars().any(char::is_whitespace) {
            return false;
        }
        let Some((local, domain)) = value.split_once('@') else {
            return false;
        };
        if local.is_empty() || domain.contains('@') {
            return false;
        }
        let mut labels = 0;
        for label in domain.split('.') {
            if label.is_empty() {
                return false;
            }
            labels += 1;
        }
        labels >= 2
    }
}

/// Create a predicate that checks a string is shaped like an email address.
///
/// ```rust
/// use fieldwise::predicate::*;
///
/// assert!(email_shape().check("a.b+tag@mail.example.org"));
/// assert!(!email_shape().check("user@localhost"));
/// assert!(!email_shape().check("user @example.com"));
/// ```
pub fn email_shape() -> EmailShape {
    EmailShape
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty() {
        assert!(not_empty().check("x"));
        assert!(not_empty().check("  "));
        assert!(!not_empty().check(""));
    }

    #[test]
    fn test_min_chars_boundary() {
        let p = min_chars(5);
        assert!(!p.check(""));
        assert!(!p.check("abcd"));
        assert!(p.check("abcde"));
        assert!(p.check("abcdef"));
    }

    #[test]
    fn test_min_chars_zero_accepts_empty() {
        assert!(min_chars(0).check(""));
    }

    #[test]
    fn test_min_chars_counts_characters_not_bytes() {
        // 4 chars, 8 bytes
        assert!(!min_chars(5).check("ññññ"));
        assert!(min_chars(4).check("ññññ"));
    }

    #[test]
    fn test_email_shape_accepts() {
        let p = email_shape();
        assert!(p.check("user@example.com"));
        assert!(p.check("first.last@sub.example.co.uk"));
        assert!(p.check("x+y@a.io"));
    }

    #[test]
    fn test_email_shape_rejects() {
        let p = email_shape();
        for value in [
            "not-an-email",
            "@example.com",
            "user@",
            "user@example",
            "user@.com",
            "user@example.",
            "user@exa..mple.com",
            "us er@example.com",
            "user@example.com\n",
            "a@b@example.com",
        ] {
            assert!(!p.check(value), "{value:?} should be rejected");
        }
    }

    #[test]
    fn test_closure_predicate() {
        let no_digits = |s: &str| !s.chars().any(|c| c.is_ascii_digit());
        assert!(Predicate::<str>::check(&no_digits, "abc"));
        assert!(!Predicate::<str>::check(&no_digits, "a1c"));
    }
}
