//! Extension traits for guards
//!
//! - [`TextGuard`] adds the text-only checks to every guard over a type that
//!   is `AsRef<str>`.
//! - [`IntoTarget`] lets entry points accept either a reference or an
//!   `Option` of one.

use crate::foundation::{Guard, ValidationFailure};

// ============================================================================
// TEXT CHECKS
// ============================================================================

/// Text-only checks, layered on the null check.
///
/// Implemented for `Guard<'_, T>` whenever `T: AsRef<str>`, which covers
/// `str`, `String`, `Cow<str>` and friends. Checks form a fixed precedence
/// ladder: an absent target is always a
/// [`NullTarget`](ValidationFailure::NullTarget), a zero-length one always an
/// [`EmptyTarget`](ValidationFailure::EmptyTarget), and only then is
/// whitespace reported as [`BlankTargetText`](ValidationFailure::BlankTargetText).
///
/// # Examples
///
/// ```rust
/// use bulwark_validator::{Guard, TextGuard, ValidationFailure};
///
/// let err = Guard::new("colour", Some(" \t")).against_blank().unwrap_err();
/// assert_eq!(err, ValidationFailure::blank_target_text("colour"));
///
/// let owned = String::from("teal");
/// assert!(Guard::new("colour", Some(&owned)).against_blank().is_ok());
/// ```
pub trait TextGuard: Sized {
    /// Fails with `NullTarget` if absent, then with `EmptyTarget` if the text
    /// has zero length.
    fn against_empty(self) -> Result<Self, ValidationFailure>;

    /// Runs [`against_empty`](TextGuard::against_empty), then fails with
    /// `BlankTargetText` if the text is only whitespace.
    fn against_blank(self) -> Result<Self, ValidationFailure>;
}

impl<T> TextGuard for Guard<'_, T>
where
    T: AsRef<str> + ?Sized,
{
    fn against_empty(self) -> Result<Self, ValidationFailure> {
        self.against_null()?
            .test_against(|t| t.as_ref().is_empty(), Guard::empty_target_detected)
    }

    fn against_blank(self) -> Result<Self, ValidationFailure> {
        self.against_empty()?.test_against(
            |t| t.as_ref().trim().is_empty(),
            Guard::blank_target_text_detected,
        )
    }
}

// ============================================================================
// TARGET CONVERSION
// ============================================================================

/// Types that can stand in for a possibly absent target.
///
/// `&T` is always present; `Option<&T>` is absent when `None`.
pub trait IntoTarget<'a, T: ?Sized> {
    /// Converts into the guard's target representation.
    fn into_target(self) -> Option<&'a T>;
}

impl<'a, T: ?Sized> IntoTarget<'a, T> for &'a T {
    #[inline]
    fn into_target(self) -> Option<&'a T> {
        Some(self)
    }
}

impl<'a, T: ?Sized> IntoTarget<'a, T> for Option<&'a T> {
    #[inline]
    fn into_target(self) -> Option<&'a T> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[test]
    fn absent_text_is_null_for_every_check() {
        let guard = Guard::<str>::new("colour", None);
        let expected = Err(ValidationFailure::null_target("colour"));
        assert_eq!(guard.against_null(), expected);
        assert_eq!(guard.against_empty(), expected);
        assert_eq!(guard.against_blank(), expected);
    }

    #[test]
    fn empty_text() {
        let guard = Guard::new("colour", Some(""));
        let expected = Err(ValidationFailure::empty_target("colour"));
        assert_eq!(guard.against_null(), Ok(guard));
        assert_eq!(guard.against_empty(), expected);
        assert_eq!(guard.against_blank(), expected);
    }

    #[test]
    fn blank_text() {
        for blank in [" ", "\t ", "\n\r\t", "\u{2003}"] {
            let guard = Guard::new("colour", Some(blank));
            assert_eq!(guard.against_empty(), Ok(guard));
            assert_eq!(
                guard.against_blank(),
                Err(ValidationFailure::blank_target_text("colour"))
            );
        }
    }

    #[test]
    fn meaningful_text_passes_every_check() {
        let guard = Guard::new("colour", Some(" teal "));
        assert_eq!(guard.against_null(), Ok(guard));
        assert_eq!(guard.against_empty(), Ok(guard));
        assert_eq!(guard.against_blank(), Ok(guard));
    }

    #[test]
    fn works_for_owned_and_borrowed_text() {
        let owned = String::new();
        assert_eq!(
            Guard::new("s", Some(&owned)).against_empty(),
            Err(ValidationFailure::empty_target("s"))
        );

        let cow: Cow<'_, str> = Cow::Borrowed("  ");
        assert_eq!(
            Guard::new("s", Some(&cow)).against_blank(),
            Err(ValidationFailure::blank_target_text("s"))
        );
    }

    #[test]
    fn into_target_conversions() {
        let present: Option<&str> = "x".into_target();
        let absent: Option<&str> = None::<&str>.into_target();
        let number: Option<&i32> = Some(&1).into_target();
        assert_eq!(present, Some("x"));
        assert_eq!(absent, None);
        assert_eq!(number, Some(&1));
    }
}
