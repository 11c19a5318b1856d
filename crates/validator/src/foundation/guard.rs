//! The guard chain engine
//!
//! A [`Guard`] pairs a target name with a borrowed, possibly absent, target.
//! Every check consumes the guard and hands it back on success, so checks
//! chain with `?` or [`Result::and_then`]:
//!
//! ```rust
//! use bulwark_validator::{Guard, ValidationFailure};
//!
//! fn set_port(port: Option<&u16>) -> Result<u16, ValidationFailure> {
//!     let port = Guard::new("port", port)
//!         .against_null()?
//!         .against_invalid(|p| *p < 1024)?
//!         .require()?;
//!     Ok(*port)
//! }
//!
//! assert_eq!(set_port(Some(&8080)), Ok(8080));
//! assert!(set_port(Some(&80)).is_err());
//! assert!(set_port(None).is_err());
//! ```

use std::fmt;

use crate::foundation::ValidationFailure;

/// A named target under validation.
///
/// Both fields are fixed at construction. A guard is `Copy` regardless of
/// `T`, since it only holds references.
pub struct Guard<'a, T: ?Sized> {
    target_name: &'a str,
    target: Option<&'a T>,
}

impl<'a, T: ?Sized> Guard<'a, T> {
    /// Captures `(target_name, target)`. Performs no validation.
    ///
    /// The name is not checked here; [`validate`](crate::validate) does that.
    pub fn new(target_name: &'a str, target: Option<&'a T>) -> Self {
        Self {
            target_name,
            target,
        }
    }

    /// Label of the target.
    pub fn target_name(&self) -> &'a str {
        self.target_name
    }

    /// The target, or `None` if absent.
    pub fn target(&self) -> Option<&'a T> {
        self.target
    }

    /// Applies an invalidity predicate.
    ///
    /// An absent target fails with [`ValidationFailure::NullTarget`] without
    /// evaluating `predicate`. A present target fails with `on_failure(&self)`
    /// when `predicate` returns `true`, and passes otherwise.
    pub fn test_against<P, F>(self, predicate: P, on_failure: F) -> Result<Self, ValidationFailure>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&Self) -> ValidationFailure,
    {
        let Some(target) = self.target else {
            return Err(self.null_target_detected());
        };
        if predicate(target) {
            Err(on_failure(&self))
        } else {
            Ok(self)
        }
    }

    /// Fails with [`ValidationFailure::NullTarget`] iff the target is absent.
    pub fn against_null(self) -> Result<Self, ValidationFailure> {
        self.test_against(|_| false, Self::null_target_detected)
    }

    /// Fails with [`ValidationFailure::InvalidTarget`] when `predicate`
    /// flags the (present) target as invalid.
    pub fn against_invalid<P>(self, predicate: P) -> Result<Self, ValidationFailure>
    where
        P: FnOnce(&T) -> bool,
        T: fmt::Display,
    {
        self.test_against(predicate, Self::invalid_target_detected)
    }

    /// Checks the target is present and returns it.
    pub fn require(self) -> Result<&'a T, ValidationFailure> {
        self.target.ok_or_else(|| self.null_target_detected())
    }

    /// Builds the [`ValidationFailure::NullTarget`] for this guard.
    pub fn null_target_detected(&self) -> ValidationFailure {
        ValidationFailure::null_target(self.target_name)
    }

    /// Builds the [`ValidationFailure::EmptyTarget`] for this guard.
    pub fn empty_target_detected(&self) -> ValidationFailure {
        ValidationFailure::empty_target(self.target_name)
    }

    /// Builds the [`ValidationFailure::BlankTargetText`] for this guard.
    pub fn blank_target_text_detected(&self) -> ValidationFailure {
        ValidationFailure::blank_target_text(self.target_name)
    }

    /// Builds the [`ValidationFailure::InvalidTarget`] for this guard.
    pub fn invalid_target_detected(&self) -> ValidationFailure
    where
        T: fmt::Display,
    {
        ValidationFailure::invalid_target(self.target_name, self.target)
    }
}

impl<T: ?Sized> Clone for Guard<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Guard<'_, T> {}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Guard<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard")
            .field("target_name", &self.target_name)
            .field("target", &self.target)
            .finish()
    }
}

// Same name and same target value.
impl<T: ?Sized + PartialEq> PartialEq for Guard<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.target_name == other.target_name && self.target == other.target
    }
}

impl<T: ?Sized + Eq> Eq for Guard<'_, T> {}
