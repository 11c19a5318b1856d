//! Error types for guard failures
//!
//! Two layers live here:
//!
//! - [`ValidationFailure`] — the closed family of check failures. Each one is
//!   terminal for the chain that raised it and renders a complete,
//!   ready-to-display sentence naming the offending target.
//! - [`ConstructionError`] / [`GuardError`] — infrastructure errors for the
//!   custom-validator path in [`validate_with`](crate::validate_with).

use std::error::Error as StdError;
use std::fmt;

/// Rendering used in messages when a target is absent.
pub const NULL_RENDERING: &str = "null";

// ============================================================================
// VALIDATION FAILURE
// ============================================================================

/// A failed guard check.
///
/// Match on the enum to handle the whole family, or on a single variant to
/// react to one kind of failure:
///
/// ```rust
/// use bulwark_validator::{ValidationFailure, validate, TextGuard};
///
/// let err = validate("colour", "").and_then(|g| g.against_blank()).unwrap_err();
/// assert!(matches!(err, ValidationFailure::EmptyTarget { .. }));
/// assert_eq!(err.to_string(), "detected an empty target; `colour` cannot be empty.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ValidationFailure {
    /// The target was absent.
    #[error("detected a `null` target; `{target_name}` cannot be `null`.")]
    NullTarget {
        /// Label of the target that failed.
        target_name: String,
    },

    /// The target was present but had zero length.
    #[error("detected an empty target; `{target_name}` cannot be empty.")]
    EmptyTarget {
        /// Label of the target that failed.
        target_name: String,
    },

    /// The target text contained only whitespace.
    #[error("detected a blank target text; `{target_name}` cannot be blank.")]
    BlankTargetText {
        /// Label of the target that failed.
        target_name: String,
    },

    /// A caller-supplied invalidity predicate matched the target.
    #[error("detected an invalid target; `{target_name}` cannot be `{target}`.")]
    InvalidTarget {
        /// Label of the target that failed.
        target_name: String,
        /// `Display` rendering of the rejected value, or `null`.
        target: String,
    },
}

impl ValidationFailure {
    /// Creates a [`ValidationFailure::NullTarget`].
    pub fn null_target(target_name: impl Into<String>) -> Self {
        Self::NullTarget {
            target_name: target_name.into(),
        }
    }

    /// Creates a [`ValidationFailure::EmptyTarget`].
    pub fn empty_target(target_name: impl Into<String>) -> Self {
        Self::EmptyTarget {
            target_name: target_name.into(),
        }
    }

    /// Creates a [`ValidationFailure::BlankTargetText`].
    pub fn blank_target_text(target_name: impl Into<String>) -> Self {
        Self::BlankTargetText {
            target_name: target_name.into(),
        }
    }

    /// Creates a [`ValidationFailure::InvalidTarget`].
    ///
    /// `None` renders as `null` in the message.
    pub fn invalid_target<V: fmt::Display>(target_name: impl Into<String>, target: Option<V>) -> Self {
        Self::InvalidTarget {
            target_name: target_name.into(),
            target: target.map_or_else(|| NULL_RENDERING.to_owned(), |t| t.to_string()),
        }
    }

    /// Label of the target that caused this failure.
    #[must_use]
    pub fn target_name(&self) -> &str {
        match self {
            Self::NullTarget { target_name }
            | Self::EmptyTarget { target_name }
            | Self::BlankTargetText { target_name }
            | Self::InvalidTarget { target_name, .. } => target_name,
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NullTarget { .. } => "NULL_TARGET",
            Self::EmptyTarget { .. } => "EMPTY_TARGET",
            Self::BlankTargetText { .. } => "BLANK_TARGET_TEXT",
            Self::InvalidTarget { .. } => "INVALID_TARGET",
        }
    }

    /// The rendered, ready-to-display message.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Whether the check might pass if repeated with the same input.
    ///
    /// Checks are deterministic, so this is `false` for every variant.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// JSON view of the failure: `code`, `target_name`, `message` and, for
    /// [`ValidationFailure::InvalidTarget`], `target`.
    #[cfg(feature = "serde")]
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let mut value = serde_json::json!({
            "code": self.code(),
            "target_name": self.target_name(),
            "message": self.message(),
        });
        if let Self::InvalidTarget { target, .. } = self {
            value["target"] = serde_json::Value::String(target.clone());
        }
        value
    }
}

// ============================================================================
// CONSTRUCTION ERRORS
// ============================================================================

/// Boxed error produced by a custom-validator factory.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// A custom-validator factory failed to build its validator.
///
/// Sits outside the [`ValidationFailure`] family: it reports a broken
/// validator, not a bad target.
#[derive(Debug, thiserror::Error)]
#[error("validator construction failed: {source}")]
pub struct ConstructionError {
    #[source]
    source: BoxError,
}

impl ConstructionError {
    /// Wraps the factory's error.
    pub fn new(source: impl Into<BoxError>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Extracts the factory's error.
    pub fn into_inner(self) -> BoxError {
        self.source
    }
}

/// Everything [`validate_with`](crate::validate_with) can report.
#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    /// The target name itself failed its precondition.
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// The custom validator could not be built.
    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

impl GuardError {
    /// The validation failure, if this is one.
    #[must_use]
    pub fn as_validation(&self) -> Option<&ValidationFailure> {
        match self {
            Self::Validation(failure) => Some(failure),
            Self::Construction(_) => None,
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(failure) => failure.code(),
            Self::Construction(_) => "VALIDATOR_CONSTRUCTION_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_messages() {
        assert_eq!(
            ValidationFailure::null_target("colour").to_string(),
            "detected a `null` target; `colour` cannot be `null`."
        );
        assert_eq!(
            ValidationFailure::empty_target("colour").to_string(),
            "detected an empty target; `colour` cannot be empty."
        );
        assert_eq!(
            ValidationFailure::blank_target_text("colour").to_string(),
            "detected a blank target text; `colour` cannot be blank."
        );
        assert_eq!(
            ValidationFailure::invalid_target("age", Some(-3)).to_string(),
            "detected an invalid target; `age` cannot be `-3`."
        );
    }

    #[test]
    fn invalid_target_renders_absent_value_as_null() {
        let failure = ValidationFailure::invalid_target("age", None::<i32>);
        assert_eq!(
            failure.to_string(),
            "detected an invalid target; `age` cannot be `null`."
        );
    }

    #[test]
    fn accessors() {
        let failure = ValidationFailure::blank_target_text("name");
        assert_eq!(failure.target_name(), "name");
        assert_eq!(failure.code(), "BLANK_TARGET_TEXT");
        assert_eq!(failure.message(), failure.to_string());
        assert!(!failure.is_retryable());
    }

    #[test]
    fn codes_are_distinct() {
        let codes = [
            ValidationFailure::null_target("t").code(),
            ValidationFailure::empty_target("t").code(),
            ValidationFailure::blank_target_text("t").code(),
            ValidationFailure::invalid_target("t", Some("x")).code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn construction_error_keeps_source() {
        let err = ConstructionError::new("port out of range");
        assert_eq!(
            err.to_string(),
            "validator construction failed: port out of range"
        );
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("port out of range")
        );
    }

    #[test]
    fn construction_error_hands_back_source() {
        let err = ConstructionError::new(std::fmt::Error);
        let source = err.into_inner();
        assert!(source.downcast_ref::<std::fmt::Error>().is_some());
    }

    #[test]
    fn guard_error_is_transparent() {
        let err = GuardError::from(ValidationFailure::empty_target("target_name"));
        assert_eq!(
            err.to_string(),
            "detected an empty target; `target_name` cannot be empty."
        );
        assert_eq!(err.code(), "EMPTY_TARGET");
        assert!(err.as_validation().is_some());

        let err = GuardError::from(ConstructionError::new("boom"));
        assert_eq!(err.code(), "VALIDATOR_CONSTRUCTION_FAILED");
        assert!(err.as_validation().is_none());
    }
}
