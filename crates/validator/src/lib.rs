//! # bulwark-validator
//!
//! Fluent guard clauses for parameter validation. Name a value, chain checks,
//! and get back the first failure as a typed [`ValidationFailure`].
//!
//! ## Quick Start
//!
//! ```rust
//! use bulwark_validator::prelude::*;
//!
//! fn set_colour(colour: Option<&str>) -> Result<(), ValidationFailure> {
//!     validate("colour", colour)?.against_blank()?;
//!     Ok(())
//! }
//!
//! assert!(set_colour(Some("teal")).is_ok());
//!
//! let err = set_colour(None).unwrap_err();
//! assert!(matches!(err, ValidationFailure::NullTarget { .. }));
//! assert_eq!(err.to_string(), "detected a `null` target; `colour` cannot be `null`.");
//! ```
//!
//! ## Checks
//!
//! - **Any target**: [`Guard::against_null`], [`Guard::against_invalid`],
//!   and the underlying [`Guard::test_against`]
//! - **Text** (`T: AsRef<str>`): [`TextGuard::against_empty`],
//!   [`TextGuard::against_blank`]
//!
//! Text checks are ordered: null, then empty, then blank. An absent target is
//! always reported as [`ValidationFailure::NullTarget`].
//!
//! ## Custom validators
//!
//! Wrap a [`Guard`] in your own type and build it with [`validate_with`].
//!
//! ## Features
//!
//! - `serde`: `Serialize` for [`ValidationFailure`] and
//!   [`ValidationFailure::to_json`]

mod entry;
pub mod foundation;
mod macros;
pub mod prelude;

pub use entry::{TARGET_NAME_LABEL, validate, validate_with};
pub use foundation::{
    BoxError, ConstructionError, Guard, GuardError, GuardResult, IntoTarget, TextGuard,
    ValidationFailure,
};
