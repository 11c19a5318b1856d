//! Core guard types and traits
//!
//! This module contains the building blocks of the guard system:
//!
//! - **Engine**: [`Guard`] and its `test_against` primitive
//! - **Traits**: [`TextGuard`], [`IntoTarget`]
//! - **Errors**: [`ValidationFailure`], [`ConstructionError`], [`GuardError`]
//!
//! # Architecture
//!
//! ## 1. One generic guard
//!
//! A single `Guard<'a, T>` serves every target type. Checks that make sense
//! for any value (`against_null`, `against_invalid`) are inherent methods;
//! text-only checks come from [`TextGuard`], which is implemented for every
//! guard whose target is `AsRef<str>`.
//!
//! ## 2. Fail fast
//!
//! Every check returns `Result<Guard, ValidationFailure>`. The first failing
//! check ends the chain; nothing accumulates.
//!
//! ```rust
//! use bulwark_validator::foundation::{Guard, TextGuard, ValidationFailure};
//!
//! fn set_colour(colour: Option<&str>) -> Result<(), ValidationFailure> {
//!     Guard::new("colour", colour).against_blank()?;
//!     Ok(())
//! }
//!
//! assert!(set_colour(Some("teal")).is_ok());
//! assert_eq!(
//!     set_colour(None).unwrap_err().to_string(),
//!     "detected a `null` target; `colour` cannot be `null`."
//! );
//! ```
//!
//! ## 3. No side effects
//!
//! Checks never log, allocate on success, or touch shared state. A guard is
//! a `Copy` pair of references.

pub mod error;
pub mod guard;
pub mod traits;

pub use error::{BoxError, ConstructionError, GuardError, NULL_RENDERING, ValidationFailure};
pub use guard::Guard;
pub use traits::{IntoTarget, TextGuard};

/// A guard check result.
pub type GuardResult<'a, T> = Result<Guard<'a, T>, ValidationFailure>;

// ============================================================================
// PRELUDE
// ============================================================================

/// Common imports for working with guards directly.
pub mod prelude {
    pub use super::{Guard, GuardResult, IntoTarget, TextGuard, ValidationFailure};
}
