//! Prelude module for convenient imports.
//!
//! Provides a single `use bulwark_validator::prelude::*;` import that brings
//! in the entry points, the guard, its extension traits and the error types.
//!
//! # Examples
//!
//! ```rust
//! use bulwark_validator::prelude::*;
//!
//! let guard = validate("id", "abc")?.against_invalid(|v| v.len() != 3)?;
//! assert_eq!(guard.target(), Some("abc"));
//! # Ok::<(), ValidationFailure>(())
//! ```

// ============================================================================
// FOUNDATION: Guard, traits, errors
// ============================================================================

pub use crate::foundation::{
    ConstructionError, Guard, GuardError, GuardResult, IntoTarget, TextGuard, ValidationFailure,
};

// ============================================================================
// ENTRY POINTS
// ============================================================================

pub use crate::{validate, validate_with};
