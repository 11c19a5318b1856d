//! Macros for naming targets after the expression that holds them.
//!
//! # Available Macros
//!
//! - [`validate!`] — calls [`validate`](crate::validate) with the target
//!   name taken from the variable or field being guarded

/// Calls [`validate`](crate::validate) using the identifier as target name.
///
/// - `validate!(colour)` is `validate("colour", colour)`
/// - `validate!(self.colour)` is `validate("colour", self.colour)`
/// - `validate!(value, "name")` is `validate("name", value)`
///
/// # Examples
///
/// ```rust
/// use bulwark_validator::TextGuard;
///
/// let colour = "  ";
/// let err = bulwark_validator::validate!(colour)
///     .and_then(|g| g.against_blank())
///     .unwrap_err();
/// assert_eq!(err.target_name(), "colour");
/// ```
#[macro_export]
macro_rules! validate {
    ($target:ident) => {
        $crate::validate(::core::stringify!($target), $target)
    };
    ($base:ident . $field:ident) => {
        $crate::validate(::core::stringify!($field), $base.$field)
    };
    ($target:expr, $name:expr $(,)?) => {
        $crate::validate($name, $target)
    };
}
