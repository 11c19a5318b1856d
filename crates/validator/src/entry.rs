//! Entry points
//!
//! [`validate`] checks the target name and hands back a [`Guard`];
//! [`validate_with`] does the same but lets the caller build their own
//! validator type from the name and target.

use crate::foundation::{
    BoxError, ConstructionError, Guard, GuardError, IntoTarget, TextGuard, ValidationFailure,
};

/// Label used when the target name itself fails its check.
pub const TARGET_NAME_LABEL: &str = "target_name";

/// Creates a guard for a named target.
///
/// The name must not be absent, empty or blank; if it is, the returned
/// failure is about the name (labelled [`TARGET_NAME_LABEL`]), not the target.
/// Both arguments accept either `&T` or `Option<&T>`.
///
/// # Examples
///
/// ```rust
/// use bulwark_validator::{validate, TextGuard};
///
/// fn set_colour(colour: &str) -> Result<(), bulwark_validator::ValidationFailure> {
///     validate("colour", colour)?.against_blank()?;
///     Ok(())
/// }
///
/// assert!(set_colour("teal").is_ok());
/// assert!(set_colour("   ").is_err());
/// assert!(validate("  ", "teal").is_err());
/// ```
pub fn validate<'a, T>(
    target_name: impl IntoTarget<'a, str>,
    target: impl IntoTarget<'a, T>,
) -> Result<Guard<'a, T>, ValidationFailure>
where
    T: ?Sized,
{
    let target_name = checked_name(target_name)?;
    Ok(Guard::new(target_name, target.into_target()))
}

/// Creates a caller-defined validator for a named target.
///
/// Applies the same name check as [`validate`], then calls `factory` with the
/// name and target. An error from `factory` comes back as
/// [`GuardError::Construction`], with the original error as its source.
///
/// # Examples
///
/// ```rust
/// use bulwark_validator::{validate_with, Guard, GuardError, ValidationFailure};
///
/// struct PortGuard<'a>(Guard<'a, u16>);
///
/// impl<'a> PortGuard<'a> {
///     fn against_privileged(self) -> Result<Self, ValidationFailure> {
///         self.0.against_invalid(|p| *p < 1024).map(PortGuard)
///     }
/// }
///
/// let port = 8080;
/// let guard = validate_with("port", &port, |name, target| {
///     Ok::<_, std::convert::Infallible>(PortGuard(Guard::new(name, target)))
/// })?;
/// assert!(guard.against_privileged().is_ok());
/// # Ok::<(), GuardError>(())
/// ```
pub fn validate_with<'a, T, V, E, F>(
    target_name: impl IntoTarget<'a, str>,
    target: impl IntoTarget<'a, T>,
    factory: F,
) -> Result<V, GuardError>
where
    T: ?Sized + 'a,
    F: FnOnce(&'a str, Option<&'a T>) -> Result<V, E>,
    E: Into<BoxError>,
{
    let target_name = checked_name(target_name)?;
    factory(target_name, target.into_target()).map_err(|err| {
        let err = ConstructionError::new(err);
        tracing::debug!(target_name, error = %err, "custom validator construction failed");
        GuardError::Construction(err)
    })
}

fn checked_name<'a>(target_name: impl IntoTarget<'a, str>) -> Result<&'a str, ValidationFailure> {
    Guard::new(TARGET_NAME_LABEL, target_name.into_target())
        .against_blank()?
        .require()
}
