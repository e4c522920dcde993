//! Input validation

use parcelsort_core::{Error, Field, PackageMeasurement, Result};

/// Reported as the actual type when a number is NaN or infinite
pub const NON_FINITE: &str = "non-finite number";

/// Validate a single numeric input
///
/// Non-finite values are rejected before the sign check, so `-inf` is a type
/// mismatch rather than a negative value.
pub fn validate_field(field: Field, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::type_mismatch(field, NON_FINITE));
    }
    if value < 0.0 {
        return Err(Error::negative_value(field, value));
    }
    Ok(value)
}

/// Validate all four inputs in order: width, height, length, mass.
///
/// Stops at the first failure.
pub fn validate(package: &PackageMeasurement) -> Result<()> {
    for (field, value) in package.fields() {
        validate_field(field, value)?;
    }
    Ok(())
}
