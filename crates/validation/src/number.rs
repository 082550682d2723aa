use crate::error::{Result, ValidationError};
use crate::scalar::Scalar;

/// Returns `n` if it is a finite number.
///
/// Rejects `NaN`, both infinities and non-numeric input with
/// [`ValidationError::InvalidNumber`].
pub fn valid_number<'a>(n: impl Into<Scalar<'a>>) -> Result<f64> {
    match n.into() {
        Scalar::Number(v) if v.is_finite() => Ok(v),
        other => Err(invalid_number(other)),
    }
}

/// Like [`valid_number`], but also lets positive infinity through.
///
/// Negative infinity is still rejected.
pub fn valid_number_or_infinite<'a>(n: impl Into<Scalar<'a>>) -> Result<f64> {
    match n.into() {
        Scalar::Number(v) if v.is_finite() || v == f64::INFINITY => Ok(v),
        other => Err(invalid_number(other)),
    }
}

/// Returns `n` if it is finite and non-zero, i.e. safe to divide by.
pub fn valid_number_non_zero<'a>(n: impl Into<Scalar<'a>>) -> Result<f64> {
    let v = valid_number(n)?;
    // `-0.0 == 0.0`, so both zeroes are caught.
    if v == 0.0 {
        return Err(ValidationError::DivisionByZeroRisk);
    }
    Ok(v)
}

fn invalid_number(value: Scalar<'_>) -> ValidationError {
    ValidationError::InvalidNumber {
        provided: value.to_string(),
    }
}
