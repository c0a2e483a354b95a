use crate::engine::error::{BmiError, Field, InvalidReason};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How strictly converted measurements are checked before computing a BMI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Reject anything that is not a finite, positive number, and any BMI that
    /// under/overflows to zero or infinity
    #[default]
    Strict,
    /// Reject only missing, NaN and zero values; negative and infinite values
    /// go through to the formula as they did on the original form
    Legacy,
}

impl FromStr for ValidationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(ValidationPolicy::Strict),
            "legacy" => Ok(ValidationPolicy::Legacy),
            other => Err(format!(
                "Unknown validation policy: '{}' (expected 'strict' or 'legacy')",
                other
            )),
        }
    }
}

impl fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationPolicy::Strict => write!(f, "strict"),
            ValidationPolicy::Legacy => write!(f, "legacy"),
        }
    }
}

/// Check a converted measurement, returning the usable value
pub fn validate_measurement(
    field: Field,
    value: Option<f64>,
    policy: ValidationPolicy,
) -> Result<f64, BmiError> {
    let value = value.ok_or(BmiError::invalid(field, InvalidReason::Unparseable))?;

    // Parseable parts can still combine to NaN (e.g. Infinity ft, -Infinity in)
    if value.is_nan() {
        return Err(BmiError::invalid(field, InvalidReason::NonFinite));
    }

    // -0.0 == 0.0, so negative zero is caught here too
    if value == 0.0 {
        return Err(BmiError::invalid(field, InvalidReason::Zero));
    }

    if policy == ValidationPolicy::Strict {
        if !value.is_finite() {
            return Err(BmiError::invalid(field, InvalidReason::NonFinite));
        }
        if value < 0.0 {
            return Err(BmiError::invalid(field, InvalidReason::Negative));
        }
    }

    Ok(value)
}

/// Compute weight / height² from checked measurements and check the quotient.
/// Only the strict policy rejects a quotient that under/overflowed.
pub fn validate_bmi(
    height_m: f64,
    weight_kg: f64,
    policy: ValidationPolicy,
) -> Result<f64, BmiError> {
    let height_sq = height_m * height_m;
    let bmi = weight_kg / height_sq;

    if policy == ValidationPolicy::Strict && (!bmi.is_finite() || bmi == 0.0) {
        // A squared height of 0 or infinity is the height's fault, anything else the weight's
        let field = if height_sq == 0.0 || height_sq.is_infinite() {
            Field::Height
        } else {
            Field::Weight
        };
        return Err(BmiError::invalid(field, InvalidReason::OutOfRange));
    }

    Ok(bmi)
}
