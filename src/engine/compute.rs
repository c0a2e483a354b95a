use crate::engine::convert::{convert_height_to_meters, convert_weight_to_kg};
use crate::engine::error::{BmiError, Field};
use crate::engine::formatter::to_fixed;
use crate::engine::input::{HeightInput, RawInput, WeightInput};
use crate::engine::validator::{validate_bmi, validate_measurement, ValidationPolicy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fraction digits shown for a BMI
pub const BMI_DECIMALS: usize = 2;

/// Outcome of one calculation: exactly one of a BMI or the invalid-input error
pub type BmiResult = Result<Bmi, BmiError>;

/// A computed Body Mass Index (kg / m²)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Bmi {
    raw: f64,
}

impl Bmi {
    pub fn from_raw(raw: f64) -> Self {
        Self { raw }
    }

    /// Unrounded quotient
    pub fn raw(&self) -> f64 {
        self.raw
    }

    /// Two-decimal string, e.g. "24.69"
    pub fn formatted(&self) -> String {
        to_fixed(self.raw, BMI_DECIMALS)
    }

    /// Value rounded to two decimals, as displayed
    pub fn value(&self) -> f64 {
        self.formatted().parse().unwrap_or(self.raw)
    }
}

impl fmt::Display for Bmi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Compute a BMI with the default (strict) validation policy
pub fn compute_bmi(height: &HeightInput, weight: &WeightInput) -> BmiResult {
    compute_bmi_with(height, weight, ValidationPolicy::default())
}

/// Compute a BMI: convert both measurements, check them, then weight / height².
/// Height is checked first, so it is the field reported when both are bad.
pub fn compute_bmi_with(
    height: &HeightInput,
    weight: &WeightInput,
    policy: ValidationPolicy,
) -> BmiResult {
    let height_m = convert_height_to_meters(height);
    let weight_kg = convert_weight_to_kg(weight);

    let result = validate_measurement(Field::Height, height_m, policy)
        .and_then(|h| validate_measurement(Field::Weight, weight_kg, policy).map(|w| (h, w)))
        .and_then(|(h, w)| validate_bmi(h, w, policy))
        .map(Bmi::from_raw);

    match &result {
        Ok(bmi) => log::debug!("BMI {} ({} policy)", bmi, policy),
        Err(e) => log::debug!(
            "Rejected {} ({}) under {} policy",
            e.field(),
            e.reason(),
            policy
        ),
    }

    result
}

/// Compute straight from the raw field values and unit picker strings
pub fn compute_from_raw(raw: &RawInput, policy: ValidationPolicy) -> BmiResult {
    let (height, weight) = raw.to_inputs()?;
    compute_bmi_with(&height, &weight, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::error::InvalidReason;

    #[test]
    fn test_bmi_accessors() {
        let bmi = Bmi::from_raw(80.0 / (1.8 * 1.8));
        assert_eq!(bmi.formatted(), "24.69");
        assert_eq!(bmi.value(), 24.69);
        assert!((bmi.raw() - 24.691358).abs() < 1e-6);
        assert_eq!(bmi.to_string(), "24.69");
    }

    #[test]
    fn test_height_reported_before_weight() {
        let err = compute_bmi(&HeightInput::metric(""), &WeightInput::kg("")).unwrap_err();
        assert_eq!(err.field(), Field::Height);
        assert_eq!(err.reason(), InvalidReason::Unparseable);
    }

    #[test]
    fn test_strict_rejects_underflowing_height() {
        // 1e-200 squared underflows to zero, which would print "Infinity"
        let height = HeightInput::metric("1e-200");
        let weight = WeightInput::kg("70");

        let err = compute_bmi(&height, &weight).unwrap_err();
        assert_eq!(err.reason(), InvalidReason::OutOfRange);

        let legacy = compute_bmi_with(&height, &weight, ValidationPolicy::Legacy).unwrap();
        assert_eq!(legacy.formatted(), "Infinity");
    }

    #[test]
    fn test_compute_from_raw() {
        let raw = RawInput {
            height_primary: "5".to_string(),
            height_secondary: "10".to_string(),
            height_unit: "ft".to_string(),
            weight: "154".to_string(),
            weight_unit: "lbs".to_string(),
        };
        let bmi = compute_from_raw(&raw, ValidationPolicy::Strict).unwrap();
        assert_eq!(bmi.formatted(), "22.10");

        let raw = RawInput {
            weight_unit: "st".to_string(),
            ..raw
        };
        let err = compute_from_raw(&raw, ValidationPolicy::Strict).unwrap_err();
        assert_eq!(err.reason(), InvalidReason::UnknownUnit);
    }
}
