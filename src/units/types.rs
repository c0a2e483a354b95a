use crate::units::error::UnitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Meters in one inch
pub const METERS_PER_INCH: f64 = 0.0254;

/// Inches in one foot
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Kilograms in one pound
pub const KG_PER_POUND: f64 = 0.453592;

/// Height unit selector ("m" or "ft")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum HeightUnit {
    /// Single meters field
    #[default]
    #[serde(rename = "m")]
    Meters,
    /// Feet field plus inches field
    #[serde(rename = "ft")]
    FeetInches,
}

/// Weight unit selector ("kg" or "lbs")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum WeightUnit {
    #[default]
    #[serde(rename = "kg")]
    Kilograms,
    #[serde(rename = "lbs")]
    Pounds,
}

impl HeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeightUnit::Meters => "m",
            HeightUnit::FeetInches => "ft",
        }
    }
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Kilograms => "kg",
            WeightUnit::Pounds => "lbs",
        }
    }

    /// Factor that takes a value in this unit to kilograms
    pub fn to_kg_factor(&self) -> f64 {
        match self {
            WeightUnit::Kilograms => 1.0,
            WeightUnit::Pounds => KG_PER_POUND,
        }
    }
}

impl FromStr for HeightUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m" => Ok(HeightUnit::Meters),
            "ft" => Ok(HeightUnit::FeetInches),
            other => Err(UnitError::UnknownHeightUnit(other.to_string())),
        }
    }
}

impl FromStr for WeightUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kg" => Ok(WeightUnit::Kilograms),
            "lbs" => Ok(WeightUnit::Pounds),
            other => Err(UnitError::UnknownWeightUnit(other.to_string())),
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_strings() {
        assert_eq!("m".parse::<HeightUnit>().unwrap(), HeightUnit::Meters);
        assert_eq!("ft".parse::<HeightUnit>().unwrap(), HeightUnit::FeetInches);
        assert_eq!("kg".parse::<WeightUnit>().unwrap(), WeightUnit::Kilograms);
        assert_eq!("lbs".parse::<WeightUnit>().unwrap(), WeightUnit::Pounds);

        assert_eq!(HeightUnit::FeetInches.to_string(), "ft");
        assert_eq!(WeightUnit::Pounds.to_string(), "lbs");
    }

    #[test]
    fn test_unknown_selectors() {
        // Selectors are matched exactly, the form never produces anything else
        assert_eq!(
            "cm".parse::<HeightUnit>(),
            Err(UnitError::UnknownHeightUnit("cm".to_string()))
        );
        assert!("FT".parse::<HeightUnit>().is_err());
        assert_eq!(
            "lb".parse::<WeightUnit>(),
            Err(UnitError::UnknownWeightUnit("lb".to_string()))
        );
    }

    #[test]
    fn test_defaults_match_initial_form() {
        assert_eq!(HeightUnit::default(), HeightUnit::Meters);
        assert_eq!(WeightUnit::default(), WeightUnit::Kilograms);
    }

    #[test]
    fn test_serde_uses_selector_strings() {
        assert_eq!(serde_json::to_string(&HeightUnit::FeetInches).unwrap(), "\"ft\"");
        let unit: WeightUnit = serde_json::from_str("\"lbs\"").unwrap();
        assert_eq!(unit, WeightUnit::Pounds);
    }
}
