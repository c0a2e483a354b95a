use crate::engine::error::{BmiError, Field, InvalidReason};
use crate::units::{HeightUnit, WeightUnit};
use serde::{Deserialize, Serialize};

/// Height as typed into the form, not yet parsed
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "unit")]
pub enum HeightInput {
    #[serde(rename = "m")]
    Metric { meters: String },
    #[serde(rename = "ft")]
    Imperial { feet: String, inches: String },
}

/// Weight as typed into the form, not yet parsed
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WeightInput {
    pub value: String,
    pub unit: WeightUnit,
}

impl HeightInput {
    pub fn metric(meters: impl Into<String>) -> Self {
        HeightInput::Metric {
            meters: meters.into(),
        }
    }

    pub fn imperial(feet: impl Into<String>, inches: impl Into<String>) -> Self {
        HeightInput::Imperial {
            feet: feet.into(),
            inches: inches.into(),
        }
    }

    pub fn unit(&self) -> HeightUnit {
        match self {
            HeightInput::Metric { .. } => HeightUnit::Meters,
            HeightInput::Imperial { .. } => HeightUnit::FeetInches,
        }
    }
}

impl WeightInput {
    pub fn new(value: impl Into<String>, unit: WeightUnit) -> Self {
        Self {
            value: value.into(),
            unit,
        }
    }

    pub fn kg(value: impl Into<String>) -> Self {
        Self::new(value, WeightUnit::Kilograms)
    }

    pub fn lbs(value: impl Into<String>) -> Self {
        Self::new(value, WeightUnit::Pounds)
    }
}

/// The raw field values a UI hands over: two height boxes, one weight box and
/// the two unit pickers. The secondary height box is only read for "ft".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawInput {
    pub height_primary: String,
    #[serde(default)]
    pub height_secondary: String,
    pub height_unit: String,
    pub weight: String,
    pub weight_unit: String,
}

impl RawInput {
    /// Resolve the unit pickers into typed inputs.
    ///
    /// An unrecognized picker value leaves nothing to compute with, so it resolves
    /// to the same invalid-input failure as an unparseable field.
    pub fn to_inputs(&self) -> Result<(HeightInput, WeightInput), BmiError> {
        let height = match self.height_unit.parse::<HeightUnit>() {
            Ok(HeightUnit::Meters) => HeightInput::metric(self.height_primary.as_str()),
            Ok(HeightUnit::FeetInches) => HeightInput::imperial(
                self.height_primary.as_str(),
                self.height_secondary.as_str(),
            ),
            Err(e) => {
                log::warn!("{}", e);
                return Err(BmiError::invalid(Field::Height, InvalidReason::UnknownUnit));
            }
        };

        let weight_unit = self.weight_unit.parse::<WeightUnit>().map_err(|e| {
            log::warn!("{}", e);
            BmiError::invalid(Field::Weight, InvalidReason::UnknownUnit)
        })?;

        Ok((height, WeightInput::new(self.weight.as_str(), weight_unit)))
    }
}
