use serde::{Deserialize, Serialize};
use std::fmt;

/// The only message the form ever shows for a rejected calculation
pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid values for height and weight";

/// Which measurement caused a rejection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Height,
    Weight,
}

/// Why a measurement was rejected.
///
/// Kept for diagnostics and logging only; every reason surfaces to the user as
/// the same [`INVALID_INPUT_MESSAGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    /// Text had no numeric prefix (empty, "abc", ...)
    Unparseable,
    /// Parsed to exactly zero
    Zero,
    /// Parsed to a negative value
    Negative,
    /// Parsed to an infinite value
    NonFinite,
    /// Inputs were individually fine but the BMI itself under/overflowed
    OutOfRange,
    /// Unit selector was not one of the offered choices
    UnknownUnit,
}

/// Error returned by the BMI engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BmiError {
    #[error("Please enter valid values for height and weight")]
    InvalidInput { field: Field, reason: InvalidReason },
}

impl BmiError {
    pub fn invalid(field: Field, reason: InvalidReason) -> Self {
        BmiError::InvalidInput { field, reason }
    }

    pub fn field(&self) -> Field {
        match self {
            BmiError::InvalidInput { field, .. } => *field,
        }
    }

    pub fn reason(&self) -> InvalidReason {
        match self {
            BmiError::InvalidInput { reason, .. } => *reason,
        }
    }

    /// User-facing message, identical for every rejection
    pub fn message(&self) -> &'static str {
        INVALID_INPUT_MESSAGE
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Height => write!(f, "height"),
            Field::Weight => write!(f, "weight"),
        }
    }
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::Unparseable => write!(f, "not a number"),
            InvalidReason::Zero => write!(f, "zero"),
            InvalidReason::Negative => write!(f, "negative"),
            InvalidReason::NonFinite => write!(f, "not finite"),
            InvalidReason::OutOfRange => write!(f, "result out of range"),
            InvalidReason::UnknownUnit => write!(f, "unknown unit"),
        }
    }
}
