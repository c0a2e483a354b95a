use crate::engine::input::{HeightInput, WeightInput};
use crate::units::{parse_number, INCHES_PER_FOOT, METERS_PER_INCH};

/// Convert a feet + inches pair to meters.
/// Returns `None` if either part is not a number; no partial result is produced.
pub fn convert_feet_inches_to_meters(feet: &str, inches: &str) -> Option<f64> {
    let feet = parse_number(feet);
    let inches = parse_number(inches);

    let (feet, inches) = match (feet, inches) {
        (Some(feet), Some(inches)) => (feet, inches),
        _ => {
            log::debug!(
                "Imperial height incomplete (feet: {:?}, inches: {:?})",
                feet,
                inches
            );
            return None;
        }
    };

    let total_inches = feet * INCHES_PER_FOOT + inches;
    Some(total_inches * METERS_PER_INCH)
}

/// Convert a height entry to meters
pub fn convert_height_to_meters(input: &HeightInput) -> Option<f64> {
    let meters = match input {
        HeightInput::Metric { meters } => parse_number(meters),
        HeightInput::Imperial { feet, inches } => convert_feet_inches_to_meters(feet, inches),
    };

    log::debug!("Height {:?} -> {:?} m", input, meters);
    meters
}

/// Convert a weight entry to kilograms
pub fn convert_weight_to_kg(input: &WeightInput) -> Option<f64> {
    let kg = parse_number(&input.value).map(|value| value * input.unit.to_kg_factor());

    log::debug!("Weight {:?} -> {:?} kg", input, kg);
    kg
}
