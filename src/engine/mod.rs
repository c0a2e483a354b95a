// BMI engine: raw form text in, one BMI or one invalid-input error out.
// Stateless; every call stands alone.

pub mod compute;
pub mod convert;
pub mod error;
pub mod formatter;
pub mod input;
pub mod validator;

#[cfg(test)]
mod tests;

pub use compute::{compute_bmi, compute_bmi_with, compute_from_raw, Bmi, BmiResult, BMI_DECIMALS};
pub use convert::{convert_feet_inches_to_meters, convert_height_to_meters, convert_weight_to_kg};
pub use error::{BmiError, Field, InvalidReason, INVALID_INPUT_MESSAGE};
pub use formatter::{display_result, to_fixed, ResultView, RESULT_PREFIX};
pub use input::{HeightInput, RawInput, WeightInput};
pub use validator::{validate_bmi, validate_measurement, ValidationPolicy};
