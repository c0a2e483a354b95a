use crate::engine::compute::BmiResult;
use crate::engine::error::{Field, InvalidReason};
use serde::{Deserialize, Serialize};

/// Prefix of the success line shown under the form
pub const RESULT_PREFIX: &str = "Your BMI is: ";

/// Format a number with a fixed count of fraction digits, the way the form's
/// runtime does for its result line.
///
/// Differs from `format!("{:.2}")` only on exact ties (e.g. 1.125), which round
/// half away from zero instead of to even, and on non-finite or huge values.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value.abs() >= 1e21 {
        return exponent_form(value);
    }

    let magnitude = value.abs();
    let body = if is_exact_tie(magnitude, digits) {
        let scale = 10f64.powi(digits as i32);
        let rounded_up = (magnitude * scale).floor() + 1.0;
        format!("{:.*}", digits, rounded_up / scale)
    } else {
        format!("{:.*}", digits, magnitude)
    };

    // Negative values that round to zero keep their sign ("-0.00"), negative zero does not
    if value < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

/// A value sits exactly halfway between two `digits`-place decimals only when it is
/// an odd multiple of 2^-(digits+1). Multiplying by a power of two is exact, so this
/// check never misfires on values that merely print like a tie.
fn is_exact_tie(magnitude: f64, digits: usize) -> bool {
    let scaled = magnitude * 2f64.powi(digits as i32 + 1);
    scaled.is_finite() && scaled.fract() == 0.0 && scaled % 2.0 == 1.0
}

fn exponent_form(value: f64) -> String {
    // Rust prints "1e21", the form's runtime prints "1e+21"
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => formatted,
    }
}

/// Render a result as the single line the form shows
pub fn display_result(result: &BmiResult) -> String {
    match result {
        Ok(bmi) => format!("{}{}", RESULT_PREFIX, bmi),
        Err(e) => e.to_string(),
    }
}

/// Serializable view of a result for JSON consumers
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ResultView {
    Success {
        value: f64,
        formatted: String,
        display: String,
    },
    Failure {
        message: String,
        field: Field,
        reason: InvalidReason,
    },
}

impl From<&BmiResult> for ResultView {
    fn from(result: &BmiResult) -> Self {
        match result {
            Ok(bmi) => ResultView::Success {
                value: bmi.value(),
                formatted: bmi.formatted(),
                display: display_result(result),
            },
            Err(e) => ResultView::Failure {
                message: e.message().to_string(),
                field: e.field(),
                reason: e.reason(),
            },
        }
    }
}
