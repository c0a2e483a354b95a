// Unit selectors and lenient numeric parsing for form text fields

pub mod error;
pub mod numeric;
pub mod types;

pub use error::UnitError;
pub use numeric::{numeric_prefix, parse_number};
pub use types::{HeightUnit, WeightUnit, INCHES_PER_FOOT, KG_PER_POUND, METERS_PER_INCH};
