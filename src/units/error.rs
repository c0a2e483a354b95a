/// Errors raised when a unit selector string is not one the form offers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnitError {
    #[error("Unknown height unit: '{0}' (expected 'm' or 'ft')")]
    UnknownHeightUnit(String),

    #[error("Unknown weight unit: '{0}' (expected 'kg' or 'lbs')")]
    UnknownWeightUnit(String),
}
