use crate::config::Config;
use crate::engine::{
    compute_bmi_with, display_result, BmiResult, HeightInput, ResultView, ValidationPolicy,
    WeightInput,
};
use crate::units::{HeightUnit, WeightUnit};

/// Everything the BMI screen shows, as one immutable value.
///
/// Each edit or calculation produces a new `FormState` via [`FormState::apply`];
/// nothing is mutated in place. The result slot holds at most one outcome, so a
/// BMI and an error can never be shown together.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub height_meters: String,
    pub height_feet: String,
    pub height_inches: String,
    pub height_unit: HeightUnit,
    pub weight: String,
    pub weight_unit: WeightUnit,
    pub policy: ValidationPolicy,
    pub result: Option<BmiResult>,
}

/// A user interaction on the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    SetHeightMeters(String),
    SetHeightFeet(String),
    SetHeightInches(String),
    SetHeightUnit(HeightUnit),
    SetWeight(String),
    SetWeightUnit(WeightUnit),
    /// The "Calculate BMI" button
    Calculate,
}

impl FormState {
    /// Empty form with the configured default units and policy
    pub fn new(config: &Config) -> Self {
        Self {
            height_unit: config.defaults.height_unit,
            weight_unit: config.defaults.weight_unit,
            policy: config.validation.policy,
            ..Self::default()
        }
    }

    /// Produce the next state for an action.
    /// Field edits leave the last result on screen; only `Calculate` replaces it.
    pub fn apply(self, action: FormAction) -> Self {
        match action {
            FormAction::SetHeightMeters(text) => Self {
                height_meters: text,
                ..self
            },
            FormAction::SetHeightFeet(text) => Self {
                height_feet: text,
                ..self
            },
            FormAction::SetHeightInches(text) => Self {
                height_inches: text,
                ..self
            },
            FormAction::SetHeightUnit(unit) => Self {
                height_unit: unit,
                ..self
            },
            FormAction::SetWeight(text) => Self {
                weight: text,
                ..self
            },
            FormAction::SetWeightUnit(unit) => Self {
                weight_unit: unit,
                ..self
            },
            FormAction::Calculate => {
                let result = self.calculate();
                Self {
                    result: Some(result),
                    ..self
                }
            }
        }
    }

    /// Apply a sequence of actions in order
    pub fn apply_all<I>(self, actions: I) -> Self
    where
        I: IntoIterator<Item = FormAction>,
    {
        actions
            .into_iter()
            .fold(self, |state, action| state.apply(action))
    }

    /// Height entry for the active unit; the other unit's text is kept but not read
    pub fn height_input(&self) -> HeightInput {
        match self.height_unit {
            HeightUnit::Meters => HeightInput::metric(self.height_meters.as_str()),
            HeightUnit::FeetInches => {
                HeightInput::imperial(self.height_feet.as_str(), self.height_inches.as_str())
            }
        }
    }

    pub fn weight_input(&self) -> WeightInput {
        WeightInput::new(self.weight.as_str(), self.weight_unit)
    }

    /// Run the engine on the current fields without changing the state
    pub fn calculate(&self) -> BmiResult {
        compute_bmi_with(&self.height_input(), &self.weight_input(), self.policy)
    }

    /// Result line to show under the button, if a calculation has run
    pub fn display(&self) -> Option<String> {
        self.result.as_ref().map(display_result)
    }

    pub fn result_view(&self) -> Option<ResultView> {
        self.result.as_ref().map(ResultView::from)
    }
}
