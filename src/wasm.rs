// WebAssembly bindings for the BMI form
use crate::config;
use crate::engine;
use crate::form::{FormAction, FormState};
use crate::units::{HeightUnit, WeightUnit};
use wasm_bindgen::prelude::*;

fn raw_input(
    height_unit: &str,
    height_primary: &str,
    height_secondary: &str,
    weight: &str,
    weight_unit: &str,
) -> engine::RawInput {
    engine::RawInput {
        height_primary: height_primary.to_string(),
        height_secondary: height_secondary.to_string(),
        height_unit: height_unit.to_string(),
        weight: weight.to_string(),
        weight_unit: weight_unit.to_string(),
    }
}

fn load_config(config_content: Option<String>) -> Result<config::Config, JsValue> {
    match config_content {
        Some(content) => config::Config::load_from_str(&content)
            .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e))),
        None => Ok(config::Config::empty()),
    }
}

/// Stateless calculator: every call takes the raw field values
#[wasm_bindgen]
pub struct BmiWasm {
    config: config::Config,
}

impl Default for BmiWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl BmiWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            config: config::Config::empty(),
        }
    }

    /// Create a calculator from TOML config contents
    #[wasm_bindgen]
    pub fn with_config(config_content: Option<String>) -> Result<BmiWasm, JsValue> {
        Ok(Self {
            config: load_config(config_content)?,
        })
    }

    /// Returns the line to display: "Your BMI is: 24.69" or the error message
    #[wasm_bindgen]
    pub fn compute(
        &self,
        height_unit: &str,
        height_primary: &str,
        height_secondary: &str,
        weight: &str,
        weight_unit: &str,
    ) -> String {
        let raw = raw_input(height_unit, height_primary, height_secondary, weight, weight_unit);
        let result = engine::compute_from_raw(&raw, self.config.validation.policy);
        engine::display_result(&result)
    }

    /// Same as `compute`, returned as a JSON string of the result view
    #[wasm_bindgen]
    pub fn compute_json(
        &self,
        height_unit: &str,
        height_primary: &str,
        height_secondary: &str,
        weight: &str,
        weight_unit: &str,
    ) -> Result<String, JsValue> {
        let raw = raw_input(height_unit, height_primary, height_secondary, weight, weight_unit);
        let result = engine::compute_from_raw(&raw, self.config.validation.policy);

        serde_json::to_string(&engine::ResultView::from(&result))
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
    }

    /// Same as `compute`, returned as a plain JS object:
    /// `{ ok: true, value, text }` or `{ ok: false, message, field, reason }`
    #[wasm_bindgen]
    pub fn compute_object(
        &self,
        height_unit: &str,
        height_primary: &str,
        height_secondary: &str,
        weight: &str,
        weight_unit: &str,
    ) -> Result<js_sys::Object, JsValue> {
        let raw = raw_input(height_unit, height_primary, height_secondary, weight, weight_unit);
        let result = engine::compute_from_raw(&raw, self.config.validation.policy);

        let obj = js_sys::Object::new();
        match &result {
            Ok(bmi) => {
                js_sys::Reflect::set(&obj, &"ok".into(), &JsValue::TRUE)?;
                js_sys::Reflect::set(&obj, &"value".into(), &JsValue::from_f64(bmi.value()))?;
                js_sys::Reflect::set(&obj, &"text".into(), &bmi.formatted().into())?;
            }
            Err(e) => {
                js_sys::Reflect::set(&obj, &"ok".into(), &JsValue::FALSE)?;
                js_sys::Reflect::set(&obj, &"message".into(), &e.message().into())?;
                js_sys::Reflect::set(&obj, &"field".into(), &e.field().to_string().into())?;
                js_sys::Reflect::set(&obj, &"reason".into(), &e.reason().to_string().into())?;
            }
        }

        Ok(obj)
    }

    /// Height in meters, or undefined when the text does not parse
    #[wasm_bindgen]
    pub fn convert_height_to_meters(
        &self,
        height_unit: &str,
        height_primary: &str,
        height_secondary: &str,
    ) -> Result<Option<f64>, JsValue> {
        let input = match height_unit.parse::<HeightUnit>() {
            Ok(HeightUnit::Meters) => engine::HeightInput::metric(height_primary),
            Ok(HeightUnit::FeetInches) => {
                engine::HeightInput::imperial(height_primary, height_secondary)
            }
            Err(e) => return Err(JsValue::from_str(&e.to_string())),
        };

        Ok(engine::convert_height_to_meters(&input))
    }

    /// Weight in kilograms, or undefined when the text does not parse
    #[wasm_bindgen]
    pub fn convert_weight_to_kg(&self, weight: &str, weight_unit: &str) -> Result<Option<f64>, JsValue> {
        let unit = weight_unit
            .parse::<WeightUnit>()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(engine::convert_weight_to_kg(&engine::WeightInput::new(weight, unit)))
    }
}

/// Form-backed binding: holds the current `FormState` and swaps it on every call
#[wasm_bindgen]
pub struct FormWasm {
    state: FormState,
}

impl FormWasm {
    fn dispatch(&mut self, action: FormAction) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(action);
    }
}

#[wasm_bindgen]
impl FormWasm {
    #[wasm_bindgen(constructor)]
    pub fn new(config_content: Option<String>) -> Result<FormWasm, JsValue> {
        let config = load_config(config_content)?;
        Ok(Self {
            state: FormState::new(&config),
        })
    }

    #[wasm_bindgen]
    pub fn set_height_meters(&mut self, text: String) {
        self.dispatch(FormAction::SetHeightMeters(text));
    }

    #[wasm_bindgen]
    pub fn set_height_feet(&mut self, text: String) {
        self.dispatch(FormAction::SetHeightFeet(text));
    }

    #[wasm_bindgen]
    pub fn set_height_inches(&mut self, text: String) {
        self.dispatch(FormAction::SetHeightInches(text));
    }

    #[wasm_bindgen]
    pub fn set_height_unit(&mut self, unit: &str) -> Result<(), JsValue> {
        let unit = unit
            .parse::<HeightUnit>()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.dispatch(FormAction::SetHeightUnit(unit));
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_weight(&mut self, text: String) {
        self.dispatch(FormAction::SetWeight(text));
    }

    #[wasm_bindgen]
    pub fn set_weight_unit(&mut self, unit: &str) -> Result<(), JsValue> {
        let unit = unit
            .parse::<WeightUnit>()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.dispatch(FormAction::SetWeightUnit(unit));
        Ok(())
    }

    #[wasm_bindgen]
    pub fn height_unit(&self) -> String {
        self.state.height_unit.to_string()
    }

    #[wasm_bindgen]
    pub fn weight_unit(&self) -> String {
        self.state.weight_unit.to_string()
    }

    /// Press "Calculate BMI"; returns the new result line
    #[wasm_bindgen]
    pub fn calculate(&mut self) -> Option<String> {
        self.dispatch(FormAction::Calculate);
        self.state.display()
    }

    /// Current result line, undefined before the first calculation
    #[wasm_bindgen]
    pub fn display(&self) -> Option<String> {
        self.state.display()
    }

    /// Current result as JSON, or undefined before the first calculation
    #[wasm_bindgen]
    pub fn result_json(&self) -> Result<Option<String>, JsValue> {
        self.state
            .result_view()
            .map(|view| {
                serde_json::to_string(&view)
                    .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
            })
            .transpose()
    }
}
