// =============================================================================
// Copper Falls Planner - Error Types
// =============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures surfaced while wiring the page.
///
/// None of these reach the visitor: the bootstrap logs them and carries on
/// with the remaining features.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    #[error("JavaScript error: {0}")]
    Js(String),

    #[error("Chart library unavailable: {0}")]
    ChartUnavailable(String),

    #[error("Element #{0} is not an HTML element")]
    NotHtmlElement(String),

    #[error("Unknown {kind} value: {value:?}")]
    UnknownValue { kind: &'static str, value: String },
}

impl PlannerError {
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownValue {
            kind,
            value: value.into(),
        }
    }
}

impl From<JsValue> for PlannerError {
    fn from(value: JsValue) -> Self {
        Self::Js(describe_js(&value))
    }
}

/// Best-effort string form of a thrown JavaScript value.
pub fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub type Result<T, E = PlannerError> = std::result::Result<T, E>;
