// =============================================================================
// Copper Falls Planner - Chart.js Bridge
// =============================================================================
// Table of Contents:
// 1. FFI Bindings
// 2. Chart Configuration
// 3. Budget Chart
// =============================================================================
//
// Chart.js is loaded by index.html as a global. This module only builds the
// configuration and pushes data; layout, drawing and animation stay in JS.

use js_sys::{Array, Reflect, JSON};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::budget::{tooltip_label, CostCategory, Estimate};
use crate::error::{describe_js, PlannerError, Result};

// -----------------------------------------------------------------------------
// 1. FFI Bindings
// -----------------------------------------------------------------------------

#[wasm_bindgen]
extern "C" {
    /// Global `Chart` class.
    type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> std::result::Result<Chart, JsValue>;

    #[wasm_bindgen(method)]
    fn update(this: &Chart);

    #[wasm_bindgen(method, getter)]
    fn data(this: &Chart) -> JsValue;
}

// -----------------------------------------------------------------------------
// 2. Chart Configuration
// -----------------------------------------------------------------------------

pub const DATASET_LABEL: &str = "Estimated Cost ($)";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChartData {
    pub labels: Vec<&'static str>,
    pub datasets: Vec<Dataset>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: &'static str,
    pub data: Vec<f64>,
    pub background_color: Vec<&'static str>,
    pub border_color: &'static str,
    pub border_width: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub index_axis: &'static str,
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: serde_json::Value,
    pub scales: serde_json::Value,
}

/// Horizontal bar chart, one bar per cost category, all zero until the
/// first estimate lands.
pub fn chart_config() -> ChartConfig {
    ChartConfig {
        kind: "bar",
        data: ChartData {
            labels: CostCategory::ALL.iter().map(CostCategory::label).collect(),
            datasets: vec![Dataset {
                label: DATASET_LABEL,
                data: vec![0.0; CostCategory::ALL.len()],
                background_color: CostCategory::ALL.iter().map(CostCategory::color).collect(),
                border_color: "#FDFBF8",
                border_width: 2,
            }],
        },
        options: ChartOptions {
            index_axis: "y",
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: serde_json::json!({
                "legend": { "display": false },
                "tooltip": { "callbacks": {} }
            }),
            scales: serde_json::json!({
                "x": { "beginAtZero": true, "title": { "display": true, "text": "Cost (USD)" } },
                "y": { "grid": { "display": false } }
            }),
        },
    }
}

// -----------------------------------------------------------------------------
// 3. Budget Chart
// -----------------------------------------------------------------------------

/// Live Chart.js instance drawing the budget estimate.
pub struct BudgetChart {
    chart: Chart,
}

impl BudgetChart {
    /// Construct the chart on `canvas`.
    pub fn attach(canvas: &HtmlCanvasElement) -> Result<Self> {
        let json = serde_json::to_string(&chart_config())
            .map_err(|e| PlannerError::ChartUnavailable(e.to_string()))?;
        let config = JSON::parse(&json)?;

        let callbacks = get_path(&config, &["options", "plugins", "tooltip", "callbacks"])?;
        let label = Closure::<dyn Fn(JsValue) -> JsValue>::new(tooltip_callback);
        Reflect::set(&callbacks, &JsValue::from_str("label"), &label.into_js_value())?;

        let chart = Chart::new(canvas, &config)
            .map_err(|e| PlannerError::ChartUnavailable(describe_js(&e)))?;
        log::debug!("Budget chart attached");
        Ok(Self { chart })
    }

    /// Push an estimate into the first dataset and redraw.
    pub fn render(&self, estimate: &Estimate) -> Result<()> {
        let dataset = get_path(&self.chart.data(), &["datasets", "0"])?;

        Reflect::set(&dataset, &JsValue::from_str("data"), &to_array(&estimate.midpoints()))?;
        Reflect::set(&dataset, &JsValue::from_str("low"), &to_array(&estimate.lows()))?;
        Reflect::set(&dataset, &JsValue::from_str("high"), &to_array(&estimate.highs()))?;

        self.chart.update();
        Ok(())
    }
}

/// Tooltip `label` callback. Reads the `low`/`high` side arrays stored next to
/// the plotted data.
fn tooltip_callback(context: JsValue) -> JsValue {
    let dataset = Reflect::get(&context, &JsValue::from_str("dataset")).unwrap_or(JsValue::UNDEFINED);
    let index = Reflect::get(&context, &JsValue::from_str("dataIndex"))
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as u32;

    let label = Reflect::get(&dataset, &JsValue::from_str("label"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();
    let bound = |key: &str| {
        Reflect::get(&dataset, &JsValue::from_str(key))
            .and_then(|arr| Reflect::get_u32(&arr, index))
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    };

    JsValue::from_str(&tooltip_label(&label, bound("low"), bound("high")))
}

fn get_path(root: &JsValue, path: &[&str]) -> Result<JsValue> {
    let mut current = root.clone();
    for key in path {
        current = Reflect::get(&current, &JsValue::from_str(key))?;
        if current.is_undefined() {
            return Err(PlannerError::Js(format!("missing chart field `{key}`")));
        }
    }
    Ok(current)
}

fn to_array(values: &[f64]) -> Array {
    values.iter().copied().map(JsValue::from_f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_shape() {
        let value = serde_json::to_value(chart_config()).unwrap();

        assert_eq!(value["type"], "bar");
        assert_eq!(value["options"]["indexAxis"], "y");
        assert_eq!(value["options"]["maintainAspectRatio"], false);
        assert_eq!(value["options"]["plugins"]["legend"]["display"], false);
        assert_eq!(value["options"]["scales"]["x"]["title"]["text"], "Cost (USD)");
        assert!(value["options"]["plugins"]["tooltip"]["callbacks"].is_object());
    }

    #[test]
    fn test_dataset_defaults() {
        let value = serde_json::to_value(chart_config()).unwrap();
        let dataset = &value["data"]["datasets"][0];

        assert_eq!(value["data"]["labels"], serde_json::json!(["Campsite Fees", "Food", "Fuel", "Misc."]));
        assert_eq!(dataset["label"], DATASET_LABEL);
        assert_eq!(dataset["data"], serde_json::json!([0.0, 0.0, 0.0, 0.0]));
        assert_eq!(
            dataset["backgroundColor"],
            serde_json::json!(["#6B8A7A", "#A47E3B", "#4F4A45", "#EFEBE4"])
        );
        assert_eq!(dataset["borderWidth"], 2);
    }
}
