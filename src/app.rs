// =============================================================================
// Copper Falls Planner - Page Bootstrap
// =============================================================================
// Table of Contents:
// 1. Page Enhancement
// 2. Feature Mounting
// =============================================================================
//
// Each feature activates only when its container is on the page. Features
// share no state and a failure in one never stops the others.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::components::{BudgetEstimator, PackingChecklist, TrailDirectory};
use crate::config::PlannerConfig;
use crate::error::{PlannerError, Result};
use crate::navigation;
use crate::utils;

// -----------------------------------------------------------------------------
// 1. Page Enhancement
// -----------------------------------------------------------------------------

/// Wire every feature whose container exists. Call once, after the document
/// has loaded.
pub fn enhance_page(config: &PlannerConfig) -> Result<()> {
    let document = utils::document()?;

    let features = [
        ("budget estimator", mount_feature(&document, config.budget_container, BudgetEstimator)),
        ("trail directory", mount_feature(&document, config.trail_container, TrailDirectory)),
        ("packing checklist", mount_feature(&document, config.checklist_container, PackingChecklist)),
    ];

    for (name, outcome) in features {
        match outcome {
            Ok(true) => log::debug!("Mounted {}", name),
            Ok(false) => log::debug!("No container for {}, skipping", name),
            Err(e) => log::error!("Failed to mount {}: {}", name, e),
        }
    }

    if let Err(e) = navigation::install_smooth_scroll(&document, config) {
        log::error!("Failed to wire smooth scrolling: {}", e);
    }

    Ok(())
}

// -----------------------------------------------------------------------------
// 2. Feature Mounting
// -----------------------------------------------------------------------------

/// Mount `view` into `#id`, replacing anything already inside it, so mounting
/// twice never duplicates content. Returns `false` if the element is absent.
fn mount_feature<F, N>(document: &Document, id: &str, view: F) -> Result<bool>
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let Some(element) = document.get_element_by_id(id) else {
        return Ok(false);
    };
    let container = element
        .dyn_into::<HtmlElement>()
        .map_err(|_| PlannerError::NotHtmlElement(id.to_string()))?;

    container.set_inner_html("");
    leptos::mount::mount_to(container, view).forget();
    Ok(true)
}
