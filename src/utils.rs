// =============================================================================
// Copper Falls Planner - DOM Utilities
// =============================================================================

use web_sys::{Document, Window};

use crate::error::{PlannerError, Result};

/// Get the browser window object.
pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| PlannerError::Js("no window object available".to_string()))
}

/// Get the page document.
pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| PlannerError::Js("no document on window".to_string()))
}
