// =============================================================================
// Copper Falls Planner - Main Library Entry Point
// =============================================================================
// Table of Contents:
// 1. Module Declarations
// 2. Re-exports
// 3. WASM Entry Point
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Module Declarations
// -----------------------------------------------------------------------------

pub mod app;
pub mod budget;
pub mod chart;
pub mod checklist;
pub mod components;
pub mod config;
pub mod error;
pub mod navigation;
pub mod trails;
pub mod utils;

// -----------------------------------------------------------------------------
// 2. Re-exports
// -----------------------------------------------------------------------------

pub use app::enhance_page;
pub use config::PlannerConfig;
pub use error::PlannerError;

// -----------------------------------------------------------------------------
// 3. WASM Entry Point (for library usage)
// -----------------------------------------------------------------------------

use wasm_bindgen::prelude::*;

/// Enhance the trip planner page (for external callers).
#[wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();
    let config = PlannerConfig::from_build_env();
    let _ = console_log::init_with_level(config.log_level);
    log::info!("Enhancing Copper Falls trip planner...");

    if let Err(e) = enhance_page(&config) {
        log::error!("Trip planner failed to start: {}", e);
    }
}
