// =============================================================================
// Copper Falls Planner - WASM Entry Point
// =============================================================================
// This is the main entry point for the WASM binary.
// Trunk compiles this and injects it into index.html after the page markup,
// so the feature containers already exist when it runs.
// =============================================================================

use copper_falls_planner::{enhance_page, PlannerConfig};

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    let config = PlannerConfig::from_build_env();

    // Initialize logger (ignore if already initialized by an external mount)
    let _ = console_log::init_with_level(config.log_level);

    log::info!("Starting Copper Falls trip planner...");

    if let Err(e) = enhance_page(&config) {
        log::error!("Trip planner failed to start: {}", e);
    }
}
