// =============================================================================
// Copper Falls Planner - Page Configuration
// =============================================================================
// Table of Contents:
// 1. Element Ids
// 2. Planner Config
// =============================================================================

use log::Level;

// -----------------------------------------------------------------------------
// 1. Element Ids
// -----------------------------------------------------------------------------

pub const BUDGET_CONTAINER_ID: &str = "budget-estimator";
pub const TRAIL_CONTAINER_ID: &str = "trail-directory";
pub const CHECKLIST_CONTAINER_ID: &str = "checklist-container";

/// In-page links inside the site navigation.
pub const NAV_LINK_SELECTOR: &str = "nav a[href^=\"#\"]";

/// Height of the sticky header, in CSS pixels.
pub const HEADER_OFFSET: f64 = 80.0;

// -----------------------------------------------------------------------------
// 2. Planner Config
// -----------------------------------------------------------------------------

/// Where each feature lives on the page and how the bootstrap behaves.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannerConfig {
    pub budget_container: &'static str,
    pub trail_container: &'static str,
    pub checklist_container: &'static str,
    pub nav_link_selector: &'static str,
    pub header_offset: f64,
    pub log_level: Level,
}

impl PlannerConfig {
    /// Build the config from the compile-time `ENVIRONMENT` variable.
    pub fn from_build_env() -> Self {
        Self::for_environment(option_env!("ENVIRONMENT").unwrap_or("production"))
    }

    pub fn for_environment(environment: &str) -> Self {
        let log_level = if environment == "development" {
            Level::Debug
        } else {
            Level::Info
        };

        Self {
            log_level,
            ..Self::default()
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            budget_container: BUDGET_CONTAINER_ID,
            trail_container: TRAIL_CONTAINER_ID,
            checklist_container: CHECKLIST_CONTAINER_ID,
            nav_link_selector: NAV_LINK_SELECTOR,
            header_offset: HEADER_OFFSET,
            log_level: Level::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_logs_debug() {
        assert_eq!(PlannerConfig::for_environment("development").log_level, Level::Debug);
        assert_eq!(PlannerConfig::for_environment("production").log_level, Level::Info);
        assert_eq!(PlannerConfig::for_environment("staging").log_level, Level::Info);
    }

    #[test]
    fn test_default_layout() {
        let config = PlannerConfig::default();
        assert_eq!(config.header_offset, 80.0);
        assert_eq!(config.trail_container, "trail-directory");
        assert_eq!(config.nav_link_selector, "nav a[href^=\"#\"]");
    }
}
