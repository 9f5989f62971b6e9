// =============================================================================
// Copper Falls Planner - UI Components
// =============================================================================
// Table of Contents:
// 1. Budget Estimator
// 2. Trail Directory
// 3. Packing Checklist
// =============================================================================

pub mod budget;
pub mod checklist;
pub mod trails;

pub use budget::BudgetEstimator;
pub use checklist::PackingChecklist;
pub use trails::{TrailCard, TrailDirectory};
