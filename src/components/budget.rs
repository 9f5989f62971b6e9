// =============================================================================
// Copper Falls Planner - Budget Estimator Component
// =============================================================================
// Residency and site type radios feed an explicit `Selection`; the chart and
// the trip total are redrawn from it on load and on every change.
// =============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use leptos::html;
use leptos::prelude::*;

use crate::budget::{self, Residency, Selection, SiteType};
use crate::chart::BudgetChart;

#[component]
pub fn BudgetEstimator() -> impl IntoView {
    let selection = RwSignal::new(Selection::default());
    let estimate = Memo::new(move |_| budget::estimate(selection.get()));

    let canvas_ref = NodeRef::<html::Canvas>::new();
    let chart: Rc<RefCell<Option<BudgetChart>>> = Rc::default();

    // Attach lazily once the canvas is in the DOM, then redraw on each change
    Effect::new(move |_| {
        let estimate = estimate.get();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };

        let mut slot = chart.borrow_mut();
        if slot.is_none() {
            match BudgetChart::attach(&canvas) {
                Ok(attached) => *slot = Some(attached),
                Err(e) => {
                    log::error!("Budget chart unavailable: {}", e);
                    return;
                }
            }
        }

        if let Some(chart) = slot.as_ref() {
            if let Err(e) = chart.render(&estimate) {
                log::error!("Budget chart update failed: {}", e);
            }
        }
        log::debug!("Budget updated: {:?} -> {}", selection.get_untracked(), estimate.total_display());
    });

    view! {
        <div class="budget-controls">
            <div id="residency-toggle" class="toggle-group">
                {Residency::ALL.into_iter().map(|residency| view! {
                    <label class="toggle-option">
                        <input
                            type="radio"
                            name="residency"
                            value=residency.as_str()
                            prop:checked=move || selection.get().residency == residency
                            on:change=move |e| {
                                match event_target_value(&e).parse::<Residency>() {
                                    Ok(value) => selection.update(|s| s.residency = value),
                                    Err(err) => log::warn!("Ignoring radio change: {}", err),
                                }
                            }
                        />
                        <span>{residency.label()}</span>
                    </label>
                }).collect_view()}
            </div>

            <div id="site-type-toggle" class="toggle-group">
                {SiteType::ALL.into_iter().map(|site_type| view! {
                    <label class="toggle-option">
                        <input
                            type="radio"
                            name="site-type"
                            value=site_type.as_str()
                            prop:checked=move || selection.get().site_type == site_type
                            on:change=move |e| {
                                match event_target_value(&e).parse::<SiteType>() {
                                    Ok(value) => selection.update(|s| s.site_type = value),
                                    Err(err) => log::warn!("Ignoring radio change: {}", err),
                                }
                            }
                        />
                        <span>{site_type.label()}</span>
                    </label>
                }).collect_view()}
            </div>
        </div>

        <div class="chart-container">
            <canvas id="budgetChart" node_ref=canvas_ref></canvas>
        </div>

        <p class="budget-total">
            "Estimated trip total: "
            <span id="total-cost">{move || estimate.get().total_display()}</span>
        </p>
    }
}
