// =============================================================================
// Copper Falls Planner - Trail Directory Component
// =============================================================================

use leptos::prelude::*;

use crate::trails::{filter_trails, is_active, Trail, TrailFilter, FILTER_CONTROLS, TRAILS};

/// Filter bar plus trail grid.
///
/// The grid is rebuilt from scratch whenever the filter changes.
#[component]
pub fn TrailDirectory() -> impl IntoView {
    let filter = RwSignal::new(TrailFilter::All);

    view! {
        <div id="trail-filters" class="filter-bar">
            {FILTER_CONTROLS.into_iter().map(|control| view! {
                <button
                    class="filter-btn"
                    class:active=move || is_active(filter.get(), control)
                    data-filter=control.as_str()
                    on:click=move |_| {
                        log::debug!("Trail filter -> {}", control.as_str());
                        filter.set(control);
                    }
                >
                    {control.label()}
                </button>
            }).collect_view()}
        </div>

        <div id="trail-grid" class="trail-grid">
            {move || {
                filter_trails(TRAILS, filter.get())
                    .into_iter()
                    .map(|trail| view! { <TrailCard trail=trail /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
pub fn TrailCard(trail: &'static Trail) -> impl IntoView {
    view! {
        <div class="card p-6">
            <h4 class="font-bold text-xl mb-2">{trail.name}</h4>
            <div class="text-sm text-[#4F4A45] mb-3">
                <span>{trail.length}</span>
                " • "
                <span>{trail.difficulty.label()}</span>
            </div>
            <p class="text-sm mb-4">{trail.description}</p>
            <div class="text-[#A47E3B]">
                {trail.badges().into_iter().map(|badge| view! {
                    <span class="text-xs font-bold mr-2">{format!("{} {}", badge.icon, badge.label)}</span>
                }).collect_view()}
            </div>
        </div>
    }
}
