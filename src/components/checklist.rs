// =============================================================================
// Copper Falls Planner - Packing Checklist Component
// =============================================================================
// Checkboxes are presentational only. Their state is never read or stored.
// =============================================================================

use leptos::prelude::*;

use crate::checklist::{ChecklistCategory, CHECKLIST};

#[component]
pub fn PackingChecklist() -> impl IntoView {
    CHECKLIST
        .iter()
        .map(|category| view! { <ChecklistGroup category=*category /> })
        .collect_view()
}

#[component]
fn ChecklistGroup(category: ChecklistCategory) -> impl IntoView {
    view! {
        <div class="checklist-category">
            <h4 class="font-semibold text-lg mb-3">{category.title}</h4>
            <ul class="space-y-2">
                {category.items.iter().map(|item| view! {
                    <li>
                        <label class="flex items-center space-x-3 cursor-pointer">
                            <input
                                type="checkbox"
                                class="w-5 h-5 rounded border-gray-300 text-green-600 focus:ring-green-500"
                            />
                            <span>{*item}</span>
                        </label>
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}
