// =============================================================================
// Copper Falls Planner - Packing Checklist Model
// =============================================================================

/// A titled group of packing items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChecklistCategory {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

/// Categories in display order; items in display order within each.
pub const CHECKLIST: &[ChecklistCategory] = &[
    ChecklistCategory {
        title: "Shelter & Sleeping",
        items: &[
            "Tent & footprint",
            "Sleeping bags (20°F rated)",
            "Sleeping pads",
            "Camping pillows",
        ],
    },
    ChecklistCategory {
        title: "Cooking & Dining",
        items: &[
            "Camping stove & fuel",
            "Cook pots & pan",
            "Utensils (eating & cooking)",
            "Cooler & ice",
            "Water bottles/jug",
            "Biodegradable soap",
        ],
    },
    ChecklistCategory {
        title: "Clothing",
        items: &[
            "Moisture-wicking layers",
            "Quick-dry pants/shorts",
            "Fleece or jacket",
            "Rainwear (jacket & pants)",
            "Hiking shoes & socks",
            "Swimsuit",
        ],
    },
    ChecklistCategory {
        title: "Health & Safety",
        items: &[
            "First-aid kit",
            "Headlamps/flashlights",
            "Sunscreen & sun hat",
            "Bug repellent (DEET/Picaridin)",
            "Multi-tool or knife",
        ],
    },
];
