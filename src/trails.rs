// =============================================================================
// Copper Falls Planner - Trail Directory Model
// =============================================================================
// Table of Contents:
// 1. Trail Classifiers
// 2. Trail Record
// 3. Trail Table
// 4. Filtering
// =============================================================================

use std::str::FromStr;

use crate::error::PlannerError;

// -----------------------------------------------------------------------------
// 1. Trail Classifiers
// -----------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Moderate,
    Varies,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Moderate => "Moderate",
            Self::Varies => "Varies",
        }
    }
}

/// Something a trail offers. Drives the badges on its card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    Waterfalls,
    PetFriendly,
    Views,
}

/// Card badge for a feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Badge {
    pub icon: &'static str,
    pub label: &'static str,
}

impl Feature {
    /// Badge display order on a card.
    pub const ALL: [Feature; 3] = [Feature::Waterfalls, Feature::PetFriendly, Feature::Views];

    pub fn badge(&self) -> Badge {
        match self {
            Self::Waterfalls => Badge { icon: "🌊", label: "WATERFALL" },
            Self::PetFriendly => Badge { icon: "🐾", label: "PET-FRIENDLY" },
            Self::Views => Badge { icon: "🔭", label: "VIEWS" },
        }
    }
}

/// Filter label. Distinct from [`Feature`]: a trail can be tagged `easy`
/// without an easy difficulty rating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    Waterfalls,
    PetFriendly,
    Easy,
    Views,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waterfalls => "waterfalls",
            Self::PetFriendly => "pet-friendly",
            Self::Easy => "easy",
            Self::Views => "views",
        }
    }
}

impl From<Feature> for Tag {
    fn from(feature: Feature) -> Self {
        match feature {
            Feature::Waterfalls => Tag::Waterfalls,
            Feature::PetFriendly => Tag::PetFriendly,
            Feature::Views => Tag::Views,
        }
    }
}

impl FromStr for Tag {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "waterfalls" => Ok(Self::Waterfalls),
            "pet-friendly" => Ok(Self::PetFriendly),
            "easy" => Ok(Self::Easy),
            "views" => Ok(Self::Views),
            other => Err(PlannerError::unknown("trail tag", other)),
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Trail Record
// -----------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trail {
    pub name: &'static str,
    /// Display string, e.g. "4.0+ mi".
    pub length: &'static str,
    pub difficulty: Difficulty,
    pub features: &'static [Feature],
    pub description: &'static str,
    pub tags: &'static [Tag],
}

impl Trail {
    pub fn has_feature(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    /// Badges for this trail's features, in [`Feature::ALL`] order.
    pub fn badges(&self) -> Vec<Badge> {
        Feature::ALL
            .iter()
            .filter(|feature| self.has_feature(**feature))
            .map(Feature::badge)
            .collect()
    }
}

// -----------------------------------------------------------------------------
// 3. Trail Table
// -----------------------------------------------------------------------------

/// Park trails in display order.
pub const TRAILS: &[Trail] = &[
    Trail {
        name: "Doughboys Nature Trail",
        length: "1.7 mi",
        difficulty: Difficulty::Moderate,
        features: &[Feature::Waterfalls],
        description: "Main trail for viewing Copper and Brownstone Falls. Pets NOT allowed.",
        tags: &[Tag::Waterfalls, Tag::Easy],
    },
    Trail {
        name: "Red Granite Falls Trail",
        length: "2.5 mi",
        difficulty: Difficulty::Easy,
        features: &[Feature::Waterfalls, Feature::PetFriendly],
        description: "The only waterfall trail open to pets. Leads to Red Granite Falls.",
        tags: &[Tag::Waterfalls, Tag::PetFriendly, Tag::Easy],
    },
    Trail {
        name: "CCC 692 Trail",
        length: "1.0 mi",
        difficulty: Difficulty::Moderate,
        features: &[Feature::Views],
        description: "Spur trail to a 65-foot observation tower with views of Lake Superior.",
        tags: &[Tag::Views],
    },
    Trail {
        name: "Meadow Trail",
        length: "1.5 mi",
        difficulty: Difficulty::Easy,
        features: &[Feature::PetFriendly],
        description: "Gentle loop popular for wildlife viewing. Pets allowed.",
        tags: &[Tag::PetFriendly, Tag::Easy],
    },
    Trail {
        name: "Takesson Trails",
        length: "2.5 mi",
        difficulty: Difficulty::Moderate,
        features: &[Feature::PetFriendly],
        description: "Two-loop system for hiking/biking. Passes beaver ponds. Pets allowed.",
        tags: &[Tag::PetFriendly],
    },
    Trail {
        name: "Vahtera Trails",
        length: "1.7 mi",
        difficulty: Difficulty::Moderate,
        features: &[Feature::PetFriendly],
        description: "Two-loop system through hardwood and hemlock forest. Pets allowed.",
        tags: &[Tag::PetFriendly],
    },
    Trail {
        name: "North Country Trail",
        length: "4.0+ mi",
        difficulty: Difficulty::Varies,
        features: &[Feature::PetFriendly],
        description: "A national scenic trail passing through the park. Pets allowed.",
        tags: &[Tag::PetFriendly],
    },
];

// -----------------------------------------------------------------------------
// 4. Filtering
// -----------------------------------------------------------------------------

/// Active trail filter. `All` is the `"all"` sentinel in the markup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TrailFilter {
    #[default]
    All,
    Tag(Tag),
}

impl TrailFilter {
    /// `data-filter` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Tag(tag) => tag.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Trails",
            Self::Tag(Tag::Waterfalls) => "Waterfalls",
            Self::Tag(Tag::PetFriendly) => "Pet-Friendly",
            Self::Tag(Tag::Easy) => "Easy",
            Self::Tag(Tag::Views) => "Views",
        }
    }

    pub fn matches(&self, trail: &Trail) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => trail.has_tag(*tag),
        }
    }
}

impl FromStr for TrailFilter {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            other => other.parse().map(Self::Tag),
        }
    }
}

/// Buttons in the filter bar, left to right.
pub const FILTER_CONTROLS: [TrailFilter; 5] = [
    TrailFilter::All,
    TrailFilter::Tag(Tag::Waterfalls),
    TrailFilter::Tag(Tag::PetFriendly),
    TrailFilter::Tag(Tag::Easy),
    TrailFilter::Tag(Tag::Views),
];

/// Whether the filter bar button for `control` is highlighted while
/// `current` is applied.
pub fn is_active(current: TrailFilter, control: TrailFilter) -> bool {
    current == control
}

/// Trails matching `filter`, in their original order.
pub fn filter_trails(trails: &[Trail], filter: TrailFilter) -> Vec<&Trail> {
    trails.iter().filter(|trail| filter.matches(trail)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(trails: &[&Trail]) -> Vec<&'static str> {
        trails.iter().map(|t| t.name).collect()
    }

    #[test]
    fn test_waterfalls_filter() {
        let found = filter_trails(TRAILS, TrailFilter::Tag(Tag::Waterfalls));
        assert_eq!(names(&found), ["Doughboys Nature Trail", "Red Granite Falls Trail"]);
    }

    #[test]
    fn test_all_filter_keeps_full_list() {
        let found = filter_trails(TRAILS, TrailFilter::All);
        assert_eq!(found.len(), 7);
        assert_eq!(names(&found), TRAILS.iter().map(|t| t.name).collect::<Vec<_>>());
    }

    #[test]
    fn test_each_tag_filter_in_list_order() {
        let cases: [(Tag, &[&str]); 4] = [
            (Tag::Waterfalls, &["Doughboys Nature Trail", "Red Granite Falls Trail"]),
            (
                Tag::PetFriendly,
                &[
                    "Red Granite Falls Trail",
                    "Meadow Trail",
                    "Takesson Trails",
                    "Vahtera Trails",
                    "North Country Trail",
                ],
            ),
            (
                Tag::Easy,
                &["Doughboys Nature Trail", "Red Granite Falls Trail", "Meadow Trail"],
            ),
            (Tag::Views, &["CCC 692 Trail"]),
        ];

        for (tag, expected) in cases {
            let found = filter_trails(TRAILS, TrailFilter::Tag(tag));
            assert_eq!(names(&found), expected, "filter {}", tag.as_str());
        }
    }

    #[test]
    fn test_tags_cover_features() {
        for trail in TRAILS {
            for feature in trail.features {
                assert!(trail.has_tag(Tag::from(*feature)), "{} missing tag", trail.name);
            }
        }
    }

    #[test]
    fn test_badges_follow_features() {
        let meadow = TRAILS.iter().find(|t| t.name == "Meadow Trail").unwrap();
        assert_eq!(meadow.badges(), vec![Feature::PetFriendly.badge()]);

        let red_granite = &TRAILS[1];
        assert_eq!(
            red_granite.badges(),
            vec![Feature::Waterfalls.badge(), Feature::PetFriendly.badge()]
        );

        // tagged `easy`, but badges only come from features
        let doughboys = &TRAILS[0];
        assert_eq!(doughboys.badges(), vec![Feature::Waterfalls.badge()]);
    }

    #[test]
    fn test_filter_values_parse() {
        assert_eq!("all".parse::<TrailFilter>(), Ok(TrailFilter::All));
        assert_eq!("pet-friendly".parse::<TrailFilter>(), Ok(TrailFilter::Tag(Tag::PetFriendly)));
        assert!("BUTTON".parse::<TrailFilter>().is_err());
        for control in FILTER_CONTROLS {
            assert_eq!(control.as_str().parse::<TrailFilter>(), Ok(control));
        }
    }

    #[test]
    fn test_exactly_one_control_active_after_click() {
        for clicked in FILTER_CONTROLS {
            let active: Vec<_> = FILTER_CONTROLS
                .into_iter()
                .filter(|control| is_active(clicked, *control))
                .collect();
            assert_eq!(active, vec![clicked]);
        }
    }

    #[test]
    fn test_initial_filter_highlights_all() {
        let active: Vec<_> = FILTER_CONTROLS
            .into_iter()
            .filter(|control| is_active(TrailFilter::default(), *control))
            .collect();
        assert_eq!(active, vec![TrailFilter::All]);
    }
}
