// =============================================================================
// Copper Falls Planner - Budget Estimator Model
// =============================================================================
// Table of Contents:
// 1. Selection Types
// 2. Cost Ranges
// 3. Price Table
// 4. Estimate
// 5. Formatting
// =============================================================================
//
// The displayed trip total comes straight from the price table and is not the
// sum of the four category midpoints. Both numbers are read from the same
// table row but are kept independent.

use std::str::FromStr;

use crate::error::PlannerError;

// -----------------------------------------------------------------------------
// 1. Selection Types
// -----------------------------------------------------------------------------

/// Campsite fee tier by state residency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Residency {
    #[default]
    Resident,
    NonResident,
}

impl Residency {
    pub const ALL: [Residency; 2] = [Residency::Resident, Residency::NonResident];

    /// Radio `value` used in the markup.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resident => "resident",
            Self::NonResident => "non-resident",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Resident => "Wisconsin Resident",
            Self::NonResident => "Non-Resident",
        }
    }
}

impl FromStr for Residency {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "resident" => Ok(Self::Resident),
            "non-resident" => Ok(Self::NonResident),
            other => Err(PlannerError::unknown("residency", other)),
        }
    }
}

/// Campsite fee tier by hookup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SiteType {
    #[default]
    NonElectric,
    Electric,
}

impl SiteType {
    pub const ALL: [SiteType; 2] = [SiteType::NonElectric, SiteType::Electric];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NonElectric => "non-electric",
            Self::Electric => "electric",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NonElectric => "Non-Electric",
            Self::Electric => "Electric",
        }
    }
}

impl FromStr for SiteType {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "non-electric" => Ok(Self::NonElectric),
            "electric" => Ok(Self::Electric),
            other => Err(PlannerError::unknown("site type", other)),
        }
    }
}

/// The estimator input: one choice from each radio group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    pub residency: Residency,
    pub site_type: SiteType,
}

impl Selection {
    pub fn new(residency: Residency, site_type: SiteType) -> Self {
        Self { residency, site_type }
    }
}

// -----------------------------------------------------------------------------
// 2. Cost Ranges
// -----------------------------------------------------------------------------

/// Inclusive dollar range, `low <= high`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CostRange {
    pub low: f64,
    pub high: f64,
}

impl CostRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    /// Shift both bounds by a flat amount.
    pub fn offset(&self, by: f64) -> Self {
        Self::new(self.low + by, self.high + by)
    }
}

pub const FOOD_COST: CostRange = CostRange::new(60.0, 180.0);
pub const FUEL_COST: CostRange = CostRange::new(150.0, 200.0);
pub const MISC_COST: CostRange = CostRange::new(20.0, 50.0);

/// Flat fee charged once per reservation.
pub const RESERVATION_FEE: f64 = 7.95;

// -----------------------------------------------------------------------------
// 3. Price Table
// -----------------------------------------------------------------------------

/// One row of the price table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SiteFees {
    /// Campsite fees for the stay, before the reservation fee.
    pub fees: CostRange,
    /// Whole-trip estimate.
    pub total: CostRange,
}

pub fn price_table(selection: Selection) -> SiteFees {
    use Residency::*;
    use SiteType::*;

    let (fees, total) = match (selection.residency, selection.site_type) {
        (Resident, NonElectric) => ((30.0, 66.0), (274.0, 442.0)),
        (Resident, Electric) => ((40.0, 90.0), (284.0, 472.0)),
        (NonResident, NonElectric) => ((70.0, 96.0), (316.0, 492.0)),
        (NonResident, Electric) => ((80.0, 120.0), (326.0, 522.0)),
    };

    SiteFees {
        fees: CostRange::new(fees.0, fees.1),
        total: CostRange::new(total.0, total.1),
    }
}

// -----------------------------------------------------------------------------
// 4. Estimate
// -----------------------------------------------------------------------------

/// Bars on the budget chart, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CostCategory {
    CampsiteFees,
    Food,
    Fuel,
    Misc,
}

impl CostCategory {
    pub const ALL: [CostCategory; 4] = [
        CostCategory::CampsiteFees,
        CostCategory::Food,
        CostCategory::Fuel,
        CostCategory::Misc,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::CampsiteFees => "Campsite Fees",
            Self::Food => "Food",
            Self::Fuel => "Fuel",
            Self::Misc => "Misc.",
        }
    }

    /// Bar fill color.
    pub fn color(&self) -> &'static str {
        match self {
            Self::CampsiteFees => "#6B8A7A",
            Self::Food => "#A47E3B",
            Self::Fuel => "#4F4A45",
            Self::Misc => "#EFEBE4",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CategoryCost {
    pub category: CostCategory,
    pub range: CostRange,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Estimate {
    pub categories: [CategoryCost; 4],
    pub total: CostRange,
}

impl Estimate {
    pub fn lows(&self) -> [f64; 4] {
        self.categories.map(|c| c.range.low)
    }

    pub fn highs(&self) -> [f64; 4] {
        self.categories.map(|c| c.range.high)
    }

    /// Plotted bar lengths.
    pub fn midpoints(&self) -> [f64; 4] {
        self.categories.map(|c| c.range.midpoint())
    }

    pub fn total_display(&self) -> String {
        format_dollar_range(self.total)
    }
}

pub fn estimate(selection: Selection) -> Estimate {
    let row = price_table(selection);
    let fees = row.fees.offset(RESERVATION_FEE);

    let ranges = [fees, FOOD_COST, FUEL_COST, MISC_COST];
    let categories = [0, 1, 2, 3].map(|i| CategoryCost {
        category: CostCategory::ALL[i],
        range: ranges[i],
    });

    Estimate {
        categories,
        total: row.total,
    }
}

// -----------------------------------------------------------------------------
// 5. Formatting
// -----------------------------------------------------------------------------

/// `$low - $high`, rounded to whole dollars.
pub fn format_dollar_range(range: CostRange) -> String {
    format!("${} - ${}", range.low.round() as i64, range.high.round() as i64)
}

/// Chart tooltip line for one bar: `Label: $low - $high` with cents.
pub fn tooltip_label(dataset_label: &str, low: f64, high: f64) -> String {
    let mut label = String::new();
    if !dataset_label.is_empty() {
        label.push_str(dataset_label);
        label.push_str(": ");
    }
    label.push_str(&format!("${:.2} - ${:.2}", low, high));
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_selections() -> Vec<Selection> {
        Residency::ALL
            .into_iter()
            .flat_map(|r| SiteType::ALL.into_iter().map(move |s| Selection::new(r, s)))
            .collect()
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_parse_selection_values() {
        assert_eq!("resident".parse::<Residency>(), Ok(Residency::Resident));
        assert_eq!("non-resident".parse::<Residency>(), Ok(Residency::NonResident));
        assert_eq!("electric".parse::<SiteType>(), Ok(SiteType::Electric));
        assert_eq!("non-electric".parse::<SiteType>(), Ok(SiteType::NonElectric));
        assert!("Resident".parse::<Residency>().is_err());
        assert!("".parse::<SiteType>().is_err());
    }

    #[test]
    fn test_markup_values_round_trip() {
        for r in Residency::ALL {
            assert_eq!(r.as_str().parse::<Residency>(), Ok(r));
        }
        for s in SiteType::ALL {
            assert_eq!(s.as_str().parse::<SiteType>(), Ok(s));
        }
    }

    #[test]
    fn test_price_table_ranges_are_ordered() {
        assert_eq!(all_selections().len(), 4);
        for selection in all_selections() {
            let row = price_table(selection);
            assert!(row.fees.low <= row.fees.high);
            assert!(row.total.low <= row.total.high);
        }
    }

    #[test]
    fn test_estimate_bounds_for_every_selection() {
        for selection in all_selections() {
            let row = price_table(selection);
            let est = estimate(selection);

            assert_close(est.lows()[0], row.fees.low + RESERVATION_FEE);
            assert_close(est.highs()[0], row.fees.high + RESERVATION_FEE);
            assert_eq!(est.categories[1].range, FOOD_COST);
            assert_eq!(est.categories[2].range, FUEL_COST);
            assert_eq!(est.categories[3].range, MISC_COST);
            assert_eq!(
                est.total_display(),
                format!("${} - ${}", row.total.low.round(), row.total.high.round())
            );
        }
    }

    #[test]
    fn test_non_resident_electric() {
        let est = estimate(Selection::new(Residency::NonResident, SiteType::Electric));

        assert_close(est.lows()[0], 87.95);
        assert_close(est.highs()[0], 127.95);
        assert_close(est.midpoints()[0], 107.95);
        assert_eq!(est.midpoints()[1..], [120.0, 175.0, 35.0]);
        assert_eq!(est.total_display(), "$326 - $522");
    }

    #[test]
    fn test_total_is_not_sum_of_midpoints() {
        let est = estimate(Selection::default());
        let summed: f64 = est.midpoints().iter().sum();

        assert_eq!(est.total, CostRange::new(274.0, 442.0));
        assert!((summed - est.total.midpoint()).abs() > 1.0);
    }

    #[test]
    fn test_category_order_and_labels() {
        let est = estimate(Selection::default());
        let labels: Vec<_> = est.categories.iter().map(|c| c.category.label()).collect();
        assert_eq!(labels, ["Campsite Fees", "Food", "Fuel", "Misc."]);
    }

    #[test]
    fn test_tooltip_label() {
        assert_eq!(
            tooltip_label("Estimated Cost ($)", 87.95, 127.95),
            "Estimated Cost ($): $87.95 - $127.95"
        );
        assert_eq!(tooltip_label("", 60.0, 180.0), "$60.00 - $180.00");
    }

    #[test]
    fn test_dollar_range_rounds() {
        assert_eq!(format_dollar_range(CostRange::new(37.95, 73.5)), "$38 - $74");
    }
}
