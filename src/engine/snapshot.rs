//! Snapshot types produced by the rate engine
//!
//! A snapshot is recomputed on every tick and never stored.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::TimeUnit;

/// Rate figures for either the whole store or a single category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateFigures {
    /// Calendar-accurate spend per second
    pub per_second: f64,

    /// `per_second` projected into each nominal unit
    pub per_unit: BTreeMap<TimeUnit, f64>,

    /// Spend accumulated since the month anchor
    pub accumulated: f64,
}

impl RateFigures {
    /// All-zero figures
    pub fn zero() -> Self {
        Self::from_rate(0.0, 0.0)
    }

    /// Build figures from a per-second rate and the non-negative elapsed seconds
    pub fn from_rate(per_second: f64, elapsed_seconds: f64) -> Self {
        let per_unit = TimeUnit::ALL
            .iter()
            .map(|unit| (*unit, super::rate::project_to_unit(per_second, *unit)))
            .collect();

        Self {
            per_second,
            per_unit,
            accumulated: per_second * elapsed_seconds.max(0.0),
        }
    }

    /// Projected figure for one unit
    pub fn per(&self, unit: TimeUnit) -> f64 {
        self.per_unit.get(&unit).copied().unwrap_or(0.0)
    }
}

/// Figures for one category, scaled by its share of the total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryFigures {
    /// Sum of the category's monthly amounts
    pub monthly_total: f64,

    /// Fraction of the store's monthly total, in [0, 1]
    pub share: f64,

    #[serde(flatten)]
    pub figures: RateFigures,
}

/// Everything a renderer needs for one tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateSnapshot {
    /// The instant this snapshot was evaluated for
    pub evaluated_at: NaiveDateTime,

    /// Start of the month accumulation is measured from
    pub anchor: NaiveDateTime,

    /// Real length of the evaluation month
    pub days_in_month: u32,

    /// Sum of every monthly amount
    pub total_monthly: f64,

    pub totals: RateFigures,

    pub categories: BTreeMap<String, CategoryFigures>,
}

impl RateSnapshot {
    /// Figures for one category, if it exists
    pub fn category(&self, name: &str) -> Option<&CategoryFigures> {
        self.categories.get(name)
    }

    /// Whether nothing is being spent
    pub fn is_idle(&self) -> bool {
        self.totals.per_second == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_figures() {
        let figures = RateFigures::zero();
        assert_eq!(figures.per_unit.len(), TimeUnit::ALL.len());
        assert!(figures.per_unit.values().all(|v| *v == 0.0));
        assert_eq!(figures.accumulated, 0.0);
    }

    #[test]
    fn test_from_rate_clamps_negative_elapsed() {
        let figures = RateFigures::from_rate(2.0, -30.0);
        assert_eq!(figures.accumulated, 0.0);
        assert_eq!(figures.per(TimeUnit::Minute), 120.0);
    }

    #[test]
    fn test_category_figures_serialize_flat() {
        let category = CategoryFigures {
            monthly_total: 100.0,
            share: 1.0,
            figures: RateFigures::from_rate(1.0, 10.0),
        };

        let value = serde_json::to_value(&category).unwrap();
        assert_eq!(value["accumulated"], 10.0);
        assert_eq!(value["per_unit"]["hour"], 3600.0);
        assert_eq!(value["share"], 1.0);
    }
}
