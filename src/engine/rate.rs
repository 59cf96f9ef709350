//! Burn rate calculations
//!
//! The per-second rate divides the monthly total by the *real* length of the
//! month being evaluated (28-31 days). Unit projections then multiply that
//! rate by fixed nominal lengths, so "per month" is `rate × 30 days` and will
//! not equal the monthly total in months that are not 30 days long.

use chrono::NaiveDateTime;

use super::calendar::{days_in_month_of, seconds_between};
use super::snapshot::{CategoryFigures, RateFigures, RateSnapshot};
use crate::models::{ExpenseStore, TimeUnit, SECONDS_PER_DAY};

/// Sum of every monthly amount in the store
pub fn total_monthly(store: &ExpenseStore) -> f64 {
    store.total_monthly()
}

/// Spend per second for the month containing `now`
pub fn per_second_rate(store: &ExpenseStore, now: NaiveDateTime) -> f64 {
    rate_for_total(total_monthly(store), now)
}

fn rate_for_total(total_monthly: f64, now: NaiveDateTime) -> f64 {
    let seconds_in_month = f64::from(days_in_month_of(now)) * f64::from(SECONDS_PER_DAY);
    total_monthly / seconds_in_month
}

/// Scale a per-second rate to a nominal unit
pub fn project_to_unit(per_second_rate: f64, unit: TimeUnit) -> f64 {
    per_second_rate * f64::from(unit.seconds())
}

/// Spend accumulated between `anchor` and `now`; never negative
pub fn accumulated_since(per_second_rate: f64, anchor: NaiveDateTime, now: NaiveDateTime) -> f64 {
    per_second_rate * elapsed_seconds(anchor, now)
}

/// Fraction of the monthly total owed to one category
///
/// Zero when the store total is zero or the category is unknown.
pub fn category_share(store: &ExpenseStore, category: &str) -> f64 {
    share_of(store.category_total(category), total_monthly(store))
}

fn share_of(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        (part / total).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn elapsed_seconds(anchor: NaiveDateTime, now: NaiveDateTime) -> f64 {
    seconds_between(anchor, now).max(0.0)
}

/// Compute every figure for one tick
pub fn snapshot(store: &ExpenseStore, anchor: NaiveDateTime, now: NaiveDateTime) -> RateSnapshot {
    let total = total_monthly(store);
    let per_second = rate_for_total(total, now);
    let elapsed = elapsed_seconds(anchor, now);

    let categories = store
        .categories()
        .map(|(name, category)| {
            let monthly_total = category.total();
            let share = share_of(monthly_total, total);
            let figures = CategoryFigures {
                monthly_total,
                share,
                figures: RateFigures::from_rate(per_second * share, elapsed),
            };
            (name.clone(), figures)
        })
        .collect();

    RateSnapshot {
        evaluated_at: now,
        anchor,
        days_in_month: days_in_month_of(now),
        total_monthly: total,
        totals: RateFigures::from_rate(per_second, elapsed),
        categories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calendar::start_of_month;
    use chrono::NaiveDate;

    const EPSILON: f64 = 1e-9;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    fn store_from(json: &str) -> ExpenseStore {
        serde_json::from_str(json).unwrap()
    }

    fn rent_store() -> ExpenseStore {
        store_from(r#"{"categories": {"Housing": {"Rent": {"amount": 12000}}}}"#)
    }

    fn split_store() -> ExpenseStore {
        store_from(
            r#"{"categories": {
                "A": {"one": {"amount": 100}, "two": {"amount": 200}},
                "B": {"three": {"amount": 700}}
            }}"#,
        )
    }

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {} within {} of {}",
            actual,
            tolerance,
            expected
        );
    }

    #[test]
    fn test_rate_uses_actual_days_in_month() {
        let store = rent_store();

        let january = per_second_rate(&store, at(2024, 1, 10, 0, 0, 0));
        let leap_february = per_second_rate(&store, at(2024, 2, 10, 0, 0, 0));
        let february = per_second_rate(&store, at(2023, 2, 10, 0, 0, 0));

        assert_close(january, 12000.0 / (31.0 * 86400.0), EPSILON);
        assert_close(leap_february, 12000.0 / (29.0 * 86400.0), EPSILON);
        assert_close(february, 12000.0 / (28.0 * 86400.0), EPSILON);
    }

    #[test]
    fn test_rate_zero_iff_total_zero() {
        let now = at(2024, 5, 5, 12, 0, 0);
        assert_eq!(per_second_rate(&ExpenseStore::new(), now), 0.0);

        let dormant = store_from(r#"{"categories": {"Gym": {"Membership": {"amount": 0}}}}"#);
        assert_eq!(per_second_rate(&dormant, now), 0.0);

        assert!(per_second_rate(&rent_store(), now) > 0.0);
    }

    #[test]
    fn test_project_to_unit_is_pure_multiplication() {
        assert_eq!(project_to_unit(2.0, TimeUnit::Second), 2.0);
        assert_eq!(project_to_unit(2.0, TimeUnit::Hour), 7200.0);
        assert_eq!(project_to_unit(1.0, TimeUnit::Month), 2_592_000.0);
        assert_eq!(project_to_unit(1.0, TimeUnit::Year), 31_536_000.0);
    }

    #[test]
    fn test_accumulated_since_clamps_clock_skew() {
        let anchor = at(2024, 3, 1, 0, 0, 0);
        assert_eq!(accumulated_since(1.5, anchor, at(2024, 3, 1, 0, 0, 10)), 15.0);
        assert_eq!(accumulated_since(1.5, anchor, at(2024, 2, 28, 0, 0, 0)), 0.0);
    }

    #[test]
    fn test_category_share() {
        let store = split_store();
        assert_close(category_share(&store, "A"), 0.3, EPSILON);
        assert_close(category_share(&store, "B"), 0.7, EPSILON);
        assert_eq!(category_share(&store, "C"), 0.0);
        assert_eq!(category_share(&ExpenseStore::new(), "A"), 0.0);
    }

    #[test]
    fn test_concrete_rent_scenario_keeps_nominal_month() {
        let now = at(2024, 1, 15, 12, 0, 0);
        let snapshot = snapshot(&rent_store(), start_of_month(now), now);

        assert_eq!(snapshot.days_in_month, 31);
        assert_close(snapshot.totals.per_second, 0.004480, 1e-6);
        assert_close(snapshot.totals.per(TimeUnit::Day), 387.10, 0.01);

        // Nominal 30-day month on a 31-day calendar month: deliberately not 12000
        let per_month = snapshot.totals.per(TimeUnit::Month);
        assert_close(per_month, snapshot.totals.per_second * 2_592_000.0, EPSILON);
        assert_close(per_month, 11_612.9, 0.01);
        assert!((per_month - 12000.0).abs() > 300.0);
    }

    #[test]
    fn test_full_month_accumulates_monthly_total() {
        let anchor = at(2024, 1, 1, 0, 0, 0);
        let end = at(2024, 1, 31, 23, 59, 59) + chrono::Duration::seconds(1);
        let accumulated = accumulated_since(per_second_rate(&rent_store(), anchor), anchor, end);
        assert_close(accumulated, 12000.0, 1e-6);
    }

    #[test]
    fn test_category_figures_sum_to_totals() {
        let store = split_store();
        let now = at(2024, 2, 20, 8, 30, 15);
        let snapshot = snapshot(&store, start_of_month(now), now);

        for unit in TimeUnit::ALL {
            let sum: f64 = snapshot.categories.values().map(|c| c.figures.per(unit)).sum();
            assert_close(sum, snapshot.totals.per(unit), 1e-6);
        }

        let accumulated: f64 = snapshot.categories.values().map(|c| c.figures.accumulated).sum();
        assert_close(accumulated, snapshot.totals.accumulated, 1e-6);

        let a = snapshot.category("A").unwrap();
        let b = snapshot.category("B").unwrap();
        assert_close(a.share, 0.3, EPSILON);
        assert_close(b.share, 0.7, EPSILON);
        assert_close(
            a.figures.per(TimeUnit::Month) + b.figures.per(TimeUnit::Month),
            snapshot.totals.per(TimeUnit::Month),
            1e-6,
        );
    }

    #[test]
    fn test_empty_store_snapshot_is_all_zero() {
        let now = at(2024, 7, 4, 9, 0, 0);
        let snapshot = snapshot(&ExpenseStore::new(), start_of_month(now), now);

        assert!(snapshot.is_idle());
        assert!(snapshot.categories.is_empty());
        assert_eq!(snapshot.totals, RateFigures::zero());
    }

    #[test]
    fn test_zero_total_category_resolves_to_zero() {
        let store = store_from(
            r#"{"categories": {"Housing": {"Rent": {"amount": 500}}, "Paused": {}}}"#,
        );
        let now = at(2024, 7, 4, 9, 0, 0);
        let snapshot = snapshot(&store, start_of_month(now), now);

        let paused = snapshot.category("Paused").unwrap();
        assert_eq!(paused.share, 0.0);
        assert_eq!(paused.figures, RateFigures::zero());
    }

    #[test]
    fn test_snapshot_before_anchor_accumulates_nothing() {
        let anchor = at(2024, 3, 1, 0, 0, 0);
        let earlier = at(2024, 2, 29, 23, 0, 0);
        let snapshot = snapshot(&rent_store(), anchor, earlier);

        assert_eq!(snapshot.totals.accumulated, 0.0);
        assert!(snapshot.categories.values().all(|c| c.figures.accumulated == 0.0));
    }
}
