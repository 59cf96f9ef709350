//! Plain-text ticker readout
//!
//! Used by `burnrate show` and each frame of `burnrate watch`.

use tabled::settings::{object::Columns, Alignment, Style};
use tabled::{Table, Tabled};

use super::format::Formatter;
use crate::engine::RateSnapshot;
use crate::models::TimeUnit;

#[derive(Tabled)]
struct CategoryRateRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Monthly")]
    monthly: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Per day")]
    per_day: String,
    #[tabled(rename = "This month")]
    accumulated: String,
}

/// Heading used for a unit in the totals list
pub fn unit_heading(unit: TimeUnit) -> &'static str {
    match unit {
        TimeUnit::Second => "Per second",
        TimeUnit::Minute => "Per minute",
        TimeUnit::Hour => "Per hour",
        TimeUnit::Day => "Per day",
        TimeUnit::Week => "Per week",
        TimeUnit::Month => "Per month (30 d)",
        TimeUnit::Year => "Per year (365 d)",
    }
}

/// Render a snapshot as text
pub fn format_snapshot(snapshot: &RateSnapshot, formatter: &Formatter) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Current expenses ({})\n",
        formatter.format_datetime(snapshot.evaluated_at)
    ));
    output.push_str(&format!(
        "Spent since {}: {}\n\n",
        formatter.format_datetime(snapshot.anchor),
        formatter.format_money(snapshot.totals.accumulated)
    ));

    if snapshot.categories.is_empty() {
        output.push_str("No expenses recorded. Add one with 'burnrate expense add'.\n");
        return output;
    }

    let width = TimeUnit::ALL
        .iter()
        .map(|u| unit_heading(*u).len())
        .max()
        .unwrap_or(0);

    for unit in TimeUnit::ALL {
        output.push_str(&format!(
            "  {:<width$}  {}\n",
            unit_heading(unit),
            formatter.format_money(snapshot.totals.per(unit)),
            width = width
        ));
    }

    output.push_str(&format!(
        "\nMonthly total {} over {} days\n\n",
        formatter.format_money_with(snapshot.total_monthly, 2),
        snapshot.days_in_month
    ));

    let rows = snapshot.categories.iter().map(|(name, c)| CategoryRateRow {
        name: name.clone(),
        monthly: formatter.format_money_with(c.monthly_total, 2),
        share: formatter.format_percent(c.share),
        per_day: formatter.format_money(c.figures.per(TimeUnit::Day)),
        accumulated: formatter.format_money(c.figures.accumulated),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(1..), Alignment::right());
    output.push_str(&format!("{}\n", table));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::engine::rate;
    use crate::models::ExpenseStore;
    use chrono::NaiveDate;

    fn formatter() -> Formatter {
        Formatter::from_settings(&Settings {
            decimal_places: 2,
            ..Settings::default()
        })
    }

    #[test]
    fn test_snapshot_readout() {
        let mut store = ExpenseStore::new();
        store.add_category("Housing").unwrap();
        store.add_expense("Housing", "Rent", 12000.0).unwrap();

        let anchor = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let now = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        let output = format_snapshot(&rate::snapshot(&store, anchor, now), &formatter());

        assert!(output.contains("Spent since 1. januar 2024 00:00:00: 387,10 kr."));
        assert!(output.contains("Per day"));
        assert!(output.contains("Per month (30 d)"));
        assert!(output.contains("11.612,90 kr."));
        assert!(output.contains("over 31 days"));
        assert!(output.contains("Housing"));
        assert!(output.contains("100,0%"));
    }

    #[test]
    fn test_empty_snapshot_readout() {
        let now = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let output = format_snapshot(&rate::snapshot(&ExpenseStore::new(), now, now), &formatter());

        assert!(output.contains("0,00 kr."));
        assert!(output.contains("No expenses recorded"));
    }
}
