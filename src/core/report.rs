//! Report aggregation: totals, per-category breakdowns and per-day
//! series over work days and maintenance records.
//!
//! Pure fold over already-loaded rows; date filtering happens here so
//! the same loaded set can serve several periods.

use crate::models::{MaintenanceRecord, WorkDay};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate for one earning category or fuel type.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct CategoryStat {
    pub total: f64,
    /// Number of work days contributing to the category.
    pub entries: u32,
    pub average: f64,
}

/// One chart point per worked day inside the period.
#[derive(Debug, Clone, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub earnings: f64,
    pub fuel: f64,
    pub trips: u32,
}

#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub total_earnings: f64,
    pub total_fuel: f64,
    pub total_maintenance: f64,
    pub trips: u32,
    pub days_worked: u32,
    /// Categories with no contributing day inside the period are omitted.
    pub earnings_by_category: BTreeMap<String, CategoryStat>,
    pub fuel_by_type: BTreeMap<String, CategoryStat>,
    pub daily: Vec<DailyPoint>,
}

impl Report {
    pub fn net(&self) -> f64 {
        self.total_earnings - self.total_fuel - self.total_maintenance
    }
}

/// Build a report restricted to `bounds` (inclusive); `None` = all-time.
pub fn build_report(
    work_days: &[WorkDay],
    maintenance: &[MaintenanceRecord],
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> Report {
    let in_bounds = |date: NaiveDate| match bounds {
        Some((start, end)) => date >= start && date <= end,
        None => true,
    };

    let mut report = Report::default();
    let mut earnings: BTreeMap<String, (f64, u32)> = BTreeMap::new();
    let mut fuel: BTreeMap<String, (f64, u32)> = BTreeMap::new();

    let mut days: Vec<&WorkDay> = work_days.iter().filter(|d| in_bounds(d.date)).collect();
    days.sort_by_key(|d| d.date);

    for day in &days {
        report.days_worked += 1;
        report.trips += day.trips;

        for (category, amount) in &day.earnings {
            report.total_earnings += amount;
            let slot = earnings.entry(category.clone()).or_default();
            slot.0 += amount;
            slot.1 += 1;
        }

        for (fuel_type, amount) in &day.fuel_expenses {
            report.total_fuel += amount;
            let slot = fuel.entry(fuel_type.clone()).or_default();
            slot.0 += amount;
            slot.1 += 1;
        }

        report.daily.push(DailyPoint {
            date: day.date,
            earnings: day.total_earnings(),
            fuel: day.total_fuel(),
            trips: day.trips,
        });
    }

    for rec in maintenance {
        if in_bounds(rec.date) {
            report.total_maintenance += rec.cost;
        }
    }

    report.earnings_by_category = finalize(earnings);
    report.fuel_by_type = finalize(fuel);

    report
}

fn finalize(raw: BTreeMap<String, (f64, u32)>) -> BTreeMap<String, CategoryStat> {
    raw.into_iter()
        .map(|(name, (total, entries))| {
            (
                name,
                CategoryStat {
                    total,
                    entries,
                    average: total / entries as f64,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn day(id: i64, date: &str, earnings: &[(&str, f64)], fuel: &[(&str, f64)]) -> WorkDay {
        WorkDay::new(
            id,
            d(date),
            10_000.0 + id as f64 * 100.0,
            8.0,
            12,
            earnings
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<BTreeMap<_, _>>(),
            fuel.iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<BTreeMap<_, _>>(),
        )
    }

    fn maint(id: i64, date: &str, cost: f64) -> MaintenanceRecord {
        MaintenanceRecord {
            id,
            description: "service".to_string(),
            date: d(date),
            cost,
            km_at_service: None,
            reminder_km: None,
            reminder_date: None,
        }
    }

    #[test]
    fn empty_input_yields_zero_totals() {
        let r = build_report(&[], &[], Some((d("2024-06-01"), d("2024-06-30"))));
        assert_eq!(r.total_earnings, 0.0);
        assert_eq!(r.days_worked, 0);
        assert!(r.earnings_by_category.is_empty());
        assert!(r.daily.is_empty());
    }

    #[test]
    fn totals_respect_bounds() {
        let days = vec![
            day(1, "2024-06-05", &[("rides", 100.0)], &[("petrol", 20.0)]),
            day(2, "2024-06-20", &[("rides", 80.0)], &[("petrol", 15.0)]),
            day(3, "2024-07-01", &[("rides", 50.0)], &[]),
        ];
        let maintenance = vec![maint(1, "2024-06-10", 60.0), maint(2, "2024-08-01", 200.0)];

        let r = build_report(&days, &maintenance, Some((d("2024-06-01"), d("2024-06-30"))));

        assert_eq!(r.total_earnings, 180.0);
        assert_eq!(r.total_fuel, 35.0);
        assert_eq!(r.total_maintenance, 60.0);
        assert_eq!(r.days_worked, 2);
        assert_eq!(r.trips, 24);
        assert_eq!(r.daily.len(), 2);
    }

    #[test]
    fn category_totals_partition_the_period_total() {
        let days = vec![
            day(
                1,
                "2024-06-05",
                &[("rides", 100.0), ("tips", 12.5), ("bonus", 30.0)],
                &[],
            ),
            day(2, "2024-06-06", &[("rides", 85.0), ("tips", 5.0)], &[]),
        ];

        let r = build_report(&days, &[], None);

        let category_sum: f64 = r.earnings_by_category.values().map(|c| c.total).sum();
        assert!((category_sum - r.total_earnings).abs() < 1e-9);
        assert_eq!(r.total_earnings, 232.5);
    }

    #[test]
    fn averages_divide_by_contributing_days() {
        let days = vec![
            day(1, "2024-06-05", &[("rides", 100.0)], &[]),
            day(2, "2024-06-06", &[("rides", 80.0)], &[]),
            day(3, "2024-06-07", &[("tips", 10.0)], &[]),
        ];

        let r = build_report(&days, &[], None);

        let rides = &r.earnings_by_category["rides"];
        assert_eq!(rides.entries, 2);
        assert_eq!(rides.average, 90.0);

        // "tips" appears on one day only; no zero-entry categories exist.
        assert_eq!(r.earnings_by_category["tips"].entries, 1);
        assert!(!r.earnings_by_category.contains_key("bonus"));
    }

    #[test]
    fn daily_series_is_date_ordered() {
        let days = vec![
            day(2, "2024-06-20", &[("rides", 80.0)], &[]),
            day(1, "2024-06-05", &[("rides", 100.0)], &[]),
        ];

        let r = build_report(&days, &[], None);
        assert_eq!(r.daily[0].date, d("2024-06-05"));
        assert_eq!(r.daily[1].date, d("2024-06-20"));
    }

    #[test]
    fn net_subtracts_fuel_and_maintenance() {
        let days = vec![day(1, "2024-06-05", &[("rides", 100.0)], &[("lpg", 30.0)])];
        let maintenance = vec![maint(1, "2024-06-06", 25.0)];

        let r = build_report(&days, &maintenance, None);
        assert_eq!(r.net(), 45.0);
    }
}
