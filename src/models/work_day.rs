use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// One logged day of driving.
///
/// Earnings and fuel expenses are keyed by free-form category names
/// ("rides", "tips", "petrol", ...). BTreeMap keeps listing and report
/// output deterministic.
#[derive(Debug, Clone, Serialize)]
pub struct WorkDay {
    pub id: i64,
    pub date: NaiveDate,     // ⇔ work_days.date (TEXT "YYYY-MM-DD")
    pub km: f64,             // odometer reading at end of day
    pub hours_worked: f64,   // ⇔ work_days.hours
    pub trips: u32,          // ⇔ work_days.trips
    pub earnings: BTreeMap<String, f64>,
    pub fuel_expenses: BTreeMap<String, f64>,
}

impl WorkDay {
    pub fn new(
        id: i64,
        date: NaiveDate,
        km: f64,
        hours_worked: f64,
        trips: u32,
        earnings: BTreeMap<String, f64>,
        fuel_expenses: BTreeMap<String, f64>,
    ) -> Self {
        Self {
            id,
            date,
            km,
            hours_worked,
            trips,
            earnings,
            fuel_expenses,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn total_earnings(&self) -> f64 {
        self.earnings.values().sum()
    }

    pub fn total_fuel(&self) -> f64 {
        self.fuel_expenses.values().sum()
    }

    pub fn net(&self) -> f64 {
        self.total_earnings() - self.total_fuel()
    }
}
