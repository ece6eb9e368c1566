use crate::models::WorkDay;
use serde::Serialize;

/// Flat work-day row for export: maps are collapsed to totals plus a
/// `name=amount;...` detail string so CSV stays one row per day.
#[derive(Serialize, Clone, Debug)]
pub struct WorkDayExport {
    pub id: i64,
    pub date: String,
    pub km: f64,
    pub hours_worked: f64,
    pub trips: u32,
    pub total_earnings: f64,
    pub total_fuel: f64,
    pub earnings_detail: String,
    pub fuel_detail: String,
}

impl From<&WorkDay> for WorkDayExport {
    fn from(day: &WorkDay) -> Self {
        Self {
            id: day.id,
            date: day.date_str(),
            km: day.km,
            hours_worked: day.hours_worked,
            trips: day.trips,
            total_earnings: day.total_earnings(),
            total_fuel: day.total_fuel(),
            earnings_detail: join_entries(&day.earnings),
            fuel_detail: join_entries(&day.fuel_expenses),
        }
    }
}

fn join_entries(map: &std::collections::BTreeMap<String, f64>) -> String {
    map.iter()
        .map(|(name, amount)| format!("{name}={amount:.2}"))
        .collect::<Vec<_>>()
        .join(";")
}
