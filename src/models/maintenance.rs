use chrono::NaiveDate;
use serde::Serialize;

/// A vehicle maintenance entry (oil change, tyres, inspection, ...).
///
/// The three optional columns encode up to two reminder triggers; the
/// engine never probes them directly, it goes through [`triggers`].
///
/// [`triggers`]: MaintenanceRecord::triggers
#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceRecord {
    pub id: i64,
    pub description: String,
    pub date: NaiveDate,               // service date
    pub cost: f64,                     // ⇔ maintenance.cost
    pub km_at_service: Option<f64>,    // odometer at time of service
    pub reminder_km: Option<f64>,      // repeat distance, together with km_at_service
    pub reminder_date: Option<NaiveDate>,
}

/// A single reminder trigger rule, made explicit so that rule dispatch
/// is exhaustive instead of optional-field probing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReminderTrigger {
    /// Remind after an absolute date.
    ByDate(NaiveDate),
    /// Remind after `interval_km` driven past the service odometer.
    ByDistance { km_at_service: f64, interval_km: f64 },
}

impl MaintenanceRecord {
    /// The trigger rules this record carries, in evaluation order:
    /// date rule first, then distance rule.
    ///
    /// The distance rule needs both `km_at_service` and `reminder_km`;
    /// a record with neither column set yields no triggers at all.
    pub fn triggers(&self) -> Vec<ReminderTrigger> {
        let mut out = Vec::with_capacity(2);

        if let Some(date) = self.reminder_date {
            out.push(ReminderTrigger::ByDate(date));
        }

        if let (Some(km), Some(every)) = (self.km_at_service, self.reminder_km) {
            out.push(ReminderTrigger::ByDistance {
                km_at_service: km,
                interval_km: every,
            });
        }

        out
    }
}
