//! Maintenance reminder engine.
//!
//! Pure computation over already-loaded records: no I/O, no clock access
//! (the caller passes `today`), no shared state. The home view recomputes
//! reminders on every request.

use crate::models::{MaintenanceRecord, Reminder, ReminderRule, ReminderTrigger, WorkDay};
use crate::utils::format_km;
use chrono::NaiveDate;

/// Thresholds for the two trigger rules. Defaults match the product
/// behavior; the config file can override them.
#[derive(Debug, Clone, Copy)]
pub struct ReminderPolicy {
    /// Date rule fires within this many days of the target date.
    pub due_soon_days: i64,
    /// Date rule marks urgent within this many days (or past due).
    pub urgent_days: i64,
    /// Distance rule fires within this many km of the target odometer.
    pub due_soon_km: f64,
    /// Distance rule marks urgent within this many km.
    pub urgent_km: f64,
}

impl Default for ReminderPolicy {
    fn default() -> Self {
        Self {
            due_soon_days: 7,
            urgent_days: 2,
            due_soon_km: 500.0,
            urgent_km: 100.0,
        }
    }
}

/// Derive the active reminders from maintenance records and work-day
/// history.
///
/// Each record contributes at most one reminder: when both the date rule
/// and the distance rule fire, the later trigger in [`MaintenanceRecord::triggers`]
/// order replaces the earlier one, so the distance reminder survives.
/// Output keeps the input record order otherwise.
pub fn compute_reminders(
    records: &[MaintenanceRecord],
    work_days: &[WorkDay],
    today: NaiveDate,
    policy: &ReminderPolicy,
) -> Vec<Reminder> {
    let latest_km = latest_odometer(work_days);

    let mut out: Vec<Reminder> = Vec::new();

    for rec in records {
        for trigger in rec.triggers() {
            let Some(reminder) = evaluate(rec, trigger, latest_km, today, policy) else {
                continue;
            };

            // Dedup by record id, last rule wins.
            match out.iter().position(|r| r.id == rec.id) {
                Some(pos) => out[pos] = reminder,
                None => out.push(reminder),
            }
        }
    }

    out
}

/// Latest odometer reading = max over all work days. The km column is
/// assumed monotonically non-decreasing over time but never enforced,
/// so the max is the safe read.
pub fn latest_odometer(work_days: &[WorkDay]) -> f64 {
    work_days.iter().map(|d| d.km).fold(0.0, f64::max)
}

fn evaluate(
    rec: &MaintenanceRecord,
    trigger: ReminderTrigger,
    latest_km: f64,
    today: NaiveDate,
    policy: &ReminderPolicy,
) -> Option<Reminder> {
    match trigger {
        ReminderTrigger::ByDate(target) => {
            let days_until = (target - today).num_days();
            let overdue = days_until < 0;

            if !overdue && days_until > policy.due_soon_days {
                return None;
            }

            let reason = if overdue {
                format!("overdue since {}", target.format("%Y-%m-%d"))
            } else {
                format!("due on {}", target.format("%Y-%m-%d"))
            };

            Some(Reminder {
                id: rec.id,
                description: rec.description.clone(),
                reason,
                urgent: overdue || days_until <= policy.urgent_days,
                rule: ReminderRule::Date,
            })
        }

        ReminderTrigger::ByDistance {
            km_at_service,
            interval_km,
        } => {
            let target_km = km_at_service + interval_km;
            let remaining = target_km - latest_km;

            if remaining > policy.due_soon_km {
                return None;
            }

            let reason = if remaining < 0.0 {
                format!(
                    "due at {} km ({} km overdue)",
                    format_km(target_km),
                    format_km(-remaining)
                )
            } else {
                format!(
                    "due at {} km ({} km remaining)",
                    format_km(target_km),
                    format_km(remaining)
                )
            };

            Some(Reminder {
                id: rec.id,
                description: rec.description.clone(),
                reason,
                urgent: remaining <= policy.urgent_km,
                rule: ReminderRule::Distance,
            })
        }
    }
}
