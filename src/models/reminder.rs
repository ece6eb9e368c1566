use serde::Serialize;

/// Which trigger rule produced a reminder.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ReminderRule {
    Date,
    Distance,
}

/// A due-soon maintenance alert. Derived on demand from the current
/// maintenance records and work-day history, never persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Reminder {
    /// Id of the maintenance record that produced this reminder.
    pub id: i64,
    pub description: String,
    /// Human-readable trigger explanation.
    pub reason: String,
    pub urgent: bool,
    pub rule: ReminderRule,
}
