pub mod period;
pub mod reminders;
pub mod report;
