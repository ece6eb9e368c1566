pub mod maintenance;
pub mod reminder;
pub mod work_day;

pub use maintenance::{MaintenanceRecord, ReminderTrigger};
pub use reminder::{Reminder, ReminderRule};
pub use work_day::WorkDay;
