pub mod config;
pub mod day;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod log;
pub mod maintenance;
pub mod reminders;
pub mod report;
