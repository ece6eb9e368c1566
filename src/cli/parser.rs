use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for drivelog
/// CLI logbook for gig-economy drivers backed by SQLite
#[derive(Parser)]
#[command(
    name = "drivelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A driver's logbook CLI: track earnings, fuel and maintenance, get reminders and reports",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration values for inconsistencies")]
        check: bool,
    },

    /// Log and list work days
    Day {
        #[command(subcommand)]
        command: DayCommands,
    },

    /// Log and list maintenance records
    Maint {
        #[command(subcommand)]
        command: MaintCommands,
    },

    /// Show maintenance reminders that are due or coming up
    Reminders,

    /// Aggregate earnings, fuel and maintenance over a period
    Report {
        #[arg(
            long,
            short,
            help = "Period: today|week|month|year|all, YYYY, YYYY-MM, YYYY-MM-DD or A:B range (default: today)"
        )]
        period: Option<String>,
    },

    /// Delete a work day or maintenance record by id
    Del {
        #[arg(long = "day", help = "Work day id to delete")]
        day: Option<i64>,

        #[arg(long = "maint", help = "Maintenance record id to delete")]
        maint: Option<i64>,
    },

    /// Export work-day data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum DayCommands {
    /// Log one day of driving
    Add {
        /// Date of the work day (YYYY-MM-DD)
        date: String,

        /// Odometer reading at end of day (km)
        #[arg(long = "km")]
        km: f64,

        /// Hours worked
        #[arg(long = "hours", default_value_t = 0.0)]
        hours: f64,

        /// Number of trips completed
        #[arg(long = "trips", default_value_t = 0)]
        trips: u32,

        /// Earning entry as CATEGORY=AMOUNT (repeatable)
        #[arg(long = "earn", value_name = "CAT=AMT")]
        earnings: Vec<String>,

        /// Fuel expense entry as FUELTYPE=AMOUNT (repeatable)
        #[arg(long = "fuel", value_name = "TYPE=AMT")]
        fuel: Vec<String>,
    },

    /// List logged work days
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's record")]
        now: bool,
    },
}

#[derive(Subcommand)]
pub enum MaintCommands {
    /// Record a maintenance intervention
    Add {
        /// Service date (YYYY-MM-DD)
        date: String,

        /// What was done ("oil change", "front tyres", ...)
        description: String,

        /// Cost of the intervention
        #[arg(long = "cost", default_value_t = 0.0)]
        cost: f64,

        /// Odometer reading at time of service (km)
        #[arg(long = "km")]
        km: Option<f64>,

        /// Remind again after this many km (needs --km)
        #[arg(long = "every-km", requires = "km")]
        every_km: Option<f64>,

        /// Remind on this absolute date (YYYY-MM-DD)
        #[arg(long = "remind-on")]
        remind_on: Option<String>,
    },

    /// List maintenance records
    List,
}
