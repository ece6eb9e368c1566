use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reminders::compute_reminders;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{load_maintenance, load_work_days};
use crate::errors::AppResult;
use crate::models::Reminder;
use crate::ui::messages::warning;
use crate::utils::colors::{BOLD, RED, RESET, YELLOW};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if !matches!(cmd, Commands::Reminders) {
        return Ok(());
    }

    let reminders = load_and_compute(cfg);
    print_reminders(&reminders);

    Ok(())
}

/// Fail-open: a storage error must not block the view, so it degrades
/// to "no reminders" — but the error is still written to the audit log
/// and echoed as a warning, never silently dropped.
fn load_and_compute(cfg: &Config) -> Vec<Reminder> {
    let mut pool = match DbPool::new(&cfg.database) {
        Ok(p) => p,
        Err(e) => {
            warning(format!("Reminders unavailable: {e}"));
            return Vec::new();
        }
    };

    let loaded = load_maintenance(&mut pool, None)
        .and_then(|records| load_work_days(&mut pool, None).map(|days| (records, days)));

    match loaded {
        Ok((records, days)) => compute_reminders(
            &records,
            &days,
            date::today(),
            &cfg.reminder_policy(),
        ),
        Err(e) => {
            warning(format!("Reminders unavailable: {e}"));
            audit(&pool.conn, "reminders", "load", &e.to_string()).ok();
            Vec::new()
        }
    }
}

fn print_reminders(reminders: &[Reminder]) {
    if reminders.is_empty() {
        println!("No maintenance reminders. 🎉");
        return;
    }

    println!("{}Maintenance reminders:{}", BOLD, RESET);
    for r in reminders {
        if r.urgent {
            println!("  {RED}● {} ({}){RESET}", r.description, r.reason);
        } else {
            println!("  {YELLOW}○ {} ({}){RESET}", r.description, r.reason);
        }
    }
}
