use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_maintenance, delete_work_day};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { day, maint } = cmd {
        if day.is_none() && maint.is_none() {
            return Err(AppError::NothingToDelete);
        }

        let mut pool = DbPool::new(&cfg.database)?;

        if let Some(id) = day {
            delete_work_day(&mut pool.conn, *id)?;
            audit(&pool.conn, "del", "work_day", &format!("deleted id {id}"))?;
            success(format!("Work day {id} deleted."));
        }

        if let Some(id) = maint {
            delete_maintenance(&pool.conn, *id)?;
            audit(&pool.conn, "del", "maintenance", &format!("deleted id {id}"))?;
            success(format!("Maintenance record {id} deleted."));
        }
    }

    Ok(())
}
