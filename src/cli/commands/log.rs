use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let mut pool = DbPool::new(&cfg.database)?;
        let rows = load_log(&mut pool)?;

        if rows.is_empty() {
            println!("Audit log is empty.");
            return Ok(());
        }

        let mut table = Table::new(vec!["date", "operation", "target", "message"]);
        for row in &rows {
            table.add_row(vec![
                row.date.clone(),
                row.operation.clone(),
                row.target.clone(),
                row.message.clone(),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
