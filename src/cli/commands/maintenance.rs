use crate::cli::parser::{Commands, MaintCommands};
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_maintenance, load_maintenance};
use crate::errors::{AppError, AppResult};
use crate::models::MaintenanceRecord;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::formatting::{format_km, format_money};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Maint { command } = cmd {
        match command {
            MaintCommands::Add {
                date,
                description,
                cost,
                km,
                every_km,
                remind_on,
            } => add(cfg, date, description, *cost, *km, *every_km, remind_on),
            MaintCommands::List => list(cfg),
        }
    } else {
        Ok(())
    }
}

fn add(
    cfg: &Config,
    date_raw: &str,
    description: &str,
    cost: f64,
    km: Option<f64>,
    every_km: Option<f64>,
    remind_on: &Option<String>,
) -> AppResult<()> {
    let d = date::parse_date(date_raw).ok_or_else(|| AppError::InvalidDate(date_raw.to_string()))?;

    let reminder_date = match remind_on {
        Some(raw) => {
            Some(date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.clone()))?)
        }
        None => None,
    };

    if cost < 0.0 {
        return Err(AppError::InvalidAmount(format!("cost cannot be negative: {cost}")));
    }

    let rec = MaintenanceRecord {
        id: 0,
        description: description.to_string(),
        date: d,
        cost,
        km_at_service: km,
        reminder_km: every_km,
        reminder_date,
    };

    let mut pool = DbPool::new(&cfg.database)?;
    let id = insert_maintenance(&pool.conn, &rec)?;

    audit(
        &pool.conn,
        "maint add",
        description,
        &format!("cost {}", format_money(cost, &cfg.currency)),
    )?;

    success(format!(
        "Maintenance record saved (id {}): {} on {}",
        id,
        description,
        d.format("%Y-%m-%d")
    ));

    Ok(())
}

fn list(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    let records = load_maintenance(&mut pool, None)?;

    if records.is_empty() {
        println!("No maintenance records found.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        "id",
        "date",
        "description",
        "cost",
        "km at service",
        "every km",
        "remind on",
    ]);

    for rec in &records {
        table.add_row(vec![
            rec.id.to_string(),
            rec.date.format("%Y-%m-%d").to_string(),
            rec.description.clone(),
            format_money(rec.cost, &cfg.currency),
            rec.km_at_service.map(format_km).unwrap_or_else(|| "--".to_string()),
            rec.reminder_km.map(format_km).unwrap_or_else(|| "--".to_string()),
            rec.reminder_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "--".to_string()),
        ]);
    }

    print!("{}", table.render());
    println!("{} record(s)", records.len());

    Ok(())
}
