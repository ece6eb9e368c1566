use crate::cli::parser::{Commands, DayCommands};
use crate::config::Config;
use crate::core::period::Period;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_work_day, load_work_days, max_recorded_km};
use crate::errors::{AppError, AppResult};
use crate::models::WorkDay;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::formatting::{format_km, format_money};
use crate::utils::table::Table;
use std::collections::BTreeMap;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { command } = cmd {
        match command {
            DayCommands::Add {
                date,
                km,
                hours,
                trips,
                earnings,
                fuel,
            } => add(cfg, date, *km, *hours, *trips, earnings, fuel),
            DayCommands::List { period, now } => list(cfg, period, *now),
        }
    } else {
        Ok(())
    }
}

fn add(
    cfg: &Config,
    date_raw: &str,
    km: f64,
    hours: f64,
    trips: u32,
    earnings_raw: &[String],
    fuel_raw: &[String],
) -> AppResult<()> {
    let d = date::parse_date(date_raw).ok_or_else(|| AppError::InvalidDate(date_raw.to_string()))?;

    if km < 0.0 {
        return Err(AppError::InvalidAmount(format!("km cannot be negative: {km}")));
    }

    let earnings = parse_entries(earnings_raw)?;
    let fuel = parse_entries(fuel_raw)?;

    let mut pool = DbPool::new(&cfg.database)?;

    // Odometer monotonicity is assumed, not enforced: warn and accept.
    let max_km = max_recorded_km(&mut pool)?;
    if km < max_km {
        warning(format!(
            "Odometer {} km is below the highest recorded reading ({} km).",
            format_km(km),
            format_km(max_km)
        ));
    }

    let day = WorkDay::new(0, d, km, hours, trips, earnings, fuel);
    let day_id = insert_work_day(&mut pool.conn, &day)?;

    audit(
        &pool.conn,
        "day add",
        &day.date_str(),
        &format!(
            "earnings {}, fuel {}",
            format_money(day.total_earnings(), &cfg.currency),
            format_money(day.total_fuel(), &cfg.currency)
        ),
    )?;

    success(format!(
        "Work day {} saved (id {}): {} earned, {} fuel, {} trips",
        day.date_str(),
        day_id,
        format_money(day.total_earnings(), &cfg.currency),
        format_money(day.total_fuel(), &cfg.currency),
        day.trips
    ));

    Ok(())
}

fn list(cfg: &Config, period: &Option<String>, now: bool) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    let today = date::today();

    let bounds = if now {
        Some((today, today))
    } else {
        match period {
            Some(p) => Period::parse(p)?.resolve(today),
            None => None, // no filter: list everything
        }
    };

    let days = load_work_days(&mut pool, bounds)?;

    if days.is_empty() {
        println!("No work days found.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        "id", "date", "km", "hours", "trips", "earnings", "fuel", "net",
    ]);

    for day in &days {
        table.add_row(vec![
            day.id.to_string(),
            day.date_str(),
            format_km(day.km),
            format!("{:.1}", day.hours_worked),
            day.trips.to_string(),
            format_money(day.total_earnings(), &cfg.currency),
            format_money(day.total_fuel(), &cfg.currency),
            format_money(day.net(), &cfg.currency),
        ]);
    }

    print!("{}", table.render());
    println!("{} day(s)", days.len());

    Ok(())
}

/// Parse repeated `NAME=AMOUNT` CLI entries into a category map.
/// Repeating a name accumulates into the same category.
fn parse_entries(raw: &[String]) -> AppResult<BTreeMap<String, f64>> {
    let mut out = BTreeMap::new();

    for entry in raw {
        let (name, amount_raw) = entry
            .split_once('=')
            .ok_or_else(|| AppError::InvalidEntry(entry.clone()))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidEntry(entry.clone()));
        }

        let amount: f64 = amount_raw
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidAmount(amount_raw.trim().to_string()))?;

        if amount < 0.0 {
            return Err(AppError::InvalidAmount(format!("{amount} (negative)")));
        }

        *out.entry(name.to_string()).or_insert(0.0) += amount;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_parse_and_accumulate() {
        let raw = vec![
            "rides=100.50".to_string(),
            "tips=12".to_string(),
            "rides=9.50".to_string(),
        ];
        let map = parse_entries(&raw).unwrap();
        assert_eq!(map["rides"], 110.0);
        assert_eq!(map["tips"], 12.0);
    }

    #[test]
    fn entries_reject_bad_shapes() {
        assert!(parse_entries(&["rides".to_string()]).is_err());
        assert!(parse_entries(&["=5".to_string()]).is_err());
        assert!(parse_entries(&["rides=abc".to_string()]).is_err());
        assert!(parse_entries(&["rides=-3".to_string()]).is_err());
    }
}
