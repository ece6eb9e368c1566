use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::period::Period;
use crate::core::report::{Report, build_report};
use crate::db::pool::DbPool;
use crate::db::queries::{load_maintenance, load_work_days};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::date;
use crate::utils::formatting::format_money;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { period } = cmd {
        let today = date::today();

        // Absent filter falls back to today; an explicit but invalid
        // one is a user error and is reported as such.
        let selected = match period {
            Some(p) => Period::parse(p)?,
            None => Period::Today,
        };
        let bounds = selected.resolve(today);

        let mut pool = DbPool::new(&cfg.database)?;
        let days = load_work_days(&mut pool, bounds)?;
        let maintenance = load_maintenance(&mut pool, bounds)?;

        let report = build_report(&days, &maintenance, bounds);

        print_report(&report, bounds, cfg);
    }

    Ok(())
}

fn print_report(
    report: &Report,
    bounds: Option<(chrono::NaiveDate, chrono::NaiveDate)>,
    cfg: &Config,
) {
    match bounds {
        Some((start, end)) if start == end => header(format!("Report for {start}")),
        Some((start, end)) => header(format!("Report {start} to {end}")),
        None => header("Report (all time)"),
    }

    let c = &cfg.currency;

    println!("Days worked:       {}", report.days_worked);
    println!("Trips:             {}", report.trips);
    println!("Total earnings:    {}", format_money(report.total_earnings, c));
    println!("Total fuel:        {}", format_money(report.total_fuel, c));
    println!(
        "Total maintenance: {}",
        format_money(report.total_maintenance, c)
    );
    println!("Net:               {}", format_money(report.net(), c));

    if !report.earnings_by_category.is_empty() {
        println!("\nEarnings by category:");
        let mut table = Table::new(vec!["category", "total", "days", "average"]);
        for (name, stat) in &report.earnings_by_category {
            table.add_row(vec![
                name.clone(),
                format_money(stat.total, c),
                stat.entries.to_string(),
                format_money(stat.average, c),
            ]);
        }
        print!("{}", table.render());
    }

    if !report.fuel_by_type.is_empty() {
        println!("\nFuel by type:");
        let mut table = Table::new(vec!["fuel type", "total", "days", "average"]);
        for (name, stat) in &report.fuel_by_type {
            table.add_row(vec![
                name.clone(),
                format_money(stat.total, c),
                stat.entries.to_string(),
                format_money(stat.average, c),
            ]);
        }
        print!("{}", table.render());
    }

    if !report.daily.is_empty() {
        println!("\nDaily series:");
        let mut table = Table::new(vec!["date", "earnings", "fuel", "trips"]);
        for point in &report.daily {
            table.add_row(vec![
                point.date.format("%Y-%m-%d").to_string(),
                format_money(point.earnings, c),
                format_money(point.fuel, c),
                point.trips.to_string(),
            ]);
        }
        print!("{}", table.render());
    }
}
