use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{MaintenanceRecord, WorkDay};
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, Row, params};
use std::collections::BTreeMap;

fn parse_db_date(raw: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(raw.to_string())),
        )
    })
}

fn map_day_row(row: &Row) -> rusqlite::Result<WorkDay> {
    let date_str: String = row.get("date")?;
    let date = parse_db_date(&date_str)?;

    Ok(WorkDay {
        id: row.get("id")?,
        date,
        km: row.get("km")?,
        hours_worked: row.get("hours")?,
        trips: row.get::<_, i64>("trips")? as u32,
        earnings: BTreeMap::new(),
        fuel_expenses: BTreeMap::new(),
    })
}

fn map_maintenance_row(row: &Row) -> rusqlite::Result<MaintenanceRecord> {
    let date_str: String = row.get("date")?;
    let date = parse_db_date(&date_str)?;

    let reminder_date = match row.get::<_, Option<String>>("reminder_date")? {
        Some(raw) => Some(parse_db_date(&raw)?),
        None => None,
    };

    Ok(MaintenanceRecord {
        id: row.get("id")?,
        description: row.get("description")?,
        date,
        cost: row.get("cost")?,
        km_at_service: row.get("km_at_service")?,
        reminder_km: row.get("reminder_km")?,
        reminder_date,
    })
}

/// Load work days, optionally restricted to inclusive date bounds,
/// with their earning and fuel child rows attached.
pub fn load_work_days(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<WorkDay>> {
    let mut days: Vec<WorkDay> = {
        let (sql, params_vec): (&str, Vec<String>) = match bounds {
            Some((start, end)) => (
                "SELECT * FROM work_days WHERE date >= ?1 AND date <= ?2 ORDER BY date ASC",
                vec![
                    start.format("%Y-%m-%d").to_string(),
                    end.format("%Y-%m-%d").to_string(),
                ],
            ),
            None => ("SELECT * FROM work_days ORDER BY date ASC", Vec::new()),
        };

        let mut stmt = pool.conn.prepare(sql)?;
        let rows = stmt.query_map(rusqlite::params_from_iter(params_vec), map_day_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        out
    };

    attach_entries(&pool.conn, &mut days, "work_day_earnings", "category", true)?;
    attach_entries(&pool.conn, &mut days, "work_day_fuel", "fuel_type", false)?;

    Ok(days)
}

/// Fill the earnings or fuel map of each loaded day from a child table.
fn attach_entries(
    conn: &Connection,
    days: &mut [WorkDay],
    table: &str,
    name_col: &str,
    is_earnings: bool,
) -> AppResult<()> {
    if days.is_empty() {
        return Ok(());
    }

    let mut stmt = conn.prepare(&format!(
        "SELECT work_day_id, {name_col}, amount FROM {table}"
    ))?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, f64>(2)?,
        ))
    })?;

    let mut by_day: BTreeMap<i64, Vec<(String, f64)>> = BTreeMap::new();
    for r in rows {
        let (day_id, name, amount) = r?;
        by_day.entry(day_id).or_default().push((name, amount));
    }

    for day in days.iter_mut() {
        if let Some(entries) = by_day.remove(&day.id) {
            let map = if is_earnings {
                &mut day.earnings
            } else {
                &mut day.fuel_expenses
            };
            for (name, amount) in entries {
                *map.entry(name).or_insert(0.0) += amount;
            }
        }
    }

    Ok(())
}

/// Insert one work day with its category rows, in a single transaction.
/// Fails with [`AppError::DuplicateDay`] when the date is already logged.
pub fn insert_work_day(conn: &mut Connection, day: &WorkDay) -> AppResult<i64> {
    let date_str = day.date_str();

    let exists: bool = {
        let mut stmt = conn.prepare("SELECT 1 FROM work_days WHERE date = ?1 LIMIT 1")?;
        stmt.exists([&date_str])?
    };
    if exists {
        return Err(AppError::DuplicateDay(date_str));
    }

    let tx = conn.transaction()?;

    tx.execute(
        "INSERT INTO work_days (date, km, hours, trips, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            date_str,
            day.km,
            day.hours_worked,
            day.trips as i64,
            Local::now().to_rfc3339(),
        ],
    )?;
    let day_id = tx.last_insert_rowid();

    for (category, amount) in &day.earnings {
        tx.execute(
            "INSERT INTO work_day_earnings (work_day_id, category, amount)
             VALUES (?1, ?2, ?3)",
            params![day_id, category, amount],
        )?;
    }

    for (fuel_type, amount) in &day.fuel_expenses {
        tx.execute(
            "INSERT INTO work_day_fuel (work_day_id, fuel_type, amount)
             VALUES (?1, ?2, ?3)",
            params![day_id, fuel_type, amount],
        )?;
    }

    tx.commit()?;
    Ok(day_id)
}

pub fn delete_work_day(conn: &mut Connection, id: i64) -> AppResult<()> {
    let tx = conn.transaction()?;

    tx.execute("DELETE FROM work_day_earnings WHERE work_day_id = ?1", [id])?;
    tx.execute("DELETE FROM work_day_fuel WHERE work_day_id = ?1", [id])?;
    let deleted = tx.execute("DELETE FROM work_days WHERE id = ?1", [id])?;

    if deleted == 0 {
        return Err(AppError::RecordNotFound(id));
    }

    tx.commit()?;
    Ok(())
}

pub fn load_maintenance(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<MaintenanceRecord>> {
    let (sql, params_vec): (&str, Vec<String>) = match bounds {
        Some((start, end)) => (
            "SELECT * FROM maintenance WHERE date >= ?1 AND date <= ?2 ORDER BY date ASC",
            vec![
                start.format("%Y-%m-%d").to_string(),
                end.format("%Y-%m-%d").to_string(),
            ],
        ),
        None => ("SELECT * FROM maintenance ORDER BY date ASC", Vec::new()),
    };

    let mut stmt = pool.conn.prepare(sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(params_vec), map_maintenance_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_maintenance(conn: &Connection, rec: &MaintenanceRecord) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO maintenance
            (date, description, cost, km_at_service, reminder_km, reminder_date, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            rec.date.format("%Y-%m-%d").to_string(),
            rec.description,
            rec.cost,
            rec.km_at_service,
            rec.reminder_km,
            rec.reminder_date.map(|d| d.format("%Y-%m-%d").to_string()),
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_maintenance(conn: &Connection, id: i64) -> AppResult<()> {
    let deleted = conn.execute("DELETE FROM maintenance WHERE id = ?1", [id])?;
    if deleted == 0 {
        return Err(AppError::RecordNotFound(id));
    }
    Ok(())
}

/// Highest odometer reading stored so far (0 when no days are logged).
/// Used for the non-monotonic odometer warning on `day add`.
pub fn max_recorded_km(pool: &mut DbPool) -> AppResult<f64> {
    let max: Option<f64> = pool
        .conn
        .query_row("SELECT MAX(km) FROM work_days", [], |row| row.get(0))?;
    Ok(max.unwrap_or(0.0))
}
