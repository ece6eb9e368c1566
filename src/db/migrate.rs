use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the work-day tables: one row per day plus child rows for the
/// per-category earnings and per-fuel-type expenses.
fn create_work_day_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS work_days (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            date       TEXT NOT NULL UNIQUE,
            km         REAL NOT NULL DEFAULT 0,
            hours      REAL NOT NULL DEFAULT 0,
            trips      INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS work_day_earnings (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            work_day_id INTEGER NOT NULL REFERENCES work_days(id) ON DELETE CASCADE,
            category    TEXT NOT NULL,
            amount      REAL NOT NULL
        );

        CREATE TABLE IF NOT EXISTS work_day_fuel (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            work_day_id INTEGER NOT NULL REFERENCES work_days(id) ON DELETE CASCADE,
            fuel_type   TEXT NOT NULL,
            amount      REAL NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_work_days_date ON work_days(date);
        CREATE INDEX IF NOT EXISTS idx_earnings_day ON work_day_earnings(work_day_id);
        CREATE INDEX IF NOT EXISTS idx_fuel_day ON work_day_fuel(work_day_id);
        "#,
    )?;
    Ok(())
}

fn create_maintenance_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS maintenance (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            date          TEXT NOT NULL,
            description   TEXT NOT NULL,
            cost          REAL NOT NULL DEFAULT 0,
            km_at_service REAL,
            reminder_km   REAL,
            reminder_date TEXT,
            created_at    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_maintenance_date ON maintenance(date);
        "#,
    )?;
    Ok(())
}

/// Databases created before 0.3 lack the `trips` column.
fn migrate_add_trips_to_work_days(conn: &Connection) -> Result<()> {
    if !table_exists(conn, "work_days")? {
        return Ok(());
    }

    if table_has_column(conn, "work_days", "trips")? {
        return Ok(());
    }

    warning("Adding 'trips' column to work_days table...");

    conn.execute_batch(
        "ALTER TABLE work_days ADD COLUMN trips INTEGER NOT NULL DEFAULT 0;",
    )?;
    Ok(())
}

/// Run all schema migrations. Every step is idempotent, so this is safe
/// to call on every startup path that touches the database.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    conn.execute_batch("PRAGMA foreign_keys=ON;")
        .map_err(|e| AppError::Migration(e.to_string()))?;

    ensure_log_table(conn).map_err(|e| AppError::Migration(e.to_string()))?;

    migrate_add_trips_to_work_days(conn).map_err(|e| AppError::Migration(e.to_string()))?;

    create_work_day_tables(conn).map_err(|e| AppError::Migration(e.to_string()))?;
    create_maintenance_table(conn).map_err(|e| AppError::Migration(e.to_string()))?;

    Ok(())
}
