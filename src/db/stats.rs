use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    let days: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM work_days", [], |row| row.get(0))?;
    let maint: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM maintenance", [], |row| row.get(0))?;

    println!("{}• Work days:{} {}{}{}", CYAN, RESET, GREEN, days, RESET);
    println!(
        "{}• Maintenance records:{} {}{}{}",
        CYAN, RESET, GREEN, maint, RESET
    );

    //
    // 3) DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM work_days ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM work_days ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    Ok(())
}

/// Run SQLite's integrity check, returning the status string ("ok" when
/// the database is healthy).
pub fn check_integrity(pool: &mut DbPool) -> rusqlite::Result<String> {
    pool.conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))
}

pub fn vacuum(pool: &mut DbPool) -> rusqlite::Result<()> {
    pool.conn.execute_batch("VACUUM;")
}
