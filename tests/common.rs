#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dlg() -> Command {
    cargo_bin_cmd!("drivelog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_drivelog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables)
    dlg()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    dlg()
        .args([
            "--db",
            db_path,
            "day",
            "add",
            "2025-06-05",
            "--km",
            "10000",
            "--hours",
            "8",
            "--trips",
            "12",
            "--earn",
            "rides=120.50",
            "--earn",
            "tips=9.50",
            "--fuel",
            "petrol=30.00",
        ])
        .assert()
        .success();

    dlg()
        .args([
            "--db",
            db_path,
            "day",
            "add",
            "2025-06-20",
            "--km",
            "10400",
            "--hours",
            "6",
            "--trips",
            "8",
            "--earn",
            "rides=80.00",
            "--fuel",
            "petrol=15.00",
        ])
        .assert()
        .success();
}
