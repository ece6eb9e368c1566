use predicates::str::contains;
use std::fs;

mod common;
use common::{dlg, init_db_with_data, setup_test_db, temp_out};

#[test]
fn test_export_csv_all() {
    let db_path = setup_test_db("export_csv_all");
    init_db_with_data(&db_path);

    let out_file = temp_out("export_csv_all", "csv");

    dlg()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out_file,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out_file).expect("read exported csv");
    assert!(content.contains("id,date,km,hours_worked,trips"));
    assert!(content.contains("2025-06-05"));
    assert!(content.contains("rides=120.50;tips=9.50"));
}

#[test]
fn test_export_json_with_range() {
    let db_path = setup_test_db("export_json_range");
    init_db_with_data(&db_path);

    // outside the range
    dlg()
        .args([
            "--db", &db_path, "day", "add", "2024-12-31", "--km", "9000", "--earn",
            "rides=10",
        ])
        .assert()
        .success();

    let out_file = temp_out("export_json_range", "json");

    dlg()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out_file, "--range",
            "2025",
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out_file).expect("read exported json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = parsed.as_array().expect("array of rows");

    assert_eq!(rows.len(), 2);
    assert!(content.contains("2025-06-05"));
    assert!(!content.contains("2024-12-31"));
}

#[test]
fn test_export_refuses_relative_paths() {
    let db_path = setup_test_db("export_relative");
    init_db_with_data(&db_path);

    dlg()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("Export error:"))
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let db_path = setup_test_db("export_force");
    init_db_with_data(&db_path);

    let out_file = temp_out("export_force", "csv");
    fs::write(&out_file, "old content").unwrap();

    dlg()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out_file, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out_file).unwrap();
    assert!(!content.contains("old content"));
    assert!(content.contains("2025-06-05"));
}

#[test]
fn test_export_empty_range_warns() {
    let db_path = setup_test_db("export_empty_range");
    init_db_with_data(&db_path);

    let out_file = temp_out("export_empty_range", "csv");

    dlg()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out_file, "--range",
            "2019",
        ])
        .assert()
        .success()
        .stdout(contains("No work days found"));

    assert!(!std::path::Path::new(&out_file).exists());
}
