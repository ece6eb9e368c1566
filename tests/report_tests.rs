use predicates::str::contains;

mod common;
use common::{dlg, init_db_with_data, setup_test_db};

#[test]
fn test_report_for_specific_month() {
    let db_path = setup_test_db("report_month");
    init_db_with_data(&db_path);

    // outside the reported month
    dlg()
        .args([
            "--db", &db_path, "day", "add", "2025-07-01", "--km", "10500", "--earn",
            "rides=50",
        ])
        .assert()
        .success();

    dlg()
        .args([
            "--db", &db_path, "maint", "add", "2025-06-10", "oil change", "--cost", "60",
        ])
        .assert()
        .success();

    let out = dlg()
        .args(["--db", &db_path, "report", "--period", "2025-06"])
        .assert()
        .success()
        // 120.50 + 9.50 + 80.00
        .stdout(contains("Total earnings:    €210.00"))
        .stdout(contains("Total fuel:        €45.00"))
        .stdout(contains("Total maintenance: €60.00"))
        .stdout(contains("Net:               €105.00"))
        .stdout(contains("Days worked:       2"))
        .stdout(contains("Trips:             20"));

    let stdout = String::from_utf8_lossy(&out.get_output().stdout).to_string();
    assert!(!stdout.contains("2025-07-01"));
}

#[test]
fn test_report_category_breakdown() {
    let db_path = setup_test_db("report_categories");
    init_db_with_data(&db_path);

    dlg()
        .args(["--db", &db_path, "report", "--period", "2025-06"])
        .assert()
        .success()
        .stdout(contains("Earnings by category:"))
        // rides: 120.50 + 80.00 over two days
        .stdout(contains("rides"))
        .stdout(contains("€200.50"))
        .stdout(contains("€100.25"))
        // tips appear once, average = total
        .stdout(contains("tips"))
        .stdout(contains("€9.50"));
}

#[test]
fn test_report_all_time() {
    let db_path = setup_test_db("report_all");
    init_db_with_data(&db_path);

    dlg()
        .args(["--db", &db_path, "report", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("Report (all time)"))
        .stdout(contains("Days worked:       2"));
}

#[test]
fn test_report_empty_period_yields_zero_totals() {
    let db_path = setup_test_db("report_empty");
    init_db_with_data(&db_path);

    dlg()
        .args(["--db", &db_path, "report", "--period", "2020"])
        .assert()
        .success()
        .stdout(contains("Days worked:       0"))
        .stdout(contains("Total earnings:    €0.00"));
}

#[test]
fn test_report_defaults_to_today() {
    let db_path = setup_test_db("report_default_today");

    dlg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();

    dlg()
        .args(["--db", &db_path, "report"])
        .assert()
        .success()
        .stdout(contains(format!("Report for {today}")));
}

#[test]
fn test_report_custom_range() {
    let db_path = setup_test_db("report_custom_range");
    init_db_with_data(&db_path);

    dlg()
        .args([
            "--db",
            &db_path,
            "report",
            "--period",
            "2025-06-01:2025-06-10",
        ])
        .assert()
        .success()
        .stdout(contains("Report 2025-06-01 to 2025-06-10"))
        .stdout(contains("Days worked:       1"))
        .stdout(contains("Total earnings:    €130.00"));
}
