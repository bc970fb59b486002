use assert_cmd::Command;
use predicates::prelude::*;

fn weekwise() -> Command {
    let mut cmd = Command::cargo_bin("weekwise").unwrap();
    cmd.env_remove("WEEKWISE_LOCALE")
        .env_remove("WEEKWISE_TIMEZONE")
        .env_remove("RUST_LOG");
    cmd
}

// ── date ────────────────────────────────────────────────────────────────────

#[test]
fn test_date_default_locale_is_zh_cn() {
    weekwise()
        .args(["date", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024年1月1日"))
        .stdout(predicate::str::contains("星期一"))
        .stdout(predicate::str::contains("Week 01 · ISO-8601"));
}

#[test]
fn test_date_en_us_previous_year_week() {
    weekwise()
        .args(["--locale", "en-US", "date", "2023-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("January 1, 2023 Sunday"))
        .stdout(predicate::str::contains("Week 52"));
}

#[test]
fn test_date_us_standard() {
    weekwise()
        .args(["date", "2023-01-01", "--standard", "us"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Week 01 · US (Sunday Start)"));
}

#[test]
fn test_date_locale_from_env() {
    weekwise()
        .env("WEEKWISE_LOCALE", "en_GB.UTF-8")
        .args(["date", "2020-12-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("31 December 2020"))
        .stdout(predicate::str::contains("Week 53"));
}

#[test]
fn test_date_json() {
    let output = weekwise()
        .args(["--json", "date", "2019-12-30"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["data"]["week_number"], 1);
    assert_eq!(v["data"]["year"], 2019);
    assert_eq!(v["mode"]["kind"], "static");
}

#[test]
fn test_date_invalid_input_renders_invalid_card() {
    weekwise()
        .args(["date", "2024-02-30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid date"))
        .stdout(predicate::str::contains("Week --"));
}

#[test]
fn test_date_empty_input_json() {
    let output = weekwise().args(["--json", "date", ""]).output().unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(v["data"].is_null());
}

// ── configuration errors ────────────────────────────────────────────────────

#[test]
fn test_unknown_locale_fails() {
    weekwise()
        .args(["--locale", "xx-YY", "date", "2024-01-01"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid locale"));
}

#[test]
fn test_unknown_timezone_fails() {
    weekwise()
        .args(["--timezone", "Mars/Olympus_Mons", "now"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid timezone"));
}

// ── now / timezone ──────────────────────────────────────────────────────────

#[test]
fn test_now_with_timezone() {
    weekwise()
        .args(["--timezone", "UTC", "now"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current moment [live]"))
        .stdout(predicate::str::contains("UTC"));
}

#[test]
fn test_now_watch_stops_after_ticks() {
    let output = weekwise()
        .args(["--json", "--timezone", "UTC", "now", "--watch"])
        .args(["--interval", "1", "--ticks", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn test_now_watch_rejects_zero_interval() {
    weekwise()
        .args(["--timezone", "UTC", "now", "--watch", "--interval", "0"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--interval"));
}

#[test]
fn test_timezone_override() {
    weekwise()
        .args(["timezone", "--timezone", "Asia/Shanghai"])
        .assert()
        .success()
        .stdout("Asia/Shanghai\n");
}

#[test]
fn test_timezone_detected_is_not_empty() {
    weekwise()
        .arg("timezone")
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}
