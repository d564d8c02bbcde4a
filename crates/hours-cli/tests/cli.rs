use assert_cmd::Command;
use predicates::prelude::*;

const WEEK_JSON: &str = r#"[
    "Monday: 9:00 AM – 5:00 PM",
    "Tuesday: 11:00 AM – 3:00 PM, 5:00 – 10:00 PM",
    "Wednesday: Closed",
    "Saturday: Open 24 hours"
]"#;

const WEEK_LINES: &str = "Monday: 9:00 AM – 5:00 PM\nTuesday: 11:00 AM – 3:00 PM, 5:00 – 10:00 PM\n";

fn hours() -> Command {
    Command::cargo_bin("hours").unwrap()
}

#[test]
fn test_format() {
    hours()
        .args(["format", "1020"])
        .assert()
        .success()
        .stdout("5:00 PM\n");
    hours()
        .args(["format", "0"])
        .assert()
        .success()
        .stdout("12:00 AM\n");
}

#[test]
fn test_status_closing_soon_json() {
    let output = hours()
        .args(["status", "--at", "2026-10-19T16:30"])
        .write_stdin(WEEK_JSON)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["isOpen"], true);
    assert_eq!(json["isClosingSoon"], true);
    assert_eq!(json["status"], "closing-soon");
    assert_eq!(json["minutesUntilClose"], 30);
    assert_eq!(json["closesAt"], "5:00 PM");
    assert_eq!(json["todayHours"], "9:00 AM – 5:00 PM");
}

#[test]
fn test_status_summary_from_lines() {
    hours()
        .args(["status", "--summary", "--at", "2026-10-20T16:00"])
        .write_stdin(WEEK_LINES)
        .assert()
        .success()
        .stdout("Closed · Opens today at 5:00 PM\n");
}

#[test]
fn test_status_with_timezone() {
    // 20:30 UTC is 16:30 in New York (EDT) on Monday 2026-10-19
    hours()
        .args([
            "status",
            "--summary",
            "--at",
            "2026-10-19T20:30:00Z",
            "--timezone",
            "America/New_York",
        ])
        .write_stdin(WEEK_JSON)
        .assert()
        .success()
        .stdout("Closes soon · 5:00 PM (30 min)\n");
}

#[test]
fn test_status_custom_closing_soon_window() {
    hours()
        .args(["status", "--summary", "--closing-soon", "10", "--at", "2026-10-19T16:30"])
        .write_stdin(WEEK_JSON)
        .assert()
        .success()
        .stdout("Open · Closes 5:00 PM\n");
}

#[test]
fn test_status_unknown_day() {
    hours()
        .args(["status", "--summary", "--at", "2026-10-21T12:00"])
        .write_stdin(WEEK_JSON)
        .assert()
        .success()
        .stdout("Hours unknown\n");
}

#[test]
fn test_status_reads_file() {
    let path = std::env::temp_dir().join(format!("hours-cli-test-{}.json", std::process::id()));
    std::fs::write(&path, WEEK_JSON).unwrap();

    hours()
        .args(["status", "--summary", "--at", "2026-10-24T03:00"])
        .arg(&path)
        .assert()
        .success()
        .stdout("Open 24 hours\n");

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_next() {
    hours()
        .args(["next", "--at", "2026-10-19T18:00"])
        .write_stdin(WEEK_JSON)
        .assert()
        .success()
        .stdout("tomorrow at 11:00 AM\n");
}

#[test]
fn test_next_none() {
    hours()
        .args(["next", "--at", "2026-10-19T18:00"])
        .write_stdin(r#"["Monday: Closed"]"#)
        .assert()
        .success()
        .stdout("none\n");
}

#[test]
fn test_week_listing() {
    hours()
        .args(["week"])
        .write_stdin(WEEK_JSON)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Monday: 9:00 AM \u{2013} 5:00 PM\n\
             Tuesday: 11:00 AM \u{2013} 3:00 PM, 5:00 PM \u{2013} 10:00 PM\n\
             Wednesday: Closed\n\
             Thursday: Unknown\n",
        ))
        .stdout(predicate::str::ends_with(
            "Saturday: Open 24 hours\nSunday: Unknown\n",
        ));
}

#[test]
fn test_week_sunday_first() {
    hours()
        .args(["week", "--week-start", "sunday", "-"])
        .write_stdin(WEEK_JSON)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Sunday: Unknown\nMonday: "));
}

#[test]
fn test_invalid_timezone_fails() {
    hours()
        .args(["status", "--at", "2026-10-19T16:30", "--timezone", "Mars/Olympus"])
        .write_stdin(WEEK_JSON)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timezone"));
}

#[test]
fn test_invalid_datetime_fails() {
    hours()
        .args(["status", "--at", "tomorrow"])
        .write_stdin(WEEK_JSON)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid datetime"));
}

#[test]
fn test_bad_json_fails() {
    hours()
        .args(["status", "--at", "2026-10-19T16:30"])
        .write_stdin("[not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON array"));
}

#[test]
fn test_missing_file_fails() {
    hours()
        .args(["week", "/nonexistent/hours.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
