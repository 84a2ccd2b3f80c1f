use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{bb, bb_logged_in, test_dir, write_chat, write_config};

const BRAND_X_CHAT: &str = "\
3/5/24, 8:45 - Alice: Good morning
3/5/24, 14:00 - Bob: lunch check-in
3/5/24, 18:30 - Alice: daily task done
not a chat line
3/6/24, 12:00 - Alice: next day
";

#[test]
fn test_report_marks_slots_for_brand_and_date() {
    let dir = test_dir("report_slots");
    let conf = write_config(&dir);
    let chat = write_chat(&dir, "BrandX", BRAND_X_CHAT);

    let output = bb_logged_in(&conf)
        .args(["report", &chat, "--brand", "BrandX", "--date", "2024-03-05"])
        .output()
        .expect("run report");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Message Status for BrandX on 2024-03-05"));

    let line_for = |slot: &str| {
        stdout
            .lines()
            .find(|l| l.contains(slot))
            .unwrap_or_else(|| panic!("missing row {slot}"))
            .to_string()
    };
    assert!(line_for("Morning (8:30 - 10:00)").contains("✔️"));
    assert!(line_for("Midday (12:00 - 1:30)").contains("❌"));
    assert!(line_for("Afternoon (3:00 - 4:30)").contains("❌"));
    assert!(line_for("Daily Task (5:30 - 7:00)").contains("✔️"));
}

#[test]
fn test_report_without_brand_covers_every_file() {
    let dir = test_dir("report_all_brands");
    let conf = write_config(&dir);
    let a = write_chat(&dir, "Alpha", "3/5/24, 9:00 - A: hi\n");
    let b = write_chat(&dir, "Beta", "3/5/24, 15:00 - B: hi\n");

    bb_logged_in(&conf)
        .args(["report", &a, &b, "--date", "2024-03-05"])
        .assert()
        .success()
        .stdout(contains("Message Status for Alpha on 2024-03-05"))
        .stdout(contains("Message Status for Beta on 2024-03-05"));
}

#[test]
fn test_report_invalid_date_is_all_absent() {
    let dir = test_dir("report_bad_date");
    let conf = write_config(&dir);
    let chat = write_chat(&dir, "BrandX", BRAND_X_CHAT);

    bb_logged_in(&conf)
        .args(["report", &chat, "--brand", "BrandX", "--date", "yesterday"])
        .assert()
        .success()
        .stdout(contains("Invalid date 'yesterday'"))
        .stdout(contains("✔️").not());
}

#[test]
fn test_report_unknown_brand_warns() {
    let dir = test_dir("report_unknown_brand");
    let conf = write_config(&dir);
    let chat = write_chat(&dir, "BrandX", BRAND_X_CHAT);

    bb_logged_in(&conf)
        .args(["report", &chat, "--brand", "Nobody", "--date", "2024-03-05"])
        .assert()
        .success()
        .stdout(contains("No chat messages for brand 'Nobody'"))
        .stdout(contains("✔️").not());
}

#[test]
fn test_report_requires_login() {
    let dir = test_dir("report_login");
    let conf = write_config(&dir);
    let chat = write_chat(&dir, "BrandX", BRAND_X_CHAT);

    bb().args(["--config", &conf, "report", &chat])
        .assert()
        .failure()
        .stderr(contains("Login required"));

    bb().args([
        "--config", &conf, "--user", "tester", "--password", "wrong", "report", &chat,
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid username or password"));
}

#[test]
fn test_credentials_from_environment() {
    let dir = test_dir("report_env_login");
    let conf = write_config(&dir);
    let chat = write_chat(&dir, "BrandX", BRAND_X_CHAT);

    bb().env("BRANDBOARD_USER", common::USER)
        .env("BRANDBOARD_PASSWORD", common::PASSWORD)
        .args(["--config", &conf, "report", &chat, "--date", "2024-03-05"])
        .assert()
        .success()
        .stdout(contains("Message Status for BrandX"));
}

#[test]
fn test_missing_chat_file_fails() {
    let dir = test_dir("report_missing_file");
    let conf = write_config(&dir);
    let missing = dir.join("Ghost.txt").to_string_lossy().to_string();

    bb_logged_in(&conf)
        .args(["report", &missing])
        .assert()
        .failure()
        .stderr(contains("Failed to read chat file"));
}

#[test]
fn test_chats_lists_parsed_messages() {
    let dir = test_dir("chats_list");
    let conf = write_config(&dir);
    let chat = write_chat(
        &dir,
        "BrandX",
        "3/5/24, 8:45 - Alice: Good morning\n3/5/2024, 14:00 - Bob: four digit year\n",
    );

    bb_logged_in(&conf)
        .args(["chats", &chat])
        .assert()
        .success()
        .stdout(contains("2024-03-05 08:45"))
        .stdout(contains("Alice"))
        .stdout(contains("Bob"))
        .stdout(contains("left out of reports"))
        .stdout(contains("no AM/PM"));
}

#[test]
fn test_brands_drill_down() {
    let dir = test_dir("brands_drill");
    let conf = write_config(&dir);

    bb_logged_in(&conf)
        .args(["brands"])
        .assert()
        .success()
        .stdout(contains("instagram"))
        .stdout(contains("tiktok"))
        .stdout(contains("Please select a platform to continue."));

    bb_logged_in(&conf)
        .args(["brands", "--platform", "Instagram"])
        .assert()
        .success()
        .stdout(contains("Acme"))
        .stdout(contains("Zephyr"));

    bb_logged_in(&conf)
        .args(["brands", "--platform", "tiktok", "--brand", "Acme"])
        .assert()
        .success()
        .stdout(contains("Bronze"))
        .stdout(contains("Sara"));

    bb_logged_in(&conf)
        .args(["brands", "--platform", "youtube"])
        .assert()
        .success()
        .stdout(contains("No brands found for the selected platform."));

    bb_logged_in(&conf)
        .args(["brands", "--platform", "tiktok", "--brand", "Zephyr"])
        .assert()
        .success()
        .stdout(contains("No details found for the selected brand."));
}

#[test]
fn test_brands_unreadable_sheet_is_an_error() {
    let dir = test_dir("brands_no_sheet");
    let conf = write_config(&dir);
    let missing = dir.join("nope.csv").to_string_lossy().to_string();

    bb_logged_in(&conf)
        .args(["brands", "--sheet", &missing])
        .assert()
        .failure()
        .stderr(contains("Error:"));
}

#[test]
fn test_export_csv_and_json() {
    let dir = test_dir("export_formats");
    let conf = write_config(&dir);
    let chat = write_chat(&dir, "BrandX", BRAND_X_CHAT);

    let csv_out = dir.join("report.csv").to_string_lossy().to_string();
    bb_logged_in(&conf)
        .args([
            "export",
            &chat,
            "--brand",
            "BrandX",
            "--date",
            "2024-03-05",
            "--format",
            "csv",
            "--file",
            &csv_out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&csv_out).expect("read csv");
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("brand,date,time_slot,present,notes"));
    assert!(content.contains("BrandX,2024-03-05,Morning (8:30 - 10:00),true"));
    assert!(content.contains("Midday (12:00 - 1:30),false"));

    let json_out = dir.join("report.json").to_string_lossy().to_string();
    bb_logged_in(&conf)
        .args([
            "export",
            &chat,
            "-b",
            "BrandX",
            "-d",
            "2024-03-05",
            "--format",
            "json",
            "--file",
            &json_out,
        ])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).expect("read json")).expect("json");
    let rows = json.as_array().expect("array");
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[3]["time_slot"], "Daily Task (5:30 - 7:00)");
    assert_eq!(rows[3]["present"], true);
}

#[test]
fn test_export_rejects_relative_path() {
    let dir = test_dir("export_relative");
    let conf = write_config(&dir);
    let chat = write_chat(&dir, "BrandX", BRAND_X_CHAT);

    bb_logged_in(&conf)
        .args(["export", &chat, "--brand", "BrandX", "--file", "out.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_init_and_config_check() {
    let dir = test_dir("init_config");
    let conf = dir.join("fresh.conf");
    let conf_str = conf.to_string_lossy().to_string();

    bb().args(["--config", &conf_str, "--test", "init"])
        .assert()
        .success();
    assert!(conf.exists());

    bb().args(["--config", &conf_str, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration is complete"));

    fs::write(&conf, "username: someone\npassword: \"\"\n").unwrap();
    bb().args(["--config", &conf_str, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing or empty field: sheet_source"))
        .stdout(contains("Missing or empty field: password"));
}

#[test]
fn test_export_xlsx() {
    let dir = test_dir("export_xlsx");
    let conf = write_config(&dir);
    let chat = write_chat(&dir, "BrandX", BRAND_X_CHAT);
    let out = dir.join("report.xlsx").to_string_lossy().to_string();

    bb_logged_in(&conf)
        .args([
            "export", &chat, "--brand", "BrandX", "--date", "2024-03-05", "--format", "xlsx",
            "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let meta = fs::metadata(&out).expect("xlsx written");
    assert!(meta.len() > 0);

    // xlsx files are zip archives
    let bytes = fs::read(&out).expect("read xlsx");
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_report_with_no_messages_says_so() {
    let dir = test_dir("report_empty_files");
    let conf = write_config(&dir);
    let chat = write_chat(&dir, "Quiet", "not a chat line\n");

    bb_logged_in(&conf)
        .args(["report", &chat, "--date", "2024-03-05"])
        .assert()
        .success()
        .stdout(contains("No chat messages found."))
        .stdout(contains("Message Status").not());
}
