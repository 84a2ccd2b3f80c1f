#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const USER: &str = "tester";
pub const PASSWORD: &str = "s3cret";

pub fn bb() -> Command {
    let mut cmd = cargo_bin_cmd!("brandboard");
    cmd.env_remove("BRANDBOARD_USER")
        .env_remove("BRANDBOARD_PASSWORD");
    cmd
}

/// Fresh per-test directory inside the system temp dir
pub fn test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("brandboard_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Write a chat export named `<label>.txt` into `dir`
pub fn write_chat(dir: &Path, label: &str, content: &str) -> String {
    let path = dir.join(format!("{label}.txt"));
    fs::write(&path, content).expect("write chat file");
    path.to_string_lossy().to_string()
}

pub const SHEET_CSV: &str = "\
Platform,Brand,Tier,Category,Manager
Instagram ,Acme,Gold,Food,Maria
instagram,Zephyr,Silver,Fashion,Luca
TikTok,Acme,Bronze,Food,Sara
,Orphan,,,
";

/// Write the sample sheet and a config pointing at it; returns the config path
pub fn write_config(dir: &Path) -> String {
    let sheet = dir.join("sheet.csv");
    fs::write(&sheet, SHEET_CSV).expect("write sheet");

    let conf = dir.join("brandboard.conf");
    let yaml = format!(
        "sheet_source: {}\nusername: {USER}\npassword: {PASSWORD}\nseparator_char: \"-\"\nshow_notes: true\n",
        sheet.display()
    );
    fs::write(&conf, yaml).expect("write config");
    conf.to_string_lossy().to_string()
}

/// Command with --config and valid credentials already set
pub fn bb_logged_in(conf: &str) -> Command {
    let mut cmd = bb();
    cmd.args(["--config", conf, "--user", USER, "--password", PASSWORD]);
    cmd
}
