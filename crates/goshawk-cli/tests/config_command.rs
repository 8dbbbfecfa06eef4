use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_goshawk_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("goshawk")
}

const GOSHAWK_ENV_VARS: [&str; 9] = [
    "GOSHAWK_BROWSER",
    "GOSHAWK_HEADLESS",
    "GOSHAWK_MAXIMIZED",
    "GOSHAWK_FULLSCREEN",
    "GOSHAWK_URL",
    "GOSHAWK_AUTO_NAVIGATE",
    "GOSHAWK_WEBDRIVER",
    "GOSHAWK_SCREENSHOT_DIR",
    "GOSHAWK_REPORT_DIR",
];

// A command isolated from whatever GOSHAWK_* vars the outer environment has.
fn goshawk_cmd() -> Command {
    let mut cmd = Command::new(get_goshawk_bin());
    for var in GOSHAWK_ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

fn write_config(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("goshawk.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

const SAMPLE_CONFIG: &str = r#"
["basic info"]
browser = "chrome"
headless = "true"
url = "https://example.com/login"
"#;

#[test]
fn test_config_command_help() {
    let mut cmd = goshawk_cmd();
    cmd.arg("config").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("resolved harness configuration"))
        .stdout(predicate::str::contains("--browser"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_config_resolves_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, SAMPLE_CONFIG);

    let mut cmd = goshawk_cmd();
    cmd.arg("config").arg("--config").arg(&config);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("chrome"))
        .stdout(predicate::str::contains("https://example.com/login"))
        .stdout(predicate::str::contains("headless"))
        .stdout(predicate::str::contains("auto navigate"));
}

#[test]
fn test_config_json_format() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, SAMPLE_CONFIG);

    let mut cmd = goshawk_cmd();
    cmd.arg("config")
        .arg("--config")
        .arg(&config)
        .arg("--format")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"browser\": \"chrome\""))
        .stdout(predicate::str::contains("\"base_url\": \"https://example.com/login\""));
}

#[test]
fn test_env_var_overrides_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, SAMPLE_CONFIG);

    let mut cmd = goshawk_cmd();
    cmd.arg("config")
        .arg("--config")
        .arg(&config)
        .env("GOSHAWK_BROWSER", "firefox");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("firefox"));
}

#[test]
fn test_browser_flag_beats_env_and_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, SAMPLE_CONFIG);

    let mut cmd = goshawk_cmd();
    cmd.arg("config")
        .arg("--config")
        .arg(&config)
        .arg("--browser")
        .arg("edge")
        .env("GOSHAWK_BROWSER", "firefox");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("edge"));
}

#[test]
fn test_unsupported_browser_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(
        &dir,
        "[\"basic info\"]\nbrowser = \"safari\"\nurl = \"https://example.com\"\n",
    );

    let mut cmd = goshawk_cmd();
    cmd.arg("config").arg("--config").arg(&config);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported browser 'safari'"));
}

#[test]
fn test_missing_url_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, "[\"basic info\"]\nbrowser = \"chrome\"\n");

    let mut cmd = goshawk_cmd();
    cmd.arg("config").arg("--config").arg(&config);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("[basic info] url"));
}
