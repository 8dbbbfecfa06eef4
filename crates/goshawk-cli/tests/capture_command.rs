use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_goshawk_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("goshawk")
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
url = "https://example.com"
"#;

#[test]
fn test_capture_command_help() {
    let mut cmd = Command::new(get_goshawk_bin());
    cmd.arg("capture").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("full-page screenshot"))
        .stdout(predicate::str::contains("--url"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--webdriver-url"));
}

#[test]
fn test_capture_fails_without_a_webdriver_endpoint() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, SAMPLE_CONFIG);

    // Port 9 (discard) has no WebDriver server; launch must fail and
    // surface as a Driver-Launch error rather than hanging or retrying.
    let mut cmd = Command::new(get_goshawk_bin());
    cmd.arg("capture")
        .arg("--config")
        .arg(&config)
        .arg("--webdriver-url")
        .arg("http://127.0.0.1:9");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to launch chrome session"));
}

#[test]
fn test_capture_rejects_unsupported_browser() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, SAMPLE_CONFIG);

    let mut cmd = Command::new(get_goshawk_bin());
    cmd.arg("capture")
        .arg("--config")
        .arg(&config)
        .arg("--browser")
        .arg("safari");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported browser 'safari'"));
}
