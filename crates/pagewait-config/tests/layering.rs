//! Environment variables override the file, which overrides defaults.

use pagewait_config::{load_file, ConfigDiscovery};
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

fn set(key: &str, value: &str) {
    unsafe {
        std::env::set_var(key, value);
    }
}

fn unset(key: &str) {
    unsafe {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pagewait.toml");
    fs::write(
        &path,
        "url = \"blank.html\"\n[settings]\npoll_interval_ms = 50\ndefault_timeout = 10\n",
    )
    .unwrap();

    set("PAGEWAIT_SETTINGS__POLL_INTERVAL_MS", "25");
    let config = load_file(&path);
    unset("PAGEWAIT_SETTINGS__POLL_INTERVAL_MS");

    let config = config.unwrap();
    assert_eq!(config.settings.poll_interval_ms, 25);
    assert_eq!(config.settings.default_timeout, 10.0);
    assert_eq!(config.url.as_deref(), Some("blank.html"));
}

#[test]
#[serial]
fn env_applies_without_file() {
    let dir = TempDir::new().unwrap();

    set("PAGEWAIT_URL", "about:blank");
    let config = ConfigDiscovery::new(dir.path()).load_or_default();
    unset("PAGEWAIT_URL");

    assert_eq!(config.unwrap().url.as_deref(), Some("about:blank"));
}

#[test]
#[serial]
fn file_overrides_defaults_only_where_set() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pagewait.toml");
    fs::write(&path, "[browser]\nchrome_path = \"/usr/bin/chromium\"\n").unwrap();

    let config = load_file(&path).unwrap();
    assert_eq!(config.browser.chrome_path.as_deref(), Some("/usr/bin/chromium"));
    assert!(config.browser.headless);
    assert_eq!(config.browser.window_size, (1920, 1080));
    assert_eq!(config.settings.default_timeout, 60.0);
}
