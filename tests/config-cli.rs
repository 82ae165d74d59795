use assert_cmd::{Command, assert::Assert};
use predicates::prelude::*;
use serde_json::Value;

use pestiborso::constants::envvars;

fn pestiborso(args: &[&str], envs: &[(&str, &str)]) -> Assert {
    // Run away from the crate root so no stray .env is picked up
    let work_dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("pestiborso").unwrap();
    cmd.current_dir(work_dir.path()).env_remove(envvars::CONFIG_DIR);
    for var in envvars::ALL {
        cmd.env_remove(var);
    }
    cmd.envs(envs.iter().copied())
        .args(args)
        .assert()
}

fn show_json(args: &[&str]) -> Value {
    let output = pestiborso(args, &[]).success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn get_default_values() {
    pestiborso(&["config-get", "user_agent"], &[])
        .success()
        .stdout("pestiborso sensor");
    pestiborso(&["config-get", "update_interval_ms"], &[])
        .success()
        .stdout("10000");
    pestiborso(&["config-get", "primary_path"], &[])
        .success()
        .stdout("/v2/feeds/yourfeedid.csv");
}

#[test]
fn get_overridden_value() {
    pestiborso(
        &["config-get", "primary_host"],
        &[("PESTIBORSO_PRIMARY_HOST", "api.xively.com")],
    )
    .success()
    .stdout("api.xively.com");
}

#[test]
fn get_unknown_key_fails() {
    pestiborso(&["config-get", "nope"], &[])
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Error: Unknown config key 'nope'"));
}

#[test]
fn show_redacts_secrets() {
    let config = show_json(&["config-show"]);
    assert_eq!(config["primary"]["api_key"], "********");
    assert_eq!(config["secondary"]["api_key"], "********");
    assert_eq!(config["network"]["password"], "********");
    assert_eq!(config["network"]["ssid"], "ssid");
    assert_eq!(config["pins"]["light"], 0);
}

#[test]
fn show_reveal() {
    let config = show_json(&["config-show", "--reveal"]);
    assert_eq!(config["primary"]["api_key"], "yourapikey");
    assert_eq!(config["network"]["password"], "pass1234");
}

#[test]
fn check_default_config() {
    pestiborso(&["config-check"], &[])
        .success()
        .stderr(predicate::str::contains("Configuration OK"));
}

#[test]
fn check_pin_conflict_fails() {
    pestiborso(&["config-check"], &[("PESTIBORSO_LIGHT_PIN", "1")])
        .failure()
        .stderr(predicate::str::contains("both assigned to pin 1"));
}

#[test]
fn check_host_with_query_fails() {
    pestiborso(&["config-check"], &[("PESTIBORSO_SECONDARY_HOST", "yourserverhost?x=")])
        .failure()
        .stderr(predicate::str::contains("'secondary_host' is not a plain host name"));
}

#[test]
fn check_bad_interval_fails() {
    pestiborso(&["config-check"], &[("PESTIBORSO_UPDATE_INTERVAL_MS", "soon")])
        .failure()
        .stderr(predicate::str::contains("PESTIBORSO_UPDATE_INTERVAL_MS='soon'"));
}

#[test]
fn dotenv_from_config_dir() {
    let tempdir = tempfile::tempdir().unwrap();
    std::fs::write(tempdir.path().join(".env"), "PESTIBORSO_SECONDARY_PATH=/relay/\n").unwrap();

    pestiborso(
        &["config-get", "secondary_path"],
        &[("PESTIBORSO_CONFIG_DIR", tempdir.path().to_str().unwrap())],
    )
    .success()
    .stdout("/relay/");
}

#[test]
fn unknown_subcommand_fails() {
    pestiborso(&["upload"], &[])
        .failure()
        .stderr(predicate::str::contains("Subcommand must be one of"));
}
