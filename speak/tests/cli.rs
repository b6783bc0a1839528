// Integration tests for speak CLI
//
// Every case here fails (or finishes) before any network request is made.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Command with HOME isolated and no credentials in the environment
fn speak_cmd(home: &TempDir) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("speak").into();
    cmd.env("HOME", home.path())
        .env_remove("OPENAI_API_KEY")
        .env_remove("ELEVENLABS_API_KEY")
        .env_remove("DEEPGRAM_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

fn write_config(home: &TempDir, content: &str) {
    let config_dir = home.path().join(".config").join("cli-programs");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("speak.toml"), content).unwrap();
}

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn test_help_lists_providers() {
    let home = TempDir::new().unwrap();
    speak_cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Convert text to speech"))
        .stdout(predicate::str::contains("OPENAI_API_KEY"))
        .stdout(predicate::str::contains("ELEVENLABS_API_KEY"))
        .stdout(predicate::str::contains("DEEPGRAM_API_KEY"))
        .stdout(predicate::str::contains("Speed adjustment not supported"));
}

#[test]
fn test_version_displays() {
    let home = TempDir::new().unwrap();
    speak_cmd(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("speak"));
}

#[test]
fn test_list_voices_needs_no_credentials() {
    let home = TempDir::new().unwrap();
    speak_cmd(&home)
        .args(["--list-voices", "-p", "deepgram"])
        .assert()
        .success()
        .stdout(predicate::str::contains("asteria"))
        .stdout(predicate::str::contains("aura-2-thalia-en"));
}

// ============================================================================
// Validation before any request
// ============================================================================

#[test]
fn test_invalid_provider() {
    let home = TempDir::new().unwrap();
    speak_cmd(&home)
        .args(["-p", "polly", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid provider 'polly'"));
}

#[test]
fn test_missing_key_names_env_var() {
    let home = TempDir::new().unwrap();
    speak_cmd(&home)
        .args(["-p", "elevenlabs", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ELEVENLABS_API_KEY"));
}

#[test]
fn test_empty_env_key_counts_as_missing() {
    let home = TempDir::new().unwrap();
    speak_cmd(&home)
        .env("OPENAI_API_KEY", "")
        .arg("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENAI_API_KEY environment variable not set"));
}

#[test]
fn test_speed_out_of_range() {
    let home = TempDir::new().unwrap();
    speak_cmd(&home)
        .args(["--token", "sk-test", "-x", "5", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Speed must be between 0.25 and 4.0 for OpenAI",
        ));
}

#[test]
fn test_negative_speed_is_parsed_and_rejected() {
    let home = TempDir::new().unwrap();
    speak_cmd(&home)
        .args(["--token", "sk-test", "--speed", "-1", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Speed must be between"));
}

#[test]
fn test_elevenlabs_stability_out_of_range() {
    let home = TempDir::new().unwrap();
    speak_cmd(&home)
        .args(["-p", "elevenlabs", "--token", "xi-test", "--stability", "1.5", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Stability must be between 0.0 and 1.0"));
}

#[test]
fn test_all_rejected_for_deepgram() {
    let home = TempDir::new().unwrap();
    speak_cmd(&home)
        .args(["-p", "deepgram", "--token", "dg-test", "--all", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "--all flag is only supported for the OpenAI provider",
        ));
}

#[test]
fn test_no_text_provided() {
    let home = TempDir::new().unwrap();
    speak_cmd(&home)
        .args(["--token", "sk-test"])
        .write_stdin("   \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No text provided"))
        .stderr(predicate::str::contains("speak --help"));
}

#[test]
fn test_piped_stdin_is_used_as_text() {
    let home = TempDir::new().unwrap();
    speak_cmd(&home)
        .args(["-v", "bogus", "--token", "sk-test"])
        .write_stdin("hi\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid OpenAI voice 'bogus'"))
        .stderr(predicate::str::contains("No text provided").not());
}

#[test]
fn test_invalid_openai_voice() {
    let home = TempDir::new().unwrap();
    speak_cmd(&home)
        .args(["-v", "rachel", "--token", "sk-test", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid OpenAI voice 'rachel'"))
        .stderr(predicate::str::contains("alloy, echo, fable, onyx, nova, shimmer"));
}

// ============================================================================
// Configuration file
// ============================================================================

#[test]
fn test_config_sets_default_provider() {
    let home = TempDir::new().unwrap();
    write_config(&home, "provider = \"deepgram\"\n");

    speak_cmd(&home)
        .arg("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DEEPGRAM_API_KEY"));
}

#[test]
fn test_flag_overrides_config_provider() {
    let home = TempDir::new().unwrap();
    write_config(&home, "provider = \"deepgram\"\n");

    speak_cmd(&home)
        .args(["-p", "openai", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}

#[test]
fn test_config_voice_is_validated() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[openai]\nvoice = \"bella\"\n");

    speak_cmd(&home)
        .args(["--token", "sk-test", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid OpenAI voice 'bella'"));
}

#[test]
fn test_malformed_config_is_reported() {
    let home = TempDir::new().unwrap();
    write_config(&home, "provider = [unterminated");

    speak_cmd(&home)
        .arg("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("speak.toml"));
}
