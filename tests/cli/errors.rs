//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    for command in ["generate", "check", "save", "list", "keygen", "menu"] {
        assert!(out.contains(command), "help missing {}", command);
    }
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    t.cmd()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_verbose_flag_accepted() {
    let t = Test::new();

    let output = t.cmd().args(["--verbose", "list"]).output().unwrap();
    assert_success(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "passforge");
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("passforge"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn test_completions_ignore_broken_config() {
    let t = Test::new();
    std::fs::write(t.config_path(), "not [valid toml").unwrap();

    let output = t.cmd().args(["completions", "zsh"]).output().unwrap();
    assert_success(&output);
}

#[test]
fn test_menu_without_terminal_fails() {
    let t = Test::new();

    let output = t.cmd().write_stdin("").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "needs a terminal");
}

#[test]
fn test_invalid_config_reports_parse_error() {
    let t = Test::new();
    std::fs::write(t.config_path(), "[vault\npath = 3").unwrap();

    let output = t.check("whatever");
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config");
}

#[test]
fn test_invalid_config_value_rejected() {
    let t = Test::new();
    t.write_config("[generator]\nlength = 4\n");

    let output = t.generate(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid config value");
}

#[test]
fn test_unknown_cipher_mode_rejected() {
    let t = Test::with_vault_config("cipher = \"rot13\"\n");

    let output = t.list();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config");
}

#[test]
fn test_missing_config_file_uses_defaults() {
    let t = Test::new();
    std::fs::remove_file(t.config_path()).unwrap();

    let output = t.check(STRONG_PASSWORD);
    assert_success(&output);
    assert_stdout_contains(&output, "Strong");
}
