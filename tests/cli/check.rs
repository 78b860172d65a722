//! Tests for `passforge check`.

use crate::support::*;

#[test]
fn test_check_strong_password() {
    let t = Test::new();

    let output = t.check(STRONG_PASSWORD);
    assert_success(&output);
    assert_stdout_contains(&output, "██████████ 100% (Strong)");
    assert_stdout_contains(&output, "Your password looks good!");
}

#[test]
fn test_check_weak_password_lists_recommendations() {
    let t = Test::new();

    let output = t.check(WEAK_PASSWORD);
    assert_success(&output);
    assert_stdout_contains(&output, "0% (Weak)");
    assert_stdout_contains(&output, "Recommendations:");
    assert_stdout_contains(&output, "Avoid common or predictable passwords.");
    assert_stdout_excludes(&output, "looks good");
}

#[test]
fn test_check_medium_password() {
    let t = Test::new();

    // Only the length rule fires: 1.0 - 0.3
    let output = t.check("Ab1!xyz");
    assert_success(&output);
    assert_stdout_contains(&output, "███████░░░ 70% (Medium)");
    assert_stdout_contains(&output, "Increase the length to at least 12 characters.");
}

#[test]
fn test_check_json() {
    let t = Test::new();

    let output = t.check_json("daniel123");
    assert_success(&output);
    let json = stdout_json(&output);
    assert_eq!(json["band"], "Weak");

    let rules: Vec<&str> = json["findings"]
        .as_array()
        .expect("findings array")
        .iter()
        .filter_map(|f| f["rule"].as_str())
        .collect();
    assert!(rules.contains(&"common_name"));
    assert!(rules.contains(&"name_digits"));
    assert!(!rules.contains(&"digit"));
}

#[test]
fn test_check_reads_piped_stdin() {
    let t = Test::new();

    let output = t
        .cmd()
        .arg("check")
        .write_stdin(format!("{}\n", STRONG_PASSWORD))
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "100% (Strong)");
}

#[test]
fn test_check_empty_stdin_fails() {
    let t = Test::new();

    let output = t.cmd().arg("check").write_stdin("").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "password cannot be empty");
}

#[test]
fn test_check_custom_deny_list() {
    let t = Test::new();
    t.write_config("[strength]\ncommon_words = [\"zebra\"]\n");

    let output = t.check_json("MyZebra#2024x");
    assert_success(&output);
    let findings = stdout_json(&output)["findings"].to_string();
    assert!(findings.contains("common_word"), "{}", findings);
}
