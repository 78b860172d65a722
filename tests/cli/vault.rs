//! Tests for `passforge save` and `passforge list`.

use crate::support::*;

#[test]
fn test_list_empty_vault() {
    let t = Test::new();

    let output = t.list();
    assert_success(&output);
    assert_stdout_contains(&output, "no passwords saved yet");
    assert!(!t.vault_path().exists());
}

#[test]
fn test_save_then_list() {
    let t = Test::new();
    assert_roundtrip(&t, "first-secret");
}

#[test]
fn test_save_writes_mirror_tokens() {
    let t = Test::new();

    assert_success(&t.save("hello"));
    assert_success(&t.save("Str0ng!Passw0rd"));
    assert_eq!(t.vault_lines(), vec![HELLO_TOKEN, STRONG_TOKEN]);
}

#[test]
fn test_list_preserves_order() {
    let t = Test::new();
    for password in ["one-1", "two-2", "three-3"] {
        assert_success(&t.save(password));
    }

    let output = t.list_json();
    assert_success(&output);
    let passwords: Vec<String> = stdout_json(&output)
        .as_array()
        .expect("entries array")
        .iter()
        .filter_map(|e| e["password"].as_str().map(str::to_string))
        .collect();
    assert_eq!(passwords, vec!["one-1", "two-2", "three-3"]);
}

#[test]
fn test_list_reads_existing_vault_file() {
    let t = Test::new();
    t.write_vault(&format!("{}\r\n\n{}\n", HELLO_TOKEN, EMPTY_TOKEN));

    let output = t.list_json();
    assert_success(&output);
    let json = stdout_json(&output);
    assert_eq!(json[0]["password"], "hello");
    assert_eq!(json[1]["password"], "");
}

#[test]
fn test_list_skips_corrupt_line() {
    let t = Test::new();
    t.write_vault(&vault_with_corrupt_line());

    let output = t.list();
    assert_success(&output);
    assert_stdout_contains(&output, "hello");
    assert_stdout_contains(&output, "Str0ng!Passw0rd");
    assert_stdout_contains(&output, "entry 2 could not be decrypted");
}

#[test]
fn test_list_json_flags_corrupt_line() {
    let t = Test::new();
    t.write_vault(&vault_with_corrupt_line());

    let output = t.list_json();
    assert_success(&output);
    let json = stdout_json(&output);
    assert_eq!(json[0]["status"], "decrypted");
    assert_eq!(json[1]["status"], "malformed");
    assert_eq!(json[1]["index"], 2);
    assert_eq!(json[2]["password"], "Str0ng!Passw0rd");
}

#[test]
fn test_save_reads_piped_stdin() {
    let t = Test::new();

    let output = t
        .cmd()
        .arg("save")
        .write_stdin("piped-secret\n")
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&t.list(), "piped-secret");
}

#[test]
fn test_save_unicode_password() {
    let t = Test::new();
    assert_roundtrip(&t, "sénha-çom-acentos-🔑");
}

#[test]
fn test_save_unwritable_location_fails() {
    let t = Test::new();
    // A regular file where the vault's parent directory should be.
    let blocker = t.dir.path().join("blocker");
    std::fs::write(&blocker, "x").unwrap();
    let config = format!(
        "[vault]\npath = {:?}\n",
        blocker.join("passwords.txt").to_string_lossy()
    );
    std::fs::write(t.config_path(), config).unwrap();

    let output = t.save("anything");
    assert_failure(&output);
    assert_stderr_contains(&output, "storage unavailable");
}

#[test]
fn test_save_stdin_strips_only_final_newline() {
    let t = Test::new();

    let output = t
        .cmd()
        .arg("save")
        .write_stdin("ends-in-newline\n\n")
        .output()
        .unwrap();
    assert_success(&output);

    let output = t.list_json();
    assert_success(&output);
    assert_eq!(stdout_json(&output)[0]["password"], "ends-in-newline\n");
}
