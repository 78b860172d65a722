//! Tests for secure mode (`vault.cipher = "secure"`).

use crate::support::*;

#[test]
fn test_secure_save_then_list() {
    let t = Test::secure();

    assert_success(&t.save_with_key("hello", SECURE_KEY));
    let output = t.list_with_key(SECURE_KEY);
    assert_success(&output);
    assert_stdout_contains(&output, "hello");
}

#[test]
fn test_secure_tokens_are_not_deterministic() {
    let t = Test::secure();

    assert_success(&t.save_with_key("hello", SECURE_KEY));
    assert_success(&t.save_with_key("hello", SECURE_KEY));
    let lines = t.vault_lines();
    assert_eq!(lines.len(), 2);
    assert_ne!(lines[0], lines[1]);
    assert!(!lines.contains(&HELLO_TOKEN.to_string()));
}

#[test]
fn test_secure_without_key_fails() {
    let t = Test::secure();

    let output = t.save("hello");
    assert_failure(&output);
    assert_stderr_contains(&output, "PASSFORGE_KEY");
    assert_stderr_contains(&output, "passforge keygen");
    assert!(!t.vault_path().exists());
}

#[test]
fn test_secure_invalid_key_fails() {
    let t = Test::secure();

    let output = t.save_with_key("hello", "not a key");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid key");
}

#[test]
fn test_secure_wrong_key_flags_entries() {
    let t = Test::secure();
    assert_success(&t.save_with_key("hello", SECURE_KEY));

    let output = t.list_with_key(OTHER_KEY);
    assert_success(&output);
    assert_stdout_contains(&output, "entry 1 could not be decrypted");
    assert_stdout_excludes(&output, "hello");
}

#[test]
fn test_secure_key_file_takes_precedence() {
    let t = Test::secure();
    let key_file = t.dir.path().join("vault.key");
    std::fs::write(&key_file, format!("{}\n", SECURE_KEY)).unwrap();
    t.write_config(&format!("key_file = {:?}\n", key_file.to_string_lossy()));

    assert_success(&t.save_with_key("from-file", OTHER_KEY));
    let output = t.list_with_key(SECURE_KEY);
    assert_success(&output);
    assert_stdout_contains(&output, "from-file");
}

#[test]
fn test_keygen_prints_usable_key() {
    let t = Test::secure();

    let output = t.keygen();
    assert_success(&output);
    let key = stdout(&output).trim().to_string();
    assert_eq!(key.len(), 44);

    assert_success(&t.save_with_key("generated-key", &key));
    assert_stdout_contains(&t.list_with_key(&key), "generated-key");
}

#[test]
fn test_mirror_vault_unreadable_in_secure_mode() {
    let t = Test::secure();
    t.write_vault(&format!("{}\n", HELLO_TOKEN));

    let output = t.list_with_key(SECURE_KEY);
    assert_success(&output);
    assert_stdout_contains(&output, "entry 1 could not be decrypted");
}
