//! Tests for successful code generation.

use crate::support::*;

#[test]
fn test_prints_activation_line() {
    let t = Test::with_secret(TEST_SECRET);

    let output = t.generate(TEST_APP_ID);
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        format!("Activation Code for App ID '{}': {}\n", TEST_APP_ID, TEST_CODE)
    );
}

#[test]
fn test_known_codes() {
    for (app_id, secret, code) in KNOWN_CODES {
        let t = Test::with_secret(secret);
        assert_eq!(t.code(app_id), *code, "app_id={:?} secret={:?}", app_id, secret);
    }
}

#[test]
fn test_sample_properties_file() {
    let t = Test::with_properties(SAMPLE_PROPERTIES);

    let output = t.generate(TEST_APP_ID);
    assert_success(&output);
    assert_stdout_contains(&output, TEST_CODE);
}

#[test]
fn test_spaces_around_equals() {
    let t = Test::with_properties("APP_SECRET = \"testsecret\"\n");
    assert_eq!(t.code(TEST_APP_ID), TEST_CODE);
}

#[test]
fn test_unquoted_secret() {
    let t = Test::with_properties("APP_SECRET=testsecret\n");
    assert_eq!(t.code(TEST_APP_ID), TEST_CODE);
}

#[test]
fn test_first_secret_line_wins() {
    let t = Test::with_properties("APP_SECRET=\"testsecret\"\nAPP_SECRET=\"othersecret\"\n");
    assert_eq!(t.code(TEST_APP_ID), TEST_CODE);
}

#[test]
fn test_empty_secret_is_accepted() {
    let t = Test::with_properties("APP_SECRET=\"\"\n");

    let output = t.generate(TEST_APP_ID);
    assert_success(&output);
    assert_stdout_contains(&output, "570B-1596-87E8-3F78");
}

#[test]
fn test_empty_app_id() {
    let t = Test::with_secret(TEST_SECRET);

    let output = t.generate("");
    assert_success(&output);
    assert_stdout_contains(&output, "Activation Code for App ID '': 883A-1369-FA89-DBC4");
}

#[test]
fn test_repeated_runs_match() {
    let t = Test::with_secret(TEST_SECRET);
    assert_eq!(t.code("com.example.pos"), t.code("com.example.pos"));
}

#[test]
fn test_unicode_app_id() {
    let t = Test::with_secret(TEST_SECRET);

    let code = t.code("caf\u{e9}-\u{65e5}\u{672c}");
    assert_code_format(&code);
}

#[test]
fn test_custom_config_path() {
    let t = Test::new();
    let path = t.write("conf/secrets.properties", "APP_SECRET=\"testsecret\"\n");

    let output = t
        .cmd()
        .args(["--config", path.to_str().unwrap(), TEST_APP_ID])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, TEST_CODE);
}

#[test]
fn test_quiet_prints_bare_code() {
    let t = Test::with_secret(TEST_SECRET);

    let output = t.cmd().args(["--quiet", TEST_APP_ID]).output().unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), format!("{}\n", TEST_CODE));
}

#[test]
fn test_json_output() {
    let t = Test::with_secret(TEST_SECRET);

    let output = t.cmd().args(["--json", TEST_APP_ID]).output().unwrap();
    assert_success(&output);

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["app_id"], TEST_APP_ID);
    assert_eq!(value["activation_code"], TEST_CODE);
}

#[test]
fn test_properties_file_untouched() {
    let t = Test::with_properties(SAMPLE_PROPERTIES);

    assert_success(&t.generate(TEST_APP_ID));
    let after = std::fs::read_to_string(t.path(CONFIG_FILE)).unwrap();
    assert_eq!(after, SAMPLE_PROPERTIES);
}

#[test]
fn test_secret_never_printed() {
    let t = Test::with_secret("very-private-value");

    let output = t.cmd().args(["--verbose", TEST_APP_ID]).output().unwrap();
    assert_success(&output);
    assert_stdout_excludes(&output, "very-private-value");
    assert!(!stderr(&output).contains("very-private-value"));
}

#[test]
fn test_app_id_with_leading_hyphen() {
    let t = Test::with_secret(TEST_SECRET);

    let output = t.generate("-App123");
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        format!("Activation Code for App ID '-App123': {}\n", t.code_for("-App123"))
    );
}

#[test]
fn test_app_id_after_escape() {
    let t = Test::with_secret(TEST_SECRET);

    let bare = t.generate("-App123");
    let escaped = t.cmd().args(["--", "-App123"]).output().unwrap();
    assert_success(&escaped);
    assert_eq!(stdout(&escaped), stdout(&bare));
}

#[test]
fn test_escape_keeps_flag_like_app_id() {
    let t = Test::with_secret(TEST_SECRET);

    let output = t.cmd().args(["--", "-q"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "Activation Code for App ID '-q': ");
}

#[test]
fn test_extra_arguments_ignored() {
    let t = Test::with_secret(TEST_SECRET);

    let output = t.cmd().args([TEST_APP_ID, "extra", "more"]).output().unwrap();
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        format!("Activation Code for App ID '{}': {}\n", TEST_APP_ID, TEST_CODE)
    );
    assert!(stderr(&output).contains("ignoring arguments after APP_ID"));
}

#[test]
fn test_sentence_unstyled_when_colors_forced() {
    let t = Test::with_secret(TEST_SECRET);

    let output = t
        .cmd()
        .env_remove("NO_COLOR")
        .env("CLICOLOR_FORCE", "1")
        .arg(TEST_APP_ID)
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        format!("Activation Code for App ID '{}': {}\n", TEST_APP_ID, TEST_CODE)
    );
}
