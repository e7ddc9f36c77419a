//! Cassette replay integration tests — zero network I/O.
//!
//! All tests set `DANQING_REPLAY` to a cassette file path so that the binary
//! never contacts the live API. Credentials are stripped to prove that
//! replay mode needs none.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

/// PNG signature used as the recorded image payload in the fixtures.
const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("danqing").unwrap();
    // Point config discovery at a nonexistent file so a developer's real
    // ~/.config/danqing/config.toml cannot leak into these runs.
    cmd.env_remove("DANQING_ACCOUNT_ID")
        .env_remove("DANQING_API_TOKEN")
        .env_remove("DANQING_REC")
        .env_remove("RUST_LOG")
        .env("DANQING_CONFIG", "/nonexistent/danqing-test.toml");
    cmd
}

/// Absolute path to the `test_fixtures` directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_fixtures")
}

#[test]
fn english_prompt_writes_image_bytes_verbatim() {
    let cassette = fixtures_dir().join("sunset.cassette.yaml");
    let out = std::env::temp_dir().join("danqing_test_sunset.png");
    let _ = std::fs::remove_file(&out);

    cmd()
        .env("DANQING_REPLAY", cassette.to_str().unwrap())
        .args(["--prompt", "a sunset over the sea", "--output", out.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved:"));

    let data = std::fs::read(&out).expect("output file should have been created");
    assert_eq!(data, PNG_MAGIC, "payload must be written byte for byte");

    let _ = std::fs::remove_file(&out);
}

#[test]
fn missing_parent_directories_are_created() {
    let cassette = fixtures_dir().join("sunset.cassette.yaml");
    let root = std::env::temp_dir().join("danqing_test_nested");
    let _ = std::fs::remove_dir_all(&root);
    let out = root.join("a/b/c/sunset.png");

    cmd()
        .env("DANQING_REPLAY", cassette.to_str().unwrap())
        .args(["--prompt", "a sunset over the sea", "--output", out.to_str().unwrap()])
        .assert()
        .success();

    assert!(out.exists(), "nested output path should have been created");

    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn chinese_prompt_is_translated_before_generation() {
    let cassette = fixtures_dir().join("sunset_cjk.cassette.yaml");
    let out = std::env::temp_dir().join("danqing_test_cjk.png");
    let _ = std::fs::remove_file(&out);

    cmd()
        .env("DANQING_REPLAY", cassette.to_str().unwrap())
        .args(["--prompt", "海边的日落", "--output", out.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved:"));

    let data = std::fs::read(&out).expect("output file should have been created");
    assert_eq!(data, PNG_MAGIC);

    let _ = std::fs::remove_file(&out);
}

#[test]
fn translator_failure_falls_back_and_still_generates() {
    let cassette = fixtures_dir().join("translator_down.cassette.yaml");
    let out = std::env::temp_dir().join("danqing_test_fallback.png");
    let _ = std::fs::remove_file(&out);

    cmd()
        .env("DANQING_REPLAY", cassette.to_str().unwrap())
        .args(["--prompt", "海边的日落", "--output", out.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("keeping original prompt"));

    assert!(out.exists(), "fallback run should still produce an image");

    let _ = std::fs::remove_file(&out);
}

#[test]
fn generation_error_exits_1_and_writes_nothing() {
    let cassette = fixtures_dir().join("server_error.cassette.yaml");
    let out = std::env::temp_dir().join("danqing_test_server_error.png");
    let _ = std::fs::remove_file(&out);

    cmd()
        .env("DANQING_REPLAY", cassette.to_str().unwrap())
        .args(["--prompt", "a sunset over the sea", "--output", out.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("500"))
        .stderr(predicate::str::contains("rate limited"));

    assert!(!out.exists(), "no file should be written on generation failure");
}

#[test]
fn existing_output_file_is_overwritten() {
    let cassette = fixtures_dir().join("sunset.cassette.yaml");
    let out = std::env::temp_dir().join("danqing_test_overwrite.png");
    std::fs::write(&out, b"stale bytes from a previous run").unwrap();

    cmd()
        .env("DANQING_REPLAY", cassette.to_str().unwrap())
        .args(["--prompt", "a sunset over the sea", "--output", out.to_str().unwrap()])
        .assert()
        .success();

    let data = std::fs::read(&out).unwrap();
    assert_eq!(data, PNG_MAGIC, "stale content must be replaced");

    let _ = std::fs::remove_file(&out);
}
