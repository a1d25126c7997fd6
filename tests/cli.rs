//! Integration tests for the non-interactive command line surface

use std::path::PathBuf;
use std::process::Command;

fn run(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_pagegrid"))
        .args(args)
        .output()
        .expect("Failed to execute pagegrid");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn temp_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("pagegrid_cli_{}_{}", std::process::id(), name));
    std::fs::write(&path, content).expect("write temp file");
    path
}

#[test]
fn test_help_lists_options() {
    let (stdout, _, code) = run(&["--help"]);
    assert_eq!(code, 0);
    for flag in ["--keymap", "--keymap-file", "--log-file", "--log-level", "--print-keymap"] {
        assert!(stdout.contains(flag), "missing {flag} in:\n{stdout}");
    }
}

#[test]
fn test_print_builtin_emacs_keymap() {
    let config = temp_file("empty.toml", "");
    let (stdout, stderr, code) = run(&[
        "--keymap",
        "emacs",
        "--keymap-file",
        config.to_str().unwrap(),
        "--print-keymap",
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("keymap: emacs"));
    assert!(stdout.contains("layout: medium=80 large=120"));
    assert!(stdout.contains("C-s          Search"));
    assert!(!stderr.contains("Warning"));
    let _ = std::fs::remove_file(config);
}

#[test]
fn test_print_custom_keymap_and_layout() {
    let config = temp_file(
        "custom.toml",
        r#"
[meta]
default = "arrows"

[layout]
medium = 70
large = 110

[keymaps.arrows]
description = "Arrow keys only"

[keymaps.arrows.normal]
"Left" = "move_left"
"C-z" = "undo"
"#,
    );
    let (stdout, stderr, code) = run(&[
        "--keymap-file",
        config.to_str().unwrap(),
        "--print-keymap",
    ]);
    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(stdout.contains("keymap: arrows"));
    assert!(stdout.contains("layout: medium=70 large=110"));
    assert!(stdout.contains("Arrow keys only"));
    assert!(stdout.contains("C-z"));
    let _ = std::fs::remove_file(config);
}

#[test]
fn test_bad_keymap_file_warns_and_falls_back() {
    let config = temp_file(
        "bad.toml",
        r#"
[keymaps.broken.normal]
"C-x" = "explode"
"#,
    );
    let (stdout, stderr, code) = run(&[
        "--keymap",
        "broken",
        "--keymap-file",
        config.to_str().unwrap(),
        "--print-keymap",
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("keymap: vim"));
    assert!(stderr.contains("Invalid action 'explode'"));
    let _ = std::fs::remove_file(config);
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let (_, stderr, code) = run(&["--log-level", "loud", "--print-keymap"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("--log-level"));
}

#[test]
fn test_log_file_receives_config_records() {
    let log_path = std::env::temp_dir().join(format!("pagegrid_cli_{}.log", std::process::id()));
    let _ = std::fs::remove_file(&log_path);
    let config = temp_file("log.toml", "[meta]\ndefault = \"missing\"\n");

    let (_, _, code) = run(&[
        "--log-file",
        log_path.to_str().unwrap(),
        "--log-level",
        "debug",
        "--keymap-file",
        config.to_str().unwrap(),
        "--print-keymap",
    ]);
    assert_eq!(code, 0);

    let log = std::fs::read_to_string(&log_path).expect("log file written");
    assert!(log.contains("INFO"));
    assert!(log.contains("Default keymap 'missing' not found"));
    assert!(log.contains("resolved keymap 'vim'"));

    let _ = std::fs::remove_file(log_path);
    let _ = std::fs::remove_file(config);
}
