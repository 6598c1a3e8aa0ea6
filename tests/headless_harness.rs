#![allow(unused)]
//! Headless mode process-level integration harness.
//!
//! # What this covers
//!
//! This harness runs `biochat` as a compiled binary via
//! [`std::process::Command`] and checks what a user or a shell script would
//! observe from `biochat ask`.
//!
//! - **Text output**: the answer followed by a `Confianza:` line.
//! - **JSON output**: `--json` prints one object with `answer`, `confidence`
//!   and `kind`.
//! - **Config file**: a user config in `$XDG_CONFIG_HOME/biochat/` changes the
//!   scorer, and a missing one is created with defaults.
//! - **Exit codes**: answers exit 0; a missing question is a usage error.
//!
//! Every run passes `--offline` so no test touches the network.
//!
//! # Running
//!
//! ```sh
//! cargo test --test headless_harness
//! ```

use pretty_assertions::assert_eq;
use std::{
    path::Path,
    process::{Command, Output},
};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Run `biochat --offline <args>` with its config directory inside `home`.
fn biochat(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_biochat"))
        .arg("--offline")
        .args(args)
        .env("XDG_CONFIG_HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn biochat")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn json(out: &Output) -> serde_json::Value {
    serde_json::from_slice(&out.stdout).expect("stdout is not a JSON object")
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

#[test]
fn ask_prints_answer_and_confidence() {
    let home = TempDir::new().unwrap();
    let out = biochat(home.path(), &["ask", "jaguar"]);

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        stdout(&out),
        "El jaguar es el felino más grande de América y habita en la Amazonía boliviana\nConfianza: 0.86\n"
    );
}

#[test]
fn words_are_joined_into_one_question() {
    let home = TempDir::new().unwrap();
    let out = biochat(home.path(), &["ask", "paraba", "frente", "roja"]);

    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.starts_with("La paraba frente roja"), "{text}");
    assert!(text.contains("\nConfianza: "), "{text}");
}

#[test]
fn stopword_question_is_not_understood() {
    let home = TempDir::new().unwrap();
    let out = biochat(home.path(), &["ask", "de", "la"]);

    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        "No entendí tu pregunta. ¿Podrías reformular?\nConfianza: 0.00\n"
    );
}

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

#[test]
fn json_output_for_a_match() {
    let home = TempDir::new().unwrap();
    let out = biochat(home.path(), &["ask", "--json", "condor", "andino"]);

    assert!(out.status.success());
    let v = json(&out);
    assert_eq!(v["kind"], "match");
    assert!(v["answer"].as_str().unwrap().contains("cóndor"), "{v}");
    let confidence = v["confidence"].as_f64().unwrap();
    assert!((confidence - 0.625).abs() < 1e-6, "{confidence}");
}

#[test]
fn json_output_for_a_fallback() {
    let home = TempDir::new().unwrap();
    let out = biochat(home.path(), &["ask", "--json", "flamenco"]);

    assert!(out.status.success());
    let v = json(&out);
    assert_eq!(v["kind"], "fallback");
    assert_eq!(v["confidence"], 0.0);
}

// ---------------------------------------------------------------------------
// Config file
// ---------------------------------------------------------------------------

#[test]
fn missing_config_is_created() {
    let home = TempDir::new().unwrap();
    let out = biochat(home.path(), &["ask", "jaguar"]);

    assert!(out.status.success());
    let written = std::fs::read_to_string(home.path().join("biochat/config.toml")).unwrap();
    assert!(written.contains("[search]"), "{written}");
    assert!(written.contains("confidence_threshold"), "{written}");
}

#[test]
fn config_threshold_changes_the_answer() {
    let home = TempDir::new().unwrap();
    std::fs::create_dir_all(home.path().join("biochat")).unwrap();
    std::fs::write(
        home.path().join("biochat/config.toml"),
        "[search]\nconfidence_threshold = 0.95\n",
    )
    .unwrap();

    let out = biochat(home.path(), &["ask", "--json", "jaguar"]);

    assert!(out.status.success());
    let v = json(&out);
    assert_eq!(v["kind"], "fallback");
    assert!(v["answer"].as_str().unwrap().contains("jaguar"), "{v}");
}

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

#[test]
fn ask_without_question_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    let out = biochat(home.path(), &["ask"]);

    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    let out = biochat(home.path(), &["ask", "--verbose", "jaguar"]);

    assert!(!out.status.success());
}
