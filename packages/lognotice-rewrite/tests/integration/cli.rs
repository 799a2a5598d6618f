//! Binary exit status and output

#[path = "../common/mod.rs"]
mod common;
use common::*;

use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn lognotice_rewrite(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lognotice-rewrite"))
        .args(args)
        .env("RUST_LOG", "error")
        .output()
        .expect("run lognotice-rewrite")
}

#[test]
fn test_missing_arguments_print_usage_and_succeed() {
    let cases: [&[&str]; 2] = [&[], &["/tmp"]];
    for args in cases {
        let output = lognotice_rewrite(args);
        let stdout = String::from_utf8_lossy(&output.stdout);

        assert!(output.status.success());
        assert!(stdout.contains("Need at least two args:  codeSourceFolder startPackageName"));
        assert!(stdout.contains("Usage:"));
    }
}

#[test]
fn test_fatal_error_exits_non_zero() {
    let corpus = Corpus::new();
    let source = fixture_class("com.acme", "A", "        LogNotice.info(\"only\", e);");
    corpus.write("com/acme/A.java", &source);

    let root = corpus.root().to_string_lossy().into_owned();
    let output = lognotice_rewrite(&[&root, "com.acme"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(corpus.read("com/acme/A.java"), source);
}

#[test]
fn test_clean_run_rewrites_and_writes_report() {
    let corpus = Corpus::new();
    corpus.write(
        "com/acme/A.java",
        &fixture_class("com.acme", "A", &fixture_n_calls(2)),
    );
    let report = corpus.path("report.json");

    let root = corpus.root().to_string_lossy().into_owned();
    let report_arg = report.to_string_lossy().into_owned();
    let output = lognotice_rewrite(&[&root, "com.acme", "--report", &report_arg]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Done: 2 rewrites in 1 files"));
    assert!(corpus.read("com/acme/A.java").contains("LogMsg.info(\"ctx1, detail1\", e);"));

    let json: serde_json::Value = serde_json::from_str(&corpus.read("report.json")).unwrap();
    assert_eq!(json["rewrites"].as_array().unwrap().len(), 2);
}

#[test]
fn test_invalid_config_exits_non_zero() {
    let corpus = Corpus::new();
    corpus.write("com/acme/A.java", &fixture_class("com.acme", "A", &fixture_n_calls(1)));
    let config = corpus.write("rewrite.yaml", "replacement_api: LogMsg\n");

    let root = corpus.root().to_string_lossy().into_owned();
    let config_arg = config.to_string_lossy().into_owned();
    let output = lognotice_rewrite(&[&root, "com.acme", "--config", &config_arg]);

    assert_eq!(output.status.code(), Some(1));
}
