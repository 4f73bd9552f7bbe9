//! CLI Smoke Tests
//!
//! Integration tests for the gloam CLI commands:
//! - `info`: strategy and binding summary
//! - `list`: entry point names
//! - `resolve`: lookups in the running process
//! - `parse`: extension string parsing
//!
//! None of them need a GL context.

use std::process::{Command, Output};

fn gloam(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gloam"))
        .args(args)
        .env_remove("GLOAM_TOKEN_OVERFLOW")
        .env_remove("GLOAM_TOKEN_LIMIT")
        .output()
        .expect("Failed to execute gloam")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ============================================================================
// Info / List
// ============================================================================

#[test]
fn test_info_reports_strategy_and_size() {
    let output = gloam(&["info"]);
    assert!(output.status.success(), "info should succeed");

    let text = stdout(&output);
    assert!(text.contains("strategy"));
    assert!(text.contains("597"));
    assert!(text.contains("GL_ARB_framebuffer_object"));
}

#[test]
fn test_list_with_filter() {
    let output = gloam(&["list", "--filter", "glshadersource"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "glShaderSource");

    let output = gloam(&["list", "--filter", "shadersource"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).lines().collect::<Vec<_>>(),
        ["glGetShaderSource", "glShaderSource"]
    );
}

#[test]
fn test_list_everything() {
    let output = gloam(&["list"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).lines().count(), 597);
}

// ============================================================================
// Resolve
// ============================================================================

#[test]
fn test_resolve_missing_symbol_json() {
    let output = gloam(&["resolve", "gloamNoSuchEntryPoint", "--json"]);
    assert!(output.status.success(), "a missing symbol is reported, not an error");

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["missing"], 1);
    assert_eq!(report["symbols"][0]["name"], "gloamNoSuchEntryPoint");
    assert!(report["symbols"][0].get("address").is_none());
}

#[test]
fn test_resolve_requires_names() {
    let output = gloam(&["resolve"]);
    assert!(!output.status.success());
}

// ============================================================================
// Parse
// ============================================================================

#[test]
fn test_parse_text() {
    let output = gloam(&["parse", "GL_EXT_foo GL_ARB_imaging"]);
    assert!(output.status.success());

    let text = stdout(&output);
    let imaging = text.lines().find(|l| l.starts_with("GL_ARB_imaging")).unwrap();
    assert!(imaging.ends_with("yes"));
    let fbo = text
        .lines()
        .find(|l| l.starts_with("GL_ARB_framebuffer_object"))
        .unwrap();
    assert!(fbo.ends_with("no"));
}

#[test]
fn test_parse_halts_on_long_token() {
    let long = "X".repeat(300);
    let input = format!("GL_ARB_imaging {long} GL_ARB_framebuffer_object");
    let output = gloam(&["parse", &input, "--json"]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["policy"], "halt");
    assert_eq!(report["overflow"]["offset"], 15);
    assert_eq!(report["overflow"]["len"], 300);
    assert_eq!(report["extensions"][0], serde_json::json!(["GL_ARB_imaging", true]));
    assert_eq!(
        report["extensions"][1],
        serde_json::json!(["GL_ARB_framebuffer_object", false])
    );
}

#[test]
fn test_parse_skip_keeps_going() {
    let long = "X".repeat(300);
    let input = format!("{long} GL_ARB_framebuffer_object");
    let output = gloam(&["parse", &input, "--overflow", "skip", "--json"]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(report.get("overflow").is_none());
    assert_eq!(
        report["extensions"][1],
        serde_json::json!(["GL_ARB_framebuffer_object", true])
    );
}

#[test]
fn test_parse_rejects_zero_limit() {
    let output = gloam(&["parse", "GL_ARB_imaging", "--limit", "0"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Configuration error"));
}
