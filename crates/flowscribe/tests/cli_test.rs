//! End-to-end tests of the flowscribe binary.
//!
//! Runs never reach the network: either generation is disabled or the
//! credential variable is removed.

use std::process::Command;
use tempfile::TempDir;

fn flowscribe(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_flowscribe"));
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("OPENAI_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn absent_flow_exits_with_one() -> anyhow::Result<()> {
    let dir = TempDir::new()?;

    let output = flowscribe(&dir).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
    Ok(())
}

#[test]
fn extract_only_prints_records() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(
        dir.path().join("flow.json"),
        r##"{"steps": [{"type": "click", "clickContext": {"cssSelector": "#buy", "x": 1}}]}"##,
    )?;

    let output = flowscribe(&dir).arg("--extract-only").output()?;

    assert_eq!(output.status.code(), Some(0));
    let printed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        printed,
        serde_json::json!([{"type": "click", "clickContext": {"cssSelector": "#buy"}}])
    );
    assert!(!dir.path().join("output").exists());
    Ok(())
}

#[test]
fn missing_credential_still_succeeds() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(
        dir.path().join("recorded.json"),
        r#"{"steps": [{"title": "Start"}]}"#,
    )?;

    let output = flowscribe(&dir).arg("recorded.json").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(
        String::from_utf8_lossy(&output.stderr)
            .contains("OPENAI_API_KEY environment variable not set.")
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join("output/flow_summary.md"))?,
        "Error: OPENAI_API_KEY environment variable not set."
    );
    assert!(!dir.path().join("output/flow_image.png").exists());
    Ok(())
}

#[test]
fn missing_steps_exits_with_one() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(dir.path().join("flow.json"), r#"{"pages": []}"#)?;

    let output = flowscribe(&dir).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No 'steps' field found in JSON"));
    Ok(())
}
