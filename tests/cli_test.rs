#![cfg(feature = "cli")]

use anyhow::Result;
use golf_saju::core::fallback::OUTER_FALLBACK_REPORT;
use golf_saju::domain::model::FortuneReport;
use std::io::Write;
use std::process::{Command, Stdio};

const REQUEST: &str = r#"{"name":"Kim","birthDate":"1990-05-15","birthTime":"08:30","handicap":15,"gender":"남자"}"#;

fn run(args: &[&str]) -> Result<std::process::Output> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_golf-saju"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(REQUEST.as_bytes())?;
    }
    Ok(child.wait_with_output()?)
}

#[test]
fn test_cli_prints_profile_on_stdout_only() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let output = run(&["--output-dir", temp_dir.path().to_str().unwrap()])?;

    assert!(output.status.success());
    let report: FortuneReport = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report.day_gan, "庚");
    assert_eq!(report.lunar_date, "一九九〇年四月廿一");
    Ok(())
}

#[test]
fn test_invalid_config_still_prints_fallback_profile() -> Result<()> {
    let output = run(&["--submissions", "user_data.txt"])?;

    assert_eq!(output.status.code(), Some(1));
    let report: FortuneReport = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report, OUTER_FALLBACK_REPORT.to_report());
    Ok(())
}
