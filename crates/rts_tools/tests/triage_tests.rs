//! Tests for CI build log triage.
//!
//! Covers the exit-code contract end to end: library classification,
//! directory discovery, and the `rts-tools triage` binary itself.

use std::path::Path;
use std::process::Command;

use proptest::prelude::*;
use rts_test_utils::logs::{CLEAN_LOG, LICENSE_FAILURE_LOG, VERSION_MISMATCH_LOG};
use rts_test_utils::strategies::{noise_line, noise_lines};
use rts_tools::triage::{classify, find_logs, triage_path, TriagePatterns, Verdict};

fn write(dir: &Path, name: &str, contents: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

fn triage_dir(dir: &Path) -> rts_tools::triage::TriageReport {
    triage_path(dir, &TriagePatterns::default()).unwrap()
}

/// Run the CLI and return (exit code, stdout).
fn run_cli(args: &[&str]) -> (i32, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_rts-tools"))
        .args(args)
        .output()
        .unwrap();
    (
        output.status.code().unwrap(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
    )
}

// ==========================================================================
// Exit Code Contract
// ==========================================================================

#[test]
fn test_license_failure_exits_10() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "build.log", LICENSE_FAILURE_LOG);

    let report = triage_dir(dir.path());
    assert_eq!(report.verdict, Verdict::LicenseFailure);
    assert_eq!(report.exit_code, 10);
}

#[test]
fn test_version_marker_exits_20() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "build.log", VERSION_MISMATCH_LOG);

    let report = triage_dir(dir.path());
    assert_eq!(report.verdict, Verdict::VersionMismatch);
    assert_eq!(report.exit_code, 20);
}

#[test]
fn test_clean_log_exits_0() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "build.log", CLEAN_LOG);

    let report = triage_dir(dir.path());
    assert_eq!(report.verdict, Verdict::Clean);
    assert_eq!(report.exit_code, 0);
    assert_eq!(report.logs_scanned, 1);
    assert!(report.findings.is_empty());
    assert!(report.diagnostic.is_none());
}

#[test]
fn test_no_logs_exits_0_with_diagnostic() {
    let dir = tempfile::tempdir().unwrap();

    let report = triage_dir(dir.path());
    assert_eq!(report.exit_code, 0);
    assert_eq!(report.logs_scanned, 0);
    let diagnostic = report.diagnostic.unwrap();
    assert!(diagnostic.starts_with("no log files found under"));
}

#[test]
fn test_missing_path_is_indeterminate() {
    let dir = tempfile::tempdir().unwrap();
    let report = triage_dir(&dir.path().join("artifacts"));
    assert_eq!(report.exit_code, 0);
    assert!(report.diagnostic.is_some());
}

// ==========================================================================
// Discovery and Aggregation
// ==========================================================================

#[test]
fn test_logs_found_recursively() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "linux/Editor.log", CLEAN_LOG);
    write(dir.path(), "webgl/nested/player.txt", CLEAN_LOG);
    write(dir.path(), "webgl/build.zip", LICENSE_FAILURE_LOG);

    let logs = find_logs(dir.path()).unwrap();
    assert_eq!(logs.len(), 2);
    assert!(logs.windows(2).all(|w| w[0] <= w[1]), "logs are sorted");

    let report = triage_dir(dir.path());
    assert_eq!(report.verdict, Verdict::Clean, "non-log files are skipped");
}

#[cfg(unix)]
#[test]
fn test_symlink_loop_is_not_followed() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "build.log", LICENSE_FAILURE_LOG);
    std::os::unix::fs::symlink(dir.path(), dir.path().join("loop")).unwrap();

    let logs = find_logs(dir.path()).unwrap();
    assert_eq!(logs, [dir.path().join("build.log")]);

    let report = triage_dir(dir.path());
    assert_eq!(report.logs_scanned, 1);
    assert_eq!(report.findings.len(), 1);
}

#[test]
fn test_single_file_path_is_used_as_is() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "unity-output", VERSION_MISMATCH_LOG);

    let path = dir.path().join("unity-output");
    let report = triage_path(&path, &TriagePatterns::default()).unwrap();
    assert_eq!(report.verdict, Verdict::VersionMismatch);
}

#[test]
fn test_most_severe_log_wins() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.log", VERSION_MISMATCH_LOG);
    write(dir.path(), "b.log", CLEAN_LOG);
    write(dir.path(), "c.log", LICENSE_FAILURE_LOG);

    let report = triage_dir(dir.path());
    assert_eq!(report.verdict, Verdict::LicenseFailure);
    assert_eq!(report.logs_scanned, 3);
    assert_eq!(report.findings.len(), 2);
    assert!(report.findings[0].log.ends_with("a.log"));
    assert_eq!(report.findings[1].finding.line, 3);
}

#[test]
fn test_invalid_utf8_is_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    let mut bytes = vec![0xff, 0xfe, b'\n'];
    bytes.extend_from_slice(b"No valid Unity license\n");
    std::fs::write(dir.path().join("build.log"), bytes).unwrap();

    assert_eq!(triage_dir(dir.path()).exit_code, 10);
}

#[test]
fn test_custom_patterns_file() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "patterns.ron",
        r#"TriagePatterns(license: ["seat limit reached"], version_mismatch: [])"#,
    );
    write(dir.path(), "logs/build.log", "error: seat limit reached\n");

    let patterns = TriagePatterns::from_file(&dir.path().join("patterns.ron")).unwrap();
    let report = triage_path(&dir.path().join("logs"), &patterns).unwrap();
    assert_eq!(report.verdict, Verdict::LicenseFailure);

    // Default markers are replaced, not extended
    write(dir.path(), "logs/build.log", VERSION_MISMATCH_LOG);
    let report = triage_path(&dir.path().join("logs"), &patterns).unwrap();
    assert_eq!(report.verdict, Verdict::Clean);
}

#[test]
fn test_report_json_shape() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "build.log", LICENSE_FAILURE_LOG);

    let report = triage_dir(dir.path());
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["verdict"], "license_failure");
    assert_eq!(json["exit_code"], 10);
    assert_eq!(json["findings"][0]["pattern"], "No valid Unity license");
    assert!(json.get("diagnostic").is_none());
}

// ==========================================================================
// Binary
// ==========================================================================

#[test]
fn test_cli_exit_codes() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "license/build.log", LICENSE_FAILURE_LOG);
    write(root, "version/build.log", VERSION_MISMATCH_LOG);
    write(root, "clean/build.log", CLEAN_LOG);
    std::fs::create_dir_all(root.join("empty")).unwrap();

    let arg = |name: &str| root.join(name).display().to_string();

    assert_eq!(run_cli(&["triage", &arg("license")]).0, 10);
    assert_eq!(run_cli(&["triage", &arg("version")]).0, 20);
    assert_eq!(run_cli(&["triage", &arg("clean")]).0, 0);

    let (code, stdout) = run_cli(&["triage", &arg("empty")]);
    assert_eq!(code, 0);
    assert!(stdout.contains("no log files found"), "stdout: {stdout}");
}

#[test]
fn test_cli_json_output() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "build.log", VERSION_MISMATCH_LOG);

    let logs = dir.path().display().to_string();
    let (code, stdout) = run_cli(&["triage", "--json", &logs]);
    assert_eq!(code, 20);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["verdict"], "version_mismatch");
}

#[test]
fn test_cli_bad_patterns_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.ron").display().to_string();
    let logs = dir.path().display().to_string();

    assert_eq!(run_cli(&["triage", "--patterns", &missing, &logs]).0, 1);
}

#[test]
fn test_shipped_pattern_file_parses() {
    let paths = [
        Path::new("ci/triage-patterns.ron"),
        Path::new("../../ci/triage-patterns.ron"),
    ];
    let path = paths.iter().find(|p| p.exists()).expect("pattern file present");

    let patterns = TriagePatterns::from_file(path).unwrap();
    assert!(patterns.license.iter().any(|p| p == "No valid Unity license"));
}

// ==========================================================================
// Properties
// ==========================================================================

proptest! {
    #[test]
    fn prop_noise_is_clean(lines in noise_lines()) {
        let text = lines.join("\n");
        prop_assert_eq!(classify(&text, &TriagePatterns::default()), None);
    }

    #[test]
    fn prop_license_anywhere_is_license(
        before in noise_lines(),
        prefix in noise_line(),
        after in noise_lines(),
        with_version in any::<bool>(),
    ) {
        let mut lines = before;
        if with_version {
            lines.push("m_EditorVersion: 2022.3.10f1".to_string());
        }
        lines.push(format!("{prefix}No valid Unity license"));
        lines.extend(after);

        let finding = classify(&lines.join("\n"), &TriagePatterns::default()).unwrap();
        prop_assert_eq!(finding.verdict, Verdict::LicenseFailure);
        prop_assert_eq!(finding.verdict.exit_code(), 10);
    }

    #[test]
    fn prop_version_marker_without_license_is_mismatch(
        before in noise_lines(),
        after in noise_lines(),
    ) {
        let mut lines = before;
        let expected_line = lines.len() + 1;
        lines.push("m_EditorVersion: 2021.3.5f1".to_string());
        lines.extend(after);

        let finding = classify(&lines.join("\n"), &TriagePatterns::default()).unwrap();
        prop_assert_eq!(finding.verdict, Verdict::VersionMismatch);
        prop_assert_eq!(finding.line, expected_line);
    }
}
