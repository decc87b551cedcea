//! CI log triage for headless engine builds.
//!
//! Scans build logs for known failure signatures and maps the result to
//! a fixed process exit code, so CI can tell a license outage apart from
//! a project/editor version mismatch without a human reading the log.
//!
//! | Verdict | Exit code |
//! |---|---|
//! | [`Verdict::Clean`] | 0 |
//! | [`Verdict::LicenseFailure`] | 10 |
//! | [`Verdict::VersionMismatch`] | 20 |
//!
//! Matching is plain case-sensitive substring search. A license failure
//! outranks a version mismatch, in the same log or across logs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use walkdir::WalkDir;

/// Errors from loading triage configuration or walking log directories.
#[derive(Debug, Error)]
pub enum TriageError {
    /// Failed to read a file or directory.
    #[error("Failed to read '{path}': {source}")]
    IoError {
        /// Path that could not be read.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to walk a log directory.
    #[error("Failed to walk '{path}': {source}")]
    WalkError {
        /// Root of the walk.
        path: String,
        /// Underlying walk error.
        #[source]
        source: walkdir::Error,
    },

    /// Failed to parse a pattern file.
    #[error("Failed to parse pattern file '{path}': {source}")]
    ParseError {
        /// Path to the pattern file.
        path: String,
        /// Underlying parse error.
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Result type for triage operations.
pub type TriageResult<T> = Result<T, TriageError>;

/// Outcome of triaging one or more logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// No known failure signature (or nothing to inspect).
    Clean,
    /// The editor version does not match the project's.
    VersionMismatch,
    /// The engine could not find or activate a license.
    LicenseFailure,
}

impl Verdict {
    /// Process exit code reported to CI.
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Clean => 0,
            Self::LicenseFailure => 10,
            Self::VersionMismatch => 20,
        }
    }

    /// Short human-readable summary.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Clean => "no known failure pattern",
            Self::LicenseFailure => "license/activation failure",
            Self::VersionMismatch => "editor version mismatch suspected",
        }
    }
}

/// Substrings that identify each failure class.
///
/// # Example RON
///
/// ```ron
/// TriagePatterns(
///     license: ["No valid Unity license"],
///     version_mismatch: ["m_EditorVersion"],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriagePatterns {
    /// License/activation failure signatures.
    pub license: Vec<String>,
    /// Editor version mismatch signatures.
    pub version_mismatch: Vec<String>,
}

impl Default for TriagePatterns {
    fn default() -> Self {
        Self {
            license: vec![
                "No valid Unity license".to_string(),
                "Failed to activate/update license".to_string(),
                "License activation failed".to_string(),
            ],
            version_mismatch: vec![
                "m_EditorVersion".to_string(),
                "was saved with a different Unity version".to_string(),
                "Editor version mismatch".to_string(),
            ],
        }
    }
}

impl TriagePatterns {
    /// Load patterns from a RON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> TriageResult<Self> {
        let path_str = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|e| TriageError::IoError {
            path: path_str.clone(),
            source: e,
        })?;
        ron::from_str(&contents).map_err(|e| TriageError::ParseError {
            path: path_str,
            source: e,
        })
    }

    fn first_match<'a>(patterns: &'a [String], line: &str) -> Option<&'a str> {
        patterns
            .iter()
            .map(String::as_str)
            .find(|p| !p.is_empty() && line.contains(p))
    }
}

/// A failure signature found in a log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// What the signature indicates.
    pub verdict: Verdict,
    /// Pattern that matched.
    pub pattern: String,
    /// 1-based line number of the first match.
    pub line: usize,
    /// Trimmed text of the matching line.
    pub excerpt: String,
}

/// Classify a single log's text.
///
/// Returns the most severe finding, or `None` when no pattern matches.
#[must_use]
pub fn classify(text: &str, patterns: &TriagePatterns) -> Option<Finding> {
    let mut version_hit = None;

    for (index, line) in text.lines().enumerate() {
        if let Some(pattern) = TriagePatterns::first_match(&patterns.license, line) {
            return Some(finding(Verdict::LicenseFailure, pattern, index, line));
        }
        if version_hit.is_none() {
            if let Some(pattern) = TriagePatterns::first_match(&patterns.version_mismatch, line) {
                version_hit = Some(finding(Verdict::VersionMismatch, pattern, index, line));
            }
        }
    }

    version_hit
}

fn finding(verdict: Verdict, pattern: &str, index: usize, line: &str) -> Finding {
    Finding {
        verdict,
        pattern: pattern.to_string(),
        line: index + 1,
        excerpt: line.trim().to_string(),
    }
}

/// Findings for a single log file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogFinding {
    /// Log the finding came from.
    pub log: PathBuf,
    /// What was found.
    #[serde(flatten)]
    pub finding: Finding,
}

/// Combined result of triaging every log under a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageReport {
    /// Most severe verdict across all logs.
    pub verdict: Verdict,
    /// Process exit code for `verdict`.
    pub exit_code: i32,
    /// Number of logs that were read.
    pub logs_scanned: usize,
    /// One entry per log with a known failure signature.
    pub findings: Vec<LogFinding>,
    /// Explanation when the verdict is indeterminate (e.g. no logs).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

impl TriageReport {
    fn from_findings(logs_scanned: usize, findings: Vec<LogFinding>) -> Self {
        let verdict = findings
            .iter()
            .map(|f| f.finding.verdict)
            .max()
            .unwrap_or(Verdict::Clean);
        Self {
            verdict,
            exit_code: verdict.exit_code(),
            logs_scanned,
            findings,
            diagnostic: None,
        }
    }
}

fn is_log_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == "log" || ext == "txt")
}

/// Locate log files under `path`.
///
/// A file is returned as-is regardless of extension. A directory is
/// searched recursively for `.log` and `.txt` files without following
/// symlinks. Results are sorted.
/// A missing path yields no logs.
///
/// # Errors
///
/// Returns an error if a directory cannot be read.
pub fn find_logs(path: &Path) -> TriageResult<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Ok(Vec::new());
    }

    let mut logs = Vec::new();
    for entry in WalkDir::new(path) {
        let entry = entry.map_err(|e| TriageError::WalkError {
            path: path.display().to_string(),
            source: e,
        })?;
        // Symlinks are not followed, so a link back to an ancestor is skipped.
        if entry.file_type().is_file() && is_log_file(entry.path()) {
            logs.push(entry.into_path());
        }
    }
    logs.sort();
    Ok(logs)
}

/// Triage a set of log files.
///
/// Logs that cannot be read are skipped with a warning. Non-UTF-8 bytes
/// are replaced rather than rejected.
#[must_use]
pub fn triage_logs(logs: &[PathBuf], patterns: &TriagePatterns) -> TriageReport {
    let mut scanned = 0;
    let mut findings = Vec::new();

    for log in logs {
        let bytes = match std::fs::read(log) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("Skipping unreadable log {}: {e}", log.display());
                continue;
            }
        };
        scanned += 1;

        let text = String::from_utf8_lossy(&bytes);
        match classify(&text, patterns) {
            Some(finding) => {
                tracing::info!(
                    "{}:{}: {} ('{}')",
                    log.display(),
                    finding.line,
                    finding.verdict.describe(),
                    finding.pattern
                );
                findings.push(LogFinding {
                    log: log.clone(),
                    finding,
                });
            }
            None => tracing::debug!("{}: no known failure pattern", log.display()),
        }
    }

    let mut report = TriageReport::from_findings(scanned, findings);
    if scanned == 0 {
        report.diagnostic = Some(if logs.is_empty() {
            "no log files to inspect".to_string()
        } else {
            "none of the log files could be read".to_string()
        });
    }
    report
}

/// Locate and triage every log under `path`.
///
/// When no logs exist the verdict is [`Verdict::Clean`] and the report
/// carries a diagnostic naming the path.
///
/// # Errors
///
/// Returns an error if a directory under `path` cannot be read.
pub fn triage_path(path: &Path, patterns: &TriagePatterns) -> TriageResult<TriageReport> {
    let logs = find_logs(path)?;
    if logs.is_empty() {
        tracing::warn!("No log files found under {}", path.display());
        let mut report = TriageReport::from_findings(0, Vec::new());
        report.diagnostic = Some(format!("no log files found under {}", path.display()));
        return Ok(report);
    }

    tracing::debug!("Triaging {} log(s) under {}", logs.len(), path.display());
    Ok(triage_logs(&logs, patterns))
}
