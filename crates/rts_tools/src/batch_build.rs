//! Headless engine build invocation.
//!
//! Builds the command line for the engine's batch mode and optionally
//! runs it. The flag contract belongs to the engine; this module only
//! assembles it in one place so CI scripts and developers agree.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::str::FromStr;

use thiserror::Error;

use crate::triage::Verdict;

/// Errors from the build invocation.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Unknown build target name.
    #[error("Unknown build target '{0}' (expected one of: {targets})", targets = BuildTarget::names().join(", "))]
    UnknownTarget(String),

    /// The editor executable could not be started.
    #[error("Failed to launch editor '{path}': {source}")]
    LaunchError {
        /// Editor executable.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// Platform to build for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildTarget {
    /// 64-bit Linux desktop.
    StandaloneLinux64,
    /// 64-bit Windows desktop.
    StandaloneWindows64,
    /// macOS desktop.
    StandaloneOsx,
    /// Browser build.
    WebGl,
    /// Android package.
    Android,
    /// iOS Xcode project.
    Ios,
}

impl BuildTarget {
    /// All known targets.
    pub const ALL: [Self; 6] = [
        Self::StandaloneLinux64,
        Self::StandaloneWindows64,
        Self::StandaloneOsx,
        Self::WebGl,
        Self::Android,
        Self::Ios,
    ];

    /// Name the engine expects after `-buildTarget`.
    #[must_use]
    pub const fn engine_name(self) -> &'static str {
        match self {
            Self::StandaloneLinux64 => "StandaloneLinux64",
            Self::StandaloneWindows64 => "StandaloneWindows64",
            Self::StandaloneOsx => "StandaloneOSX",
            Self::WebGl => "WebGL",
            Self::Android => "Android",
            Self::Ios => "iOS",
        }
    }

    fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.engine_name()).collect()
    }
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.engine_name())
    }
}

impl FromStr for BuildTarget {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.engine_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BuildError::UnknownTarget(s.to_string()))
    }
}

/// A headless batch-mode build of the game project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchBuild {
    /// Path to the editor executable.
    pub editor: PathBuf,
    /// Path to the project root.
    pub project_path: PathBuf,
    /// Platform to build for.
    pub build_target: BuildTarget,
    /// Static method the editor runs to perform the build.
    pub execute_method: String,
    /// Where the editor writes its log.
    pub log_file: PathBuf,
    /// Additional arguments appended after the fixed flags.
    pub extra_args: Vec<String>,
}

/// Result of running a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    /// Editor exit code; `None` if it was killed by a signal.
    pub exit_code: Option<i32>,
    /// Log file the editor was told to write.
    pub log_file: PathBuf,
}

impl BuildOutcome {
    /// Whether the editor exited with code 0.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Exit code to report to CI once the build log has been triaged.
    ///
    /// A non-clean verdict wins. Otherwise the editor's own code is
    /// passed through, except that codes colliding with a triage verdict
    /// (10, 20) and death by signal become 1.
    #[must_use]
    pub fn ci_exit_code(&self, verdict: Verdict) -> i32 {
        if verdict != Verdict::Clean {
            return verdict.exit_code();
        }
        match self.exit_code {
            Some(0) => 0,
            Some(code) if is_verdict_code(code) => {
                tracing::warn!("Editor exit code {code} collides with a triage verdict");
                1
            }
            Some(code) => code,
            None => 1,
        }
    }
}

fn is_verdict_code(code: i32) -> bool {
    code == Verdict::LicenseFailure.exit_code() || code == Verdict::VersionMismatch.exit_code()
}

impl BatchBuild {
    /// Create a build with no extra arguments.
    #[must_use]
    pub fn new(
        editor: impl Into<PathBuf>,
        project_path: impl Into<PathBuf>,
        build_target: BuildTarget,
        execute_method: impl Into<String>,
        log_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            editor: editor.into(),
            project_path: project_path.into(),
            build_target,
            execute_method: execute_method.into(),
            log_file: log_file.into(),
            extra_args: Vec::new(),
        }
    }

    /// Arguments passed to the editor, in order.
    #[must_use]
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "-batchmode".to_string(),
            "-nographics".to_string(),
            "-quit".to_string(),
            "-projectPath".to_string(),
            path_arg(&self.project_path),
            "-buildTarget".to_string(),
            self.build_target.engine_name().to_string(),
            "-executeMethod".to_string(),
            self.execute_method.clone(),
            "-logFile".to_string(),
            path_arg(&self.log_file),
        ];
        args.extend(self.extra_args.iter().cloned());
        args
    }

    /// Shell-style rendering of the full command, for logs and dry runs.
    #[must_use]
    pub fn command_line(&self) -> String {
        std::iter::once(path_arg(&self.editor))
            .chain(self.args())
            .map(|arg| shell_quote(&arg))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Process builder for the editor invocation.
    #[must_use]
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.editor);
        command.args(self.args());
        command
    }

    /// Run the build and wait for the editor to exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor cannot be launched.
    pub fn run(&self) -> Result<BuildOutcome, BuildError> {
        tracing::info!("Running: {}", self.command_line());

        let status = self
            .command()
            .status()
            .map_err(|e| BuildError::LaunchError {
                path: self.editor.display().to_string(),
                source: e,
            })?;

        let outcome = BuildOutcome {
            exit_code: status.code(),
            log_file: self.log_file.clone(),
        };
        if outcome.succeeded() {
            tracing::info!("Build finished successfully");
        } else {
            tracing::warn!("Build exited with {:?}", outcome.exit_code);
        }
        Ok(outcome)
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=+@%,".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_build() -> BatchBuild {
        BatchBuild::new(
            "/opt/unity/Editor/Unity",
            "/work/game",
            BuildTarget::StandaloneLinux64,
            "BuildScript.PerformBuild",
            "/work/logs/build.log",
        )
    }

    #[test]
    fn test_args_contract() {
        let build = create_test_build();
        assert_eq!(
            build.args(),
            [
                "-batchmode",
                "-nographics",
                "-quit",
                "-projectPath",
                "/work/game",
                "-buildTarget",
                "StandaloneLinux64",
                "-executeMethod",
                "BuildScript.PerformBuild",
                "-logFile",
                "/work/logs/build.log",
            ]
        );
    }

    #[test]
    fn test_extra_args_are_appended() {
        let mut build = create_test_build();
        build.extra_args = vec!["-username".to_string(), "ci@example.com".to_string()];
        let args = build.args();
        assert_eq!(&args[args.len() - 2..], ["-username", "ci@example.com"]);
    }

    #[test]
    fn test_command_line_quotes_spaces() {
        let mut build = create_test_build();
        build.project_path = PathBuf::from("/work/my game");
        let line = build.command_line();
        assert!(line.starts_with("/opt/unity/Editor/Unity -batchmode"));
        assert!(line.contains("-projectPath '/work/my game'"));
    }

    #[test]
    fn test_target_parsing() {
        assert_eq!("webgl".parse::<BuildTarget>().unwrap(), BuildTarget::WebGl);
        assert_eq!(
            "StandaloneOSX".parse::<BuildTarget>().unwrap(),
            BuildTarget::StandaloneOsx
        );
        let err = "Switch".parse::<BuildTarget>().unwrap_err();
        assert!(err.to_string().contains("StandaloneLinux64"));
    }

    #[test]
    fn test_ci_exit_code() {
        let outcome = |exit_code| BuildOutcome {
            exit_code,
            log_file: PathBuf::from("build.log"),
        };

        assert_eq!(outcome(Some(0)).ci_exit_code(Verdict::Clean), 0);
        assert_eq!(outcome(Some(3)).ci_exit_code(Verdict::Clean), 3);
        assert_eq!(outcome(Some(3)).ci_exit_code(Verdict::LicenseFailure), 10);
        assert_eq!(outcome(Some(0)).ci_exit_code(Verdict::VersionMismatch), 20);
        assert_eq!(outcome(Some(10)).ci_exit_code(Verdict::Clean), 1);
        assert_eq!(outcome(Some(20)).ci_exit_code(Verdict::Clean), 1);
        assert_eq!(outcome(None).ci_exit_code(Verdict::Clean), 1);
    }

    #[test]
    fn test_missing_editor_fails_to_launch() {
        let mut build = create_test_build();
        build.editor = PathBuf::from("/definitely/not/an/editor");
        assert!(matches!(build.run(), Err(BuildError::LaunchError { .. })));
    }
}
