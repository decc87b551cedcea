//! Crystalite RTS - Development Tools
//!
//! # Usage
//!
//! ```bash
//! # Validate designer data
//! cargo run -p rts_tools -- validate assets/data
//!
//! # Triage CI build logs (exit 0 clean, 10 license, 20 version mismatch)
//! cargo run -p rts_tools -- triage artifacts/logs --json
//!
//! # Print (or run) the headless build command
//! cargo run -p rts_tools -- build-command --editor /opt/unity/Editor/Unity \
//!     --project . --target StandaloneLinux64 --method BuildScript.PerformBuild \
//!     --log-file build.log --run
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rts_tools::batch_build::{BatchBuild, BuildTarget};
use rts_tools::triage::{triage_path, TriagePatterns, TriageReport, Verdict};
use rts_tools::validate::validate_data_directory;

#[derive(Parser)]
#[command(name = "rts-tools")]
#[command(about = "Development tools for Crystalite RTS")]
#[command(version)]
struct Cli {
    /// Enable verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate data files
    Validate {
        /// Path to data directory or a single RON file
        #[arg(default_value = "assets/data")]
        path: PathBuf,
    },

    /// Classify CI build logs and exit with the matching code
    Triage {
        /// Log file or directory of logs
        path: PathBuf,

        /// RON file overriding the failure patterns
        #[arg(long)]
        patterns: Option<PathBuf>,

        /// Print the report as JSON on stdout
        #[arg(long)]
        json: bool,
    },

    /// Print the headless engine build command, optionally running it
    BuildCommand {
        /// Editor executable
        #[arg(long)]
        editor: PathBuf,

        /// Project root
        #[arg(long, default_value = ".")]
        project: PathBuf,

        /// Build target (e.g. StandaloneLinux64, WebGL)
        #[arg(long, default_value = "StandaloneLinux64")]
        target: BuildTarget,

        /// Static build method for the editor to execute
        #[arg(long, default_value = "BuildScript.PerformBuild")]
        method: String,

        /// Log file for the editor to write
        #[arg(long, default_value = "build.log")]
        log_file: PathBuf,

        /// Run the build, then triage its log
        #[arg(long)]
        run: bool,

        /// Extra arguments passed through to the editor
        #[arg(last = true)]
        extra: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging to stderr (stdout is for reports)
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::from_level(log_level).into())
                .from_env_lossy(),
        )
        .init();

    let code = match cli.command {
        Commands::Validate { path } => cmd_validate(&path),
        Commands::Triage {
            path,
            patterns,
            json,
        } => cmd_triage(&path, patterns.as_deref(), json),
        Commands::BuildCommand {
            editor,
            project,
            target,
            method,
            log_file,
            run,
            extra,
        } => {
            let mut build = BatchBuild::new(editor, project, target, method, log_file);
            build.extra_args = extra;
            cmd_build(&build, run)
        }
    };

    std::process::exit(code);
}

/// Validate designer data.
fn cmd_validate(path: &Path) -> i32 {
    tracing::info!("Validating data files in: {}", path.display());
    match validate_data_directory(path) {
        Ok(summary) => {
            tracing::info!("Validation passed");
            println!("{summary}");
            0
        }
        Err(e) => {
            tracing::error!("Validation failed: {e}");
            1
        }
    }
}

fn load_patterns(path: Option<&Path>) -> Option<TriagePatterns> {
    match path {
        None => Some(TriagePatterns::default()),
        Some(path) => match TriagePatterns::from_file(path) {
            Ok(patterns) => Some(patterns),
            Err(e) => {
                tracing::error!("{e}");
                None
            }
        },
    }
}

/// Triage logs and return the verdict's exit code.
fn cmd_triage(path: &Path, patterns: Option<&Path>, json: bool) -> i32 {
    let Some(patterns) = load_patterns(patterns) else {
        return 1;
    };

    let report = match triage_path(path, &patterns) {
        Ok(report) => report,
        Err(e) => {
            // Unreadable artifacts are indeterminate, not a failure.
            tracing::error!("{e}");
            println!("triage: indeterminate ({e})");
            return Verdict::Clean.exit_code();
        }
    };

    print_report(&report, json);
    report.exit_code
}

fn print_report(report: &TriageReport, json: bool) {
    if json {
        match serde_json::to_string_pretty(report) {
            Ok(text) => println!("{text}"),
            Err(e) => tracing::error!("Failed to serialize report: {e}"),
        }
        return;
    }

    if let Some(diagnostic) = &report.diagnostic {
        println!("triage: {diagnostic}");
    }
    for item in &report.findings {
        println!(
            "{}:{}: {} [{}]",
            item.log.display(),
            item.finding.line,
            item.finding.verdict.describe(),
            item.finding.excerpt
        );
    }
    println!(
        "triage: {} (scanned {} log(s), exit {})",
        report.verdict.describe(),
        report.logs_scanned,
        report.exit_code
    );
}

/// Print or run the headless build.
fn cmd_build(build: &BatchBuild, run: bool) -> i32 {
    println!("{}", build.command_line());
    if !run {
        return 0;
    }

    let outcome = match build.run() {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("{e}");
            return 1;
        }
    };

    let patterns = TriagePatterns::default();
    let verdict = match triage_path(&outcome.log_file, &patterns) {
        Ok(report) => {
            print_report(&report, false);
            report.verdict
        }
        Err(e) => {
            tracing::error!("{e}");
            Verdict::Clean
        }
    };
    outcome.ci_exit_code(verdict)
}
