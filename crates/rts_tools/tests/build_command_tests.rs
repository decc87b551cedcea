//! Tests for the `rts-tools build-command` subcommand.

use std::path::Path;
use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rts-tools"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_prints_command_without_running() {
    let output = run_cli(&[
        "build-command",
        "--editor",
        "/definitely/not/an/editor",
        "--project",
        "/work/game",
        "--target",
        "webgl",
        "--log-file",
        "/work/build.log",
        "--",
        "-username",
        "ci",
    ]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        "/definitely/not/an/editor -batchmode -nographics -quit -projectPath /work/game \
         -buildTarget WebGL -executeMethod BuildScript.PerformBuild -logFile /work/build.log \
         -username ci"
    );
}

#[test]
fn test_unknown_target_is_rejected() {
    let output = run_cli(&["build-command", "--editor", "/x", "--target", "Switch"]);
    assert_eq!(output.status.code(), Some(2));
}

/// Write a stand-in editor that logs `line` to its `-logFile` and exits with `code`.
#[cfg(unix)]
fn write_fake_editor(dir: &Path, name: &str, line: &str, code: i32) -> String {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    let script = format!(
        "#!/bin/sh\n\
         while [ \"$#\" -gt 0 ]; do\n\
         \x20 if [ \"$1\" = \"-logFile\" ]; then shift; log=\"$1\"; fi\n\
         \x20 shift\n\
         done\n\
         echo '{line}' > \"$log\"\n\
         exit {code}\n"
    );
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path.display().to_string()
}

// All fake editors are written before any is launched, so no script is
// still open for writing while another process forks.
#[cfg(unix)]
#[test]
fn test_run_triages_editor_log() {
    let dir = tempfile::tempdir().unwrap();
    let license = write_fake_editor(dir.path(), "license.sh", "No valid Unity license", 3);
    let failed = write_fake_editor(dir.path(), "failed.sh", "Compilation failed", 3);
    let colliding = write_fake_editor(dir.path(), "colliding.sh", "Compilation failed", 20);
    let clean = write_fake_editor(dir.path(), "clean.sh", "Build Finished", 0);

    let run = |editor: &str| {
        let log = format!("{editor}.log");
        let output = run_cli(&[
            "build-command",
            "--editor",
            editor,
            "--project",
            &dir.path().display().to_string(),
            "--log-file",
            &log,
            "--run",
        ]);
        assert!(Path::new(&log).exists(), "editor did not write {log}");
        output.status.code()
    };

    // Triage verdict beats the editor's own failure code
    assert_eq!(run(&license), Some(10));
    // Clean log: editor's code passes through
    assert_eq!(run(&failed), Some(3));
    // Editor codes that look like verdicts are remapped
    assert_eq!(run(&colliding), Some(1));
    assert_eq!(run(&clean), Some(0));
}
