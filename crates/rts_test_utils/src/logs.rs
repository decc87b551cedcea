//! Sample CI build logs.
//!
//! Trimmed from real batch-mode editor output.

/// A build that could not find a license.
pub const LICENSE_FAILURE_LOG: &str = "\
[Licensing::Module] Trying to connect to existing licensing client channel...
[Licensing::Module] Error: Access token is unavailable; failed to update
No valid Unity license activated on this machine.
Exiting without the bug reporter. Application will terminate with return code 1
";

/// A build opened with a different editor than the project was saved with.
pub const VERSION_MISMATCH_LOG: &str = "\
Loading project at /github/workspace
ProjectVersion.txt:
m_EditorVersion: 2021.3.5f1
m_EditorVersionWithRevision: 2021.3.5f1 (40eb3a945986)
Aborting batchmode due to failure
";

/// A build that completed.
pub const CLEAN_LOG: &str = "\
Loading project at /github/workspace
Build Finished, Result: Success.
Exiting batchmode successfully now!
";
