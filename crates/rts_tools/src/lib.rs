//! # RTS Development Tools
//!
//! Command-line tools for development and CI:
//! - Data loaders and validators
//! - Headless batch-mode build invocation
//! - CI build log triage

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod batch_build;
pub mod loader;
pub mod triage;
pub mod validate;
