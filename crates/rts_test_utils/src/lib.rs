//! # RTS Test Utilities
//!
//! Shared testing utilities for all crates:
//! - Data catalog fixtures
//! - Sample CI build logs
//! - Property-based testing strategies

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod logs;
pub mod strategies;

/// Re-export proptest for convenience.
pub use proptest;
