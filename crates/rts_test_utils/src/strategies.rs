//! Property-based testing strategies.

use proptest::collection::vec;
use proptest::prelude::*;

/// A log line that cannot contain any of the default failure patterns.
///
/// Every default pattern includes an uppercase letter, and these lines
/// never do.
pub fn noise_line() -> impl Strategy<Value = String> {
    "[a-z0-9 :\\[\\]./_-]{0,60}"
}

/// A multi-line log made only of [`noise_line`]s.
pub fn noise_lines() -> impl Strategy<Value = Vec<String>> {
    vec(noise_line(), 0..40)
}
