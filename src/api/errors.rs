//! Stable error identifiers and exit codes surfaced in `fix.result` facts.

use crate::types::errors::ErrorKind;

/// Stable machine-readable identifier for a failure class.
#[must_use]
pub fn error_id(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Io => "E_GENERIC",
        ErrorKind::UnsupportedPlatform => "E_UNSUPPORTED",
        ErrorKind::Elevation => "E_ELEVATION",
        ErrorKind::Timeout => "E_TIMEOUT",
    }
}

/// Suggested process exit code for a failure class; callers may use these
/// when surfacing fix failures to an operator.
#[must_use]
pub fn exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::Io => 1,
        ErrorKind::UnsupportedPlatform => 20,
        ErrorKind::Elevation => 40,
        ErrorKind::Timeout => 41,
    }
}
