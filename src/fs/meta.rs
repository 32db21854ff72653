//! Classification of ignorable per-entry scan errors.
//!
//! A tree with ownership drift is expected to be partially unreadable; that
//! is the symptom being diagnosed, not a scan failure. The ignorable set is
//! deliberately narrow and lives in one place so silent-failure scope cannot
//! widen unnoticed.

use std::io;

/// Errors tolerated for individual entries during a scan: the entry vanished
/// between listing and stat, or its metadata is not readable at our
/// privilege level. Everything else still aborts the affected subtree read.
#[must_use]
pub fn is_ignorable(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vanished_and_denied_are_ignorable() {
        assert!(is_ignorable(&io::Error::from(io::ErrorKind::NotFound)));
        assert!(is_ignorable(&io::Error::from(
            io::ErrorKind::PermissionDenied
        )));
    }

    #[test]
    fn other_io_errors_are_not() {
        assert!(!is_ignorable(&io::Error::from(io::ErrorKind::Interrupted)));
        assert!(!is_ignorable(&io::Error::from(io::ErrorKind::InvalidData)));
    }
}
