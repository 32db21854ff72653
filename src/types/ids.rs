//! Deterministic UUIDv5 identifiers for scans and fixes.
//!
//! The UUID namespace is derived from a stable tag (`NS_TAG`) so that
//! `scan_id` and `fix_id` are reproducible across runs for the same root and
//! path sequence, letting repeated facts correlate.
use std::fmt::Write;
use std::path::Path;

use uuid::Uuid;

use crate::constants::NS_TAG;

/// Internal: return the UUID namespace used for deterministic IDs.
fn namespace() -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, NS_TAG.as_bytes())
}

/// Compute a deterministic UUIDv5 for a scan over `root`.
#[must_use]
pub fn scan_id(root: &Path) -> Uuid {
    Uuid::new_v5(&namespace(), root.to_string_lossy().as_bytes())
}

/// Compute a deterministic UUIDv5 for a fix as a function of the scan ID and
/// the ordered target path list.
#[must_use]
pub fn fix_id(scan_id: &Uuid, paths: &[std::path::PathBuf]) -> Uuid {
    let mut s = String::new();
    for p in paths {
        let _ = writeln!(s, "{}", p.to_string_lossy());
    }
    Uuid::new_v5(scan_id, s.as_bytes())
}
