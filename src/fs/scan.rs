//! Recursive enumeration of regular files with exclusion pruning.
//!
//! Exclusions are applied at directory-entry granularity before descending,
//! so excluded subtrees (dependency caches, VCS metadata, virtualenvs) are
//! never stat'ed. Matching is against the entry's base name only; a project
//! directory that merely contains an excluded name as a substring is walked
//! normally.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::fs::meta::is_ignorable;

/// Enumerate every regular file reachable from `root`, pruning directories
/// whose base name appears in `exclude`. Entries are visited in name order
/// for deterministic output. Symlinks are never followed.
///
/// An unreadable or missing `root` yields an empty list; an absent project
/// directory is not cause to abort the caller.
#[must_use]
pub fn regular_files(root: &Path, exclude: &[String]) -> Vec<PathBuf> {
    let root = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
    let mut out = Vec::new();
    visit(&root, exclude, &mut out);
    out
}

fn visit(dir: &Path, exclude: &[String], out: &mut Vec<PathBuf>) {
    let reader = match std::fs::read_dir(dir) {
        Ok(r) => r,
        Err(_) => return,
    };
    let mut entries: Vec<_> = reader.filter_map(std::result::Result::ok).collect();
    entries.sort_by_key(std::fs::DirEntry::file_name);

    for entry in entries {
        // DirEntry::file_type does not traverse symlinks.
        let ftype = match entry.file_type() {
            Ok(t) => t,
            // Vanished or unreadable entries are the symptom being diagnosed.
            Err(ref e) if is_ignorable(e) => continue,
            // Anything else is unexpected here but still must not abort the scan.
            Err(_) => continue,
        };
        if ftype.is_dir() {
            if is_excluded(&entry.file_name(), exclude) {
                continue;
            }
            visit(&entry.path(), exclude, out);
        } else if ftype.is_file() {
            out.push(entry.path());
        }
        // Symlinks and special files are not diagnosable mismatches.
    }
}

fn is_excluded(name: &OsStr, exclude: &[String]) -> bool {
    exclude.iter().any(|x| OsStr::new(x) == name)
}
