use std::path::PathBuf;

use serde::Serialize;
use uuid::Uuid;

use super::plan::ApplyMode;

/// Outcome of a scan: the ordered mismatched paths plus scan telemetry.
/// Serializable so callers can export it alongside the facts stream.
#[derive(Clone, Debug, Serialize)]
pub struct DiagnoseReport {
    pub scan_id: Uuid,
    pub root: PathBuf,
    /// Absolute paths of regular files owned by a foreign uid, in discovery order.
    pub mismatches: Vec<PathBuf>,
    /// Regular files whose ownership was inspected (excluded subtrees not counted).
    pub files_seen: usize,
}

/// Outcome of a remediation attempt (dry-run or commit).
#[derive(Clone, Debug, Serialize)]
pub struct FixReport {
    pub mode: ApplyMode,
    /// Number of paths handed to fix.
    pub mismatched: usize,
    /// First few target paths, for presentation.
    pub preview: Vec<String>,
    /// Paths beyond the preview limit ("+K more").
    pub hidden: usize,
    /// True only when a privileged call was issued and succeeded.
    pub executed: bool,
    pub duration_ms: u64,
    pub errors: Vec<String>,
}

impl FixReport {
    pub(crate) fn new(mode: ApplyMode, mismatched: usize) -> Self {
        Self {
            mode,
            mismatched,
            preview: Vec::new(),
            hidden: 0,
            executed: false,
            duration_ms: 0,
            errors: Vec::new(),
        }
    }

    /// Overall success. Dry-run is always ok; commit is ok only when the
    /// privileged batch call completed cleanly.
    #[must_use]
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Transient recommendation emitted when the compose file lacks a user
/// mapping. Content only; rendering style belongs to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComposeAdvisory {
    /// Name of the config file the advisory refers to.
    pub file_name: String,
    /// Recommended directive block, numeric and portable forms.
    pub snippet: String,
}

impl ComposeAdvisory {
    #[must_use]
    pub fn new(file_name: impl Into<String>, uid: u32, gid: u32) -> Self {
        let snippet = format!(
            "    user: \"{uid}:{gid}\"\n    # Or for better portability across different machines:\n    # user: \"${{UID}}:${{GID}}\""
        );
        Self {
            file_name: file_name.into(),
            snippet,
        }
    }

    /// Full advisory text handed to the presentation layer.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "{} declares no user mapping; container-created files will be \
             owned by the container's uid. Recommended service settings:\n{}",
            self.file_name, self.snippet
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::COMPOSE_FILE_NAME;

    #[test]
    fn advisory_mentions_token_and_file_name() {
        let adv = ComposeAdvisory::new(COMPOSE_FILE_NAME, 1000, 1000);
        let text = adv.render();
        assert!(text.contains("user:"));
        assert!(text.contains("docker-compose.yml"));
        assert!(text.contains("\"1000:1000\""));
        assert!(text.contains("${UID}:${GID}"));
    }
}
