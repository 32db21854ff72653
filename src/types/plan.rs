use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

/// Execution mode for remediation. Dry-run reports what would change and
/// cannot fail; commit issues the privileged batch ownership change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
pub enum ApplyMode {
    #[default]
    DryRun,
    Commit,
}

/// One privileged batch ownership-change request: every path at once,
/// targeting `uid:gid`, bounded by `timeout`.
#[derive(Clone, Debug)]
pub struct ChownRequest {
    pub uid: u32,
    pub gid: u32,
    pub paths: Vec<PathBuf>,
    pub timeout: Duration,
}

impl ChownRequest {
    /// The `uid:gid` argument as passed to the ownership-change command.
    #[must_use]
    pub fn target(&self) -> String {
        format!("{}:{}", self.uid, self.gid)
    }
}
