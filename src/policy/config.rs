use std::path::PathBuf;

use crate::constants::{
    COMPOSE_FILE_NAME, DEFAULT_CHOWN_TIMEOUT_MS, DRY_RUN_PREVIEW_LIMIT, EXCLUDED_DIRS,
    USER_MAPPING_TOKEN,
};

/// Policy governs the scan scope, the compose heuristic, and remediation
/// bounds for Reclaim.
///
/// Grouped fields provide clearer ownership and ergonomics.
#[derive(Clone, Debug)]
pub struct Policy {
    pub scope: Scope,
    pub compose: ComposeCheck,
    pub remediation: Remediation,
}

/// Where to scan and which directory names to prune before descending.
#[derive(Clone, Debug)]
pub struct Scope {
    /// Base path of the tree to diagnose. Not validated for existence; a
    /// missing root yields an empty mismatch set.
    pub root: PathBuf,
    /// Directory base names never descended into. Exact-segment match.
    pub exclude_dirs: Vec<String>,
}

/// Compose-file heuristic: fixed filename under the root, literal token.
#[derive(Clone, Debug)]
pub struct ComposeCheck {
    pub file_name: String,
    pub user_token: String,
}

/// Bounds on the privileged repair path.
#[derive(Clone, Debug)]
pub struct Remediation {
    /// Wall-clock budget for the batch chown; on expiry the child is killed.
    pub chown_timeout_ms: u64,
    /// Paths listed before truncating the dry-run preview.
    pub preview_limit: usize,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            scope: Scope {
                root: PathBuf::from("."),
                exclude_dirs: EXCLUDED_DIRS.iter().map(|s| (*s).to_string()).collect(),
            },
            compose: ComposeCheck {
                file_name: COMPOSE_FILE_NAME.to_string(),
                user_token: USER_MAPPING_TOKEN.to_string(),
            },
            remediation: Remediation {
                chown_timeout_ms: DEFAULT_CHOWN_TIMEOUT_MS,
                preview_limit: DRY_RUN_PREVIEW_LIMIT,
            },
        }
    }
}

impl Policy {
    /// Construct a Policy scoped to the given project root, with default
    /// exclusions and remediation bounds.
    #[must_use]
    pub fn scan_root(root: impl Into<PathBuf>) -> Self {
        let mut p = Self::default();
        p.scope.root = root.into();
        p
    }
}
