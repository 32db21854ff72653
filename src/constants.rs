//! Shared crate-wide constants for Reclaim.
//!
//! Centralizes magic values and default labels used across modules.
//! Adjusting these here will propagate through the crate.

/// Orchestration config filename checked directly under the scan root.
pub const COMPOSE_FILE_NAME: &str = "docker-compose.yml";

/// Literal token whose presence in the compose file counts as a user mapping.
/// Substring presence is sufficient; the file is never parsed as YAML.
pub const USER_MAPPING_TOKEN: &str = "user:";

/// Directory base names never descended into during a scan.
/// Matched against the last path segment only, never by substring.
pub const EXCLUDED_DIRS: &[&str] = &[
    "venv",
    ".venv",
    ".git",
    "__pycache__",
    "node_modules",
    ".pytest_cache",
    ".mypy_cache",
    "target",
];

/// Default wall-clock budget for the privileged batch chown. On expiry the
/// child is killed and the repair reports failure; there is no retry.
pub const DEFAULT_CHOWN_TIMEOUT_MS: u64 = 60_000;

/// Poll interval in milliseconds while waiting on the privileged child
/// process (see `adapters/elevation/sudo.rs`).
pub const CHILD_POLL_MS: u64 = 25;

/// Number of mismatched paths shown in a dry-run preview before truncation.
pub const DRY_RUN_PREVIEW_LIMIT: usize = 5;

/// Elevation prefix and ownership-change command for the default runner.
pub const ELEVATION_CMD: &str = "sudo";
pub const CHOWN_CMD: &str = "chown";

/// UUIDv5 namespace tag for deterministic scan/fix ids.
pub const NS_TAG: &str = "https://reclaim/ownership";

/// Sentinel uid/gid reported on platforms without numeric file ownership.
pub const FALLBACK_UID: u32 = 1000;
pub const FALLBACK_GID: u32 = 1000;
