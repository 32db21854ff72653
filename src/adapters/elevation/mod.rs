use crate::types::{errors::Result, ChownRequest};

mod sudo;
pub use sudo::SudoChownRunner;

/// Privileged batch ownership change. One invocation covers every path in
/// the request; implementations must bound their own wall-clock time by
/// `request.timeout` and must never stream output to the terminal.
pub trait ElevationRunner: Send + Sync {
    /// # Errors
    /// Returns an error when the privileged call cannot be issued on this
    /// platform, exits non-zero, or exceeds the timeout.
    fn chown_batch(&self, request: &ChownRequest) -> Result<()>;
}
