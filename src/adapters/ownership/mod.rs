use std::path::Path;

use crate::types::{errors::Result, OwnershipInfo};

mod fs;
pub use fs::FsOwnershipOracle;

pub trait OwnershipOracle: Send + Sync {
    /// Get ownership information for the specified path.
    /// # Errors
    /// Returns an error if ownership information cannot be determined.
    fn owner_of(&self, path: &Path) -> Result<OwnershipInfo>;
}
