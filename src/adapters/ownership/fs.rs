// Default OwnershipOracle implementation using OS metadata (Unix-only)

use std::path::Path;

use crate::adapters::OwnershipOracle;
use crate::types::errors::{Error, ErrorKind, Result};
use crate::types::OwnershipInfo;

#[derive(Copy, Clone, Debug, Default)]
pub struct FsOwnershipOracle;

impl OwnershipOracle for FsOwnershipOracle {
    fn owner_of(&self, path: &Path) -> Result<OwnershipInfo> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;
            let md = std::fs::symlink_metadata(path).map_err(|e| Error {
                kind: ErrorKind::Io,
                msg: format!("metadata: {e}"),
            })?;
            Ok(OwnershipInfo {
                uid: md.uid(),
                gid: md.gid(),
            })
        }
        #[cfg(not(unix))]
        {
            let _ = path;
            Err(Error {
                kind: ErrorKind::UnsupportedPlatform,
                msg: "OwnershipOracle not supported on this platform".into(),
            })
        }
    }
}
