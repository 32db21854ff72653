//! Host identity: the invoking user's numeric uid/gid.
//!
//! Captured once by the caller and passed into the facade, so the core never
//! depends on ambient process state. Tests substitute fixed identities.

#[cfg(not(unix))]
use crate::constants::{FALLBACK_GID, FALLBACK_UID};

/// The invoking user's numeric uid/gid on the host. Immutable once captured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostIdentity {
    pub uid: u32,
    pub gid: u32,
}

impl HostIdentity {
    /// Identity of the current process. On platforms without numeric file
    /// ownership this returns a fixed sentinel.
    #[must_use]
    pub fn current() -> Self {
        #[cfg(unix)]
        {
            Self {
                uid: rustix::process::getuid().as_raw(),
                gid: rustix::process::getgid().as_raw(),
            }
        }
        #[cfg(not(unix))]
        {
            Self {
                uid: FALLBACK_UID,
                gid: FALLBACK_GID,
            }
        }
    }

    /// The `uid:gid` target string handed to the ownership-change command.
    #[must_use]
    pub fn uid_gid(&self) -> String {
        format!("{}:{}", self.uid, self.gid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uid_gid_renders_colon_separated() {
        let id = HostIdentity { uid: 1000, gid: 984 };
        assert_eq!(id.uid_gid(), "1000:984");
    }
}
