// Default ElevationRunner: `sudo chown uid:gid <paths...>` with bounded wait.

use crate::adapters::ElevationRunner;
use crate::types::errors::Result;
use crate::types::ChownRequest;

#[derive(Copy, Clone, Debug, Default)]
pub struct SudoChownRunner;

impl ElevationRunner for SudoChownRunner {
    fn chown_batch(&self, request: &ChownRequest) -> Result<()> {
        #[cfg(unix)]
        {
            unix::run(request)
        }
        #[cfg(not(unix))]
        {
            let _ = request;
            Err(crate::types::errors::Error {
                kind: crate::types::errors::ErrorKind::UnsupportedPlatform,
                msg: "privileged ownership change requires a Unix platform".into(),
            })
        }
    }
}

#[cfg(unix)]
mod unix {
    use std::io::Read;
    use std::process::{Command, Stdio};
    use std::time::{Duration, Instant};

    use crate::constants::{CHILD_POLL_MS, CHOWN_CMD, ELEVATION_CMD};
    use crate::types::errors::{Error, ErrorKind, Result};
    use crate::types::ChownRequest;

    pub(super) fn run(request: &ChownRequest) -> Result<()> {
        let mut child = Command::new(ELEVATION_CMD)
            .arg(CHOWN_CMD)
            .arg(request.target())
            .args(&request.paths)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error {
                kind: ErrorKind::Elevation,
                msg: format!("spawn {ELEVATION_CMD} {CHOWN_CMD}: {e}"),
            })?;

        let deadline = Instant::now() + request.timeout;
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) => {
                    if Instant::now() >= deadline {
                        // Kill and reap; a stuck elevation prompt must not
                        // hang the caller.
                        let _ = child.kill();
                        let _ = child.wait();
                        return Err(Error {
                            kind: ErrorKind::Timeout,
                            msg: format!(
                                "{ELEVATION_CMD} {CHOWN_CMD} exceeded {} ms",
                                request.timeout.as_millis()
                            ),
                        });
                    }
                    std::thread::sleep(Duration::from_millis(CHILD_POLL_MS));
                }
                Err(e) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(Error {
                        kind: ErrorKind::Io,
                        msg: format!("wait on {ELEVATION_CMD}: {e}"),
                    });
                }
            }
        };

        if status.success() {
            return Ok(());
        }
        // Child has exited; stderr pipe is at EOF and small for chown.
        let mut stderr = String::new();
        if let Some(mut pipe) = child.stderr.take() {
            let _ = pipe.read_to_string(&mut stderr);
        }
        Err(Error {
            kind: ErrorKind::Elevation,
            msg: format!(
                "{ELEVATION_CMD} {CHOWN_CMD} exited with {status}: {}",
                stderr.trim()
            ),
        })
    }
}
