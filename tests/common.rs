//! Shared test helpers for the reclaim crate integration tests.
#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Mutex};

use log::Level;
use serde_json::Value;

use reclaim::adapters::{ElevationRunner, OwnershipOracle};
use reclaim::types::errors::{Error, ErrorKind, Result};
use reclaim::types::{ChownRequest, OwnershipInfo};

/// A simple in-memory emitter to capture facts during tests.
#[derive(Clone, Default, Debug)]
pub struct TestEmitter {
    pub events: Arc<Mutex<Vec<(String, String, String, Value)>>>,
}

impl reclaim::logging::FactsEmitter for TestEmitter {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value) {
        self.events
            .lock()
            .unwrap()
            .push((subsystem.into(), event.into(), decision.into(), fields));
    }
}

/// An audit sink that records human-oriented lines for assertions.
#[derive(Clone, Default)]
pub struct TestAudit {
    pub lines: Arc<Mutex<Vec<(Level, String)>>>,
}

impl reclaim::logging::AuditSink for TestAudit {
    fn log(&self, level: Level, msg: &str) {
        self.lines.lock().unwrap().push((level, msg.to_string()));
    }
}

/// Ownership oracle answering from file base names; everything else is
/// owned by `default_uid`. Lets tests fabricate foreign-owned files without
/// privileges.
#[derive(Clone, Default)]
pub struct NameOracle {
    pub default_uid: u32,
    pub foreign: Vec<(String, u32)>,
}

impl OwnershipOracle for NameOracle {
    fn owner_of(&self, path: &Path) -> Result<OwnershipInfo> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let uid = self
            .foreign
            .iter()
            .find(|(n, _)| *n == name)
            .map_or(self.default_uid, |(_, uid)| *uid);
        Ok(OwnershipInfo { uid, gid: uid })
    }
}

/// Elevation runner that records every request instead of spawning anything,
/// optionally failing with an injected error kind.
#[derive(Clone, Default)]
pub struct RecordingRunner {
    pub calls: Arc<Mutex<Vec<ChownRequest>>>,
    pub fail_with: Option<ErrorKind>,
}

impl ElevationRunner for RecordingRunner {
    fn chown_batch(&self, request: &ChownRequest) -> Result<()> {
        self.calls.lock().unwrap().push(request.clone());
        match self.fail_with {
            Some(kind) => Err(Error::new(kind, "injected failure")),
            None => Ok(()),
        }
    }
}

/// Create a temporary root directory for building scan trees.
pub fn with_temp_root() -> tempfile::TempDir {
    tempfile::tempdir().expect("tempdir")
}

/// Write `contents` at `root/rel`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, contents: &[u8]) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}
