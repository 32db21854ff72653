// Facade for API module; delegates to submodules under src/api/

use std::path::PathBuf;

use crate::adapters::{ElevationRunner, FsOwnershipOracle, OwnershipOracle, SudoChownRunner};
use crate::logging::{AuditSink, FactsEmitter};
use crate::policy::Policy;
use crate::types::{ApplyMode, ComposeAdvisory, DiagnoseReport, FixReport, HostIdentity};

mod compose;
mod diagnose;
pub mod errors;
mod fix;

pub struct Reclaim<E: FactsEmitter, A: AuditSink> {
    facts: E,
    audit: A,
    policy: Policy,
    owner: Box<dyn OwnershipOracle>, // substituted in tests and on exotic platforms
    elevation: Box<dyn ElevationRunner>, // substituted in tests
    identity: HostIdentity,
}

impl<E: FactsEmitter, A: AuditSink> Reclaim<E, A> {
    pub fn new(facts: E, audit: A, policy: Policy) -> Self {
        Self {
            facts,
            audit,
            policy,
            owner: Box::new(FsOwnershipOracle),
            elevation: Box::new(SudoChownRunner),
            identity: HostIdentity::current(),
        }
    }

    #[must_use]
    pub fn with_ownership_oracle(mut self, owner: Box<dyn OwnershipOracle>) -> Self {
        self.owner = owner;
        self
    }

    #[must_use]
    pub fn with_elevation_runner(mut self, elevation: Box<dyn ElevationRunner>) -> Self {
        self.elevation = elevation;
        self
    }

    #[must_use]
    pub fn with_identity(mut self, identity: HostIdentity) -> Self {
        self.identity = identity;
        self
    }

    /// Scan the configured root for files owned by a foreign uid.
    /// Read-only; never fails. See [`DiagnoseReport`].
    pub fn diagnose(&self) -> DiagnoseReport {
        diagnose::run(self)
    }

    /// Best-effort check that the compose file declares a user mapping.
    /// Returns an advisory only when the file exists, is readable, and lacks
    /// the mapping token. Never fails and never blocks diagnose/fix.
    pub fn check_compose(&self) -> Option<ComposeAdvisory> {
        compose::run(self)
    }

    /// Repair ownership of `paths` back to the host identity. Dry-run by
    /// default; commit issues a single privileged batch chown with a bounded
    /// timeout. Check [`FixReport::ok`] for the outcome.
    pub fn fix(&self, paths: &[PathBuf], mode: ApplyMode) -> FixReport {
        fix::run(self, paths, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{AuditSink, FactsEmitter};
    use log::Level;
    use serde_json::Value;

    #[derive(Default, Clone)]
    struct TestEmitter {
        events: std::sync::Arc<std::sync::Mutex<Vec<(String, String, String, Value)>>>,
    }

    impl FactsEmitter for TestEmitter {
        fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value) {
            self.events.lock().unwrap().push((
                subsystem.to_string(),
                event.to_string(),
                decision.to_string(),
                fields,
            ));
        }
    }

    #[derive(Default, Clone)]
    struct TestAudit;
    impl AuditSink for TestAudit {
        fn log(&self, _level: Level, _msg: &str) {}
    }

    #[test]
    fn emits_minimal_facts_for_diagnose_and_dry_run_fix() {
        let facts = TestEmitter::default();
        let audit = TestAudit;
        let td = tempfile::tempdir().unwrap();
        std::fs::write(td.path().join("a.txt"), b"a").unwrap();
        let api = Reclaim::new(facts.clone(), audit, Policy::scan_root(td.path()));

        let report = api.diagnose();
        let _ = api.fix(&report.mismatches, ApplyMode::DryRun);

        let evs = facts.events.lock().unwrap();
        assert!(!evs.is_empty(), "no facts captured");
        for (subsystem, _event, _decision, fields) in evs.iter() {
            assert_eq!(subsystem, "reclaim");
            assert_eq!(
                fields.get("schema_version").and_then(Value::as_i64),
                Some(1),
                "schema_version=1"
            );
            assert!(fields.get("scan_id").is_some());
        }
        // scan_id must be consistent across stages for one root
        let ids: Vec<&str> = evs
            .iter()
            .filter_map(|(_, _, _, f)| f.get("scan_id").and_then(Value::as_str))
            .collect();
        assert!(ids.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn host_owned_tree_diagnoses_clean_with_default_oracle() {
        let td = tempfile::tempdir().unwrap();
        std::fs::write(td.path().join("mine.txt"), b"m").unwrap();
        let api = Reclaim::new(
            TestEmitter::default(),
            TestAudit,
            Policy::scan_root(td.path()),
        );
        let report = api.diagnose();
        assert_eq!(report.files_seen, 1);
        assert!(report.mismatches.is_empty());
    }
}
