//! Diagnose stage: read-only ownership scan of the configured root.
//!
//! Side-effects:
//! - Emits a `scan` fact per mismatched path and one `scan.summary` fact.
//! - Per-file stat failures in the classified ignorable set are skipped;
//!   they are expected on a drifted tree and never abort the scan.

use std::path::PathBuf;

use log::Level;
use serde_json::json;

use crate::api::Reclaim;
use crate::fs;
use crate::logging::audit::{AuditCtx, AuditMode};
use crate::logging::{AuditSink, FactsEmitter, StageLogger, TS_ZERO};
use crate::types::ids::scan_id;
use crate::types::DiagnoseReport;

pub(super) fn run<E: FactsEmitter, A: AuditSink>(api: &Reclaim<E, A>) -> DiagnoseReport {
    let root = std::path::absolute(&api.policy.scope.root)
        .unwrap_or_else(|_| api.policy.scope.root.clone());
    let files = fs::scan::regular_files(&root, &api.policy.scope.exclude_dirs);

    let mut mismatches: Vec<PathBuf> = Vec::new();
    for path in &files {
        match api.owner.owner_of(path) {
            Ok(info) if info.uid != api.identity.uid => mismatches.push(path.clone()),
            Ok(_) => {}
            // The file vanished or its metadata is unreadable at our
            // privilege level; both are symptoms, not scan errors.
            Err(_) => {}
        }
    }

    let sid = scan_id(&root);
    // Diagnosis is read-only; facts use the zero timestamp for determinism.
    let tctx = AuditCtx::new(
        &api.facts as &dyn FactsEmitter,
        sid.to_string(),
        TS_ZERO.to_string(),
        AuditMode {
            dry_run: true,
            redact: true,
        },
    );
    let slog = StageLogger::new(&tctx);
    for path in &mismatches {
        slog.scan()
            .path(path.display().to_string())
            .field("foreign_owner", json!(true))
            .emit_warn();
    }
    slog.scan_summary()
        .field("files_seen", json!(files.len()))
        .field("mismatches", json!(mismatches.len()))
        .emit_success();

    api.audit.log(
        Level::Info,
        &format!(
            "diagnose: {} of {} files under {} owned by a foreign uid",
            mismatches.len(),
            files.len(),
            root.display()
        ),
    );

    DiagnoseReport {
        scan_id: sid,
        root,
        mismatches,
        files_seen: files.len(),
    }
}
