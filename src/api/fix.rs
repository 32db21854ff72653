//! Fix stage: converts diagnosed paths into one privileged batch chown.
//!
//! Side-effects:
//! - Emits `fix.attempt` before the privileged call and `fix.result` after.
//! - Dry-run mutates nothing, issues no privileged call, and cannot fail.
//! - Commit on a non-Unix platform fails before any elevation call.
//! - The batch call is all-or-nothing at this abstraction level: any
//!   elevation failure fails the whole fix, with the cause in the report.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use log::Level;
use serde_json::json;

use crate::api::errors::{error_id, exit_code};
use crate::api::Reclaim;
use crate::logging::audit::{AuditCtx, AuditMode};
use crate::logging::{ts_for_mode, AuditSink, FactsEmitter, StageLogger};
use crate::types::errors::{Error, ErrorKind};
use crate::types::ids::{fix_id, scan_id};
use crate::types::{ApplyMode, ChownRequest, FixReport};

pub(super) fn run<E: FactsEmitter, A: AuditSink>(
    api: &Reclaim<E, A>,
    paths: &[PathBuf],
    mode: ApplyMode,
) -> FixReport {
    let t0 = Instant::now();
    let dry = matches!(mode, ApplyMode::DryRun);
    let root = std::path::absolute(&api.policy.scope.root)
        .unwrap_or_else(|_| api.policy.scope.root.clone());
    let sid = scan_id(&root);
    let fid = fix_id(&sid, paths);

    let tctx = AuditCtx::new(
        &api.facts as &dyn FactsEmitter,
        sid.to_string(),
        ts_for_mode(mode),
        AuditMode {
            dry_run: dry,
            redact: dry,
        },
    );
    let slog = StageLogger::new(&tctx);

    let mut report = FixReport::new(mode, paths.len());
    let limit = api.policy.remediation.preview_limit;
    report.preview = paths
        .iter()
        .take(limit)
        .map(|p| p.display().to_string())
        .collect();
    report.hidden = paths.len().saturating_sub(limit);

    if paths.is_empty() {
        api.audit
            .log(Level::Info, "fix: no ownership mismatches detected");
        slog.fix_result()
            .field("fix_id", json!(fid.to_string()))
            .field("paths", json!(0))
            .emit_success();
        report.duration_ms = t0.elapsed().as_millis() as u64;
        return report;
    }

    if dry {
        api.audit.log(
            Level::Info,
            &format!(
                "[dry-run] found {} files owned by root/other uids",
                paths.len()
            ),
        );
        for line in &report.preview {
            api.audit.log(Level::Info, &format!("  {line}"));
        }
        if report.hidden > 0 {
            api.audit
                .log(Level::Info, &format!("  ... and {} more", report.hidden));
        }
        api.audit
            .log(Level::Info, "fix: re-run in commit mode to apply repairs");
        slog.fix_result()
            .field("fix_id", json!(fid.to_string()))
            .field("paths", json!(paths.len()))
            .emit_success();
        report.duration_ms = t0.elapsed().as_millis() as u64;
        return report;
    }

    // Commit: gate on platform before touching the elevation runner so an
    // unsupported host never spawns anything.
    if !cfg!(unix) {
        let err = Error::new(
            ErrorKind::UnsupportedPlatform,
            "ownership repair is only supported on Unix hosts",
        );
        api.audit.log(Level::Error, &err.to_string());
        slog.fix_result()
            .field("fix_id", json!(fid.to_string()))
            .field("error_id", json!(error_id(err.kind)))
            .field("exit_code", json!(exit_code(err.kind)))
            .emit_failure();
        report.errors.push(err.to_string());
        report.duration_ms = t0.elapsed().as_millis() as u64;
        return report;
    }

    let request = ChownRequest {
        uid: api.identity.uid,
        gid: api.identity.gid,
        paths: paths.to_vec(),
        timeout: Duration::from_millis(api.policy.remediation.chown_timeout_ms),
    };
    api.audit.log(
        Level::Info,
        &format!("fix: applying repairs to {} paths", paths.len()),
    );
    slog.fix_attempt()
        .field("fix_id", json!(fid.to_string()))
        .field("paths", json!(paths.len()))
        .field("target", json!(request.target()))
        .emit_success();

    match api.elevation.chown_batch(&request) {
        Ok(()) => {
            report.executed = true;
            api.audit
                .log(Level::Info, "fix: ownership reclaimed successfully");
            slog.fix_result()
                .field("fix_id", json!(fid.to_string()))
                .field("paths", json!(paths.len()))
                .field("duration_ms", json!(t0.elapsed().as_millis() as u64))
                .emit_success();
        }
        Err(e) => {
            api.audit
                .log(Level::Error, &format!("fix: failed to repair ownership: {e}"));
            slog.fix_result()
                .field("fix_id", json!(fid.to_string()))
                .field("error_id", json!(error_id(e.kind)))
                .field("exit_code", json!(exit_code(e.kind)))
                .emit_failure();
            report.errors.push(e.to_string());
        }
    }
    report.duration_ms = t0.elapsed().as_millis() as u64;
    report
}
