//! Compose-config check: a cheap heuristic nudge, not a validator.
//!
//! Side-effects:
//! - Emits one `compose.check` fact when the file is readable.
//! - Logs the rendered advisory through the audit sink when the mapping
//!   token is absent.

use log::Level;
use serde_json::json;

use crate::api::Reclaim;
use crate::logging::audit::{AuditCtx, AuditMode};
use crate::logging::{AuditSink, FactsEmitter, StageLogger, TS_ZERO};
use crate::types::ids::scan_id;
use crate::types::ComposeAdvisory;

pub(super) fn run<E: FactsEmitter, A: AuditSink>(api: &Reclaim<E, A>) -> Option<ComposeAdvisory> {
    let root = std::path::absolute(&api.policy.scope.root)
        .unwrap_or_else(|_| api.policy.scope.root.clone());
    let path = root.join(&api.policy.compose.file_name);

    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        // Missing, unreadable, or non-UTF-8: the check is best-effort and
        // must never block the diagnose/fix flow.
        Err(_) => return None,
    };

    let tctx = AuditCtx::new(
        &api.facts as &dyn FactsEmitter,
        scan_id(&root).to_string(),
        TS_ZERO.to_string(),
        AuditMode {
            dry_run: true,
            redact: true,
        },
    );
    let slog = StageLogger::new(&tctx);

    if content.contains(&api.policy.compose.user_token) {
        slog.compose_check()
            .path(path.display().to_string())
            .field("user_mapping", json!(true))
            .emit_success();
        return None;
    }

    let advisory = ComposeAdvisory::new(
        api.policy.compose.file_name.clone(),
        api.identity.uid,
        api.identity.gid,
    );
    slog.compose_check()
        .path(path.display().to_string())
        .field("user_mapping", json!(false))
        .emit_warn();
    api.audit.log(Level::Warn, &advisory.render());
    Some(advisory)
}
