// Audit helpers that emit minimal facts across Reclaim stages.
//
// Side-effects:
// - Emits JSON facts via `FactsEmitter` for the stages `scan`, `scan.summary`,
//   `compose.check`, `fix.attempt`, and `fix.result`.
// - Ensures a minimal envelope is present on every fact: `schema_version`,
//   `ts`, `scan_id`, `path`, `dry_run`.
// - Applies redaction in dry-run to zero timestamps and drop volatile fields.
use serde_json::{json, Value};

use crate::logging::{redact_event, FactsEmitter};

pub(crate) const SCHEMA_VERSION: i64 = 1;

#[derive(Clone, Debug, Default)]
pub(crate) struct AuditMode {
    pub dry_run: bool,
    pub redact: bool,
}

pub(crate) struct AuditCtx<'a> {
    pub facts: &'a dyn FactsEmitter,
    pub scan_id: String,
    pub ts: String,
    pub mode: AuditMode,
}

impl<'a> AuditCtx<'a> {
    pub(crate) fn new(
        facts: &'a dyn FactsEmitter,
        scan_id: String,
        ts: String,
        mode: AuditMode,
    ) -> Self {
        Self {
            facts,
            scan_id,
            ts,
            mode,
        }
    }
}

/// Stage for typed audit emission.
#[derive(Clone, Copy, Debug)]
pub enum Stage {
    Scan,
    ScanSummary,
    ComposeCheck,
    FixAttempt,
    FixResult,
}

impl Stage {
    fn as_event(self) -> &'static str {
        match self {
            Stage::Scan => "scan",
            Stage::ScanSummary => "scan.summary",
            Stage::ComposeCheck => "compose.check",
            Stage::FixAttempt => "fix.attempt",
            Stage::FixResult => "fix.result",
        }
    }
}

/// Decision severity for audit events.
#[derive(Clone, Copy, Debug)]
pub enum Decision {
    Success,
    Failure,
    Warn,
}

impl Decision {
    fn as_str(self) -> &'static str {
        match self {
            Decision::Success => "success",
            Decision::Failure => "failure",
            Decision::Warn => "warn",
        }
    }
}

/// Builder facade over audit emission with centralized envelope+redaction.
pub struct StageLogger<'a> {
    ctx: &'a AuditCtx<'a>,
}

impl<'a> StageLogger<'a> {
    pub(crate) fn new(ctx: &'a AuditCtx<'a>) -> Self {
        Self { ctx }
    }

    pub fn scan(&'a self) -> EventBuilder<'a> {
        EventBuilder::new(self.ctx, Stage::Scan)
    }
    pub fn scan_summary(&'a self) -> EventBuilder<'a> {
        EventBuilder::new(self.ctx, Stage::ScanSummary)
    }
    pub fn compose_check(&'a self) -> EventBuilder<'a> {
        EventBuilder::new(self.ctx, Stage::ComposeCheck)
    }
    pub fn fix_attempt(&'a self) -> EventBuilder<'a> {
        EventBuilder::new(self.ctx, Stage::FixAttempt)
    }
    pub fn fix_result(&'a self) -> EventBuilder<'a> {
        EventBuilder::new(self.ctx, Stage::FixResult)
    }
}

pub struct EventBuilder<'a> {
    ctx: &'a AuditCtx<'a>,
    stage: Stage,
    fields: serde_json::Map<String, Value>,
}

impl<'a> EventBuilder<'a> {
    fn new(ctx: &'a AuditCtx<'a>, stage: Stage) -> Self {
        let mut fields = serde_json::Map::new();
        fields.insert("stage".to_string(), json!(stage.as_event()));
        Self { ctx, stage, fields }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.fields.insert("path".into(), json!(path.into()));
        self
    }

    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn merge(mut self, extra: &Value) -> Self {
        if let Some(obj) = extra.as_object() {
            for (k, v) in obj.iter() {
                self.fields.insert(k.clone(), v.clone());
            }
        }
        self
    }

    pub fn emit(self, decision: Decision) {
        let mut fields = Value::Object(self.fields);
        if let Some(obj) = fields.as_object_mut() {
            obj.entry("decision").or_insert(json!(decision.as_str()));
            obj.entry("schema_version").or_insert(json!(SCHEMA_VERSION));
            obj.entry("ts").or_insert(json!(self.ctx.ts));
            obj.entry("scan_id").or_insert(json!(self.ctx.scan_id));
            obj.entry("path").or_insert(json!(""));
            obj.entry("dry_run").or_insert(json!(self.ctx.mode.dry_run));
        }
        let out = if self.ctx.mode.redact {
            redact_event(fields)
        } else {
            fields
        };
        self.ctx
            .facts
            .emit("reclaim", self.stage.as_event(), decision.as_str(), out);
    }

    pub fn emit_success(self) {
        self.emit(Decision::Success);
    }
    pub fn emit_failure(self) {
        self.emit(Decision::Failure);
    }
    pub fn emit_warn(self) {
        self.emit(Decision::Warn);
    }
}
