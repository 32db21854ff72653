use log::Level;
use serde_json::Value;

/// Structured facts sink. The core decides content; the consumer decides
/// where the JSON goes (stdout, file, test capture).
pub trait FactsEmitter {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value);
}

/// Human-oriented audit sink. The core never prints; summary lines and
/// advisory text are handed here for the caller to render.
pub trait AuditSink {
    fn log(&self, level: Level, msg: &str);
}

/// No-op sink, suitable as a default for both traits.
#[derive(Default)]
pub struct JsonlSink;

impl FactsEmitter for JsonlSink {
    fn emit(&self, _subsystem: &str, _event: &str, _decision: &str, _fields: Value) {}
}

impl AuditSink for JsonlSink {
    fn log(&self, _level: Level, _msg: &str) {}
}
