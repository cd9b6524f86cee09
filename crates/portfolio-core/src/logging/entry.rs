//! Captured log events.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One `tracing` event, flattened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// trace, debug, info, warn, error
    pub level: String,

    /// Module path / target (e.g., "portfolio_core::gallery")
    pub target: String,

    /// Human-readable message
    pub message: String,

    /// Structured fields other than the message
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub fields: Map<String, Value>,
}

impl LogRecord {
    pub fn new(level: impl Into<String>, target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            target: target.into(),
            message: message.into(),
            fields: Map::new(),
        }
    }

    pub fn is_warning(&self) -> bool {
        self.level == "warn"
    }

    pub fn is_error(&self) -> bool {
        self.level == "error"
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_levels() {
        let record = LogRecord::new("warn", "portfolio_core::certificate", "dropped");
        assert!(record.is_warning());
        assert!(!record.is_error());
    }

    #[test]
    fn test_record_json_skips_empty_fields() {
        let record = LogRecord::new("info", "t", "m");
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("fields"));

        let back: LogRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
