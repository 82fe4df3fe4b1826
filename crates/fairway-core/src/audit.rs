use serde::{Deserialize, Serialize};

use crate::clock::Clock;

/// A single manual edit to a result, kept for the competition audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub entry_id: String,
    /// Name of the edited field, e.g. `holeScores[3]`.
    pub field: String,
    pub old_value: serde_json::Value,
    pub new_value: serde_json::Value,
    pub editor_id: String,
    pub reason: String,
    /// Milliseconds since the Unix epoch, taken from the supplied clock.
    pub timestamp: u64,
}

pub fn create_audit_log(
    clock: &dyn Clock,
    entry_id: &str,
    field: &str,
    old_value: serde_json::Value,
    new_value: serde_json::Value,
    editor_id: &str,
    reason: &str,
) -> AuditLog {
    AuditLog {
        entry_id: entry_id.to_string(),
        field: field.to_string(),
        old_value,
        new_value,
        editor_id: editor_id.to_string(),
        reason: reason.to_string(),
        timestamp: clock.now_millis(),
    }
}
