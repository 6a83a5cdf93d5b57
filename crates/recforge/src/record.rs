//! Synthetic record structure and derived fields
//!
//! `SyntheticRecord` is the typed representation built up by the generator.
//! It only degrades to an untyped field map at the sink boundary, so every
//! invariant (priority derivation, lifecycle timestamps, active flag) is
//! checkable on a real struct rather than a bag of strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::state::IncidentState;

/// Opaque identifier for a record in the external store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Untyped field map handed to the record store on insert
pub type FieldMap = Map<String, Value>;

/// Priority matrix: impact x urgency -> priority (1 = highest, 5 = lowest).
/// Any pair outside {1,2,3} x {1,2,3} falls through to the default of 5 so a
/// bad sample can never silently produce an unset priority.
pub fn priority_for(impact: u8, urgency: u8) -> u8 {
    match (impact, urgency) {
        (1, 1) => 1,
        (1, 2) => 2,
        (1, 3) => 3,
        (2, 1) => 2,
        (2, 2) => 3,
        (2, 3) => 4,
        (3, 1) => 3,
        (3, 2) => 4,
        (3, 3) => 5,
        _ => 5,
    }
}

/// A synthesized incident record under construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntheticRecord {
    /// Index of the template this record was drawn from
    pub template_index: usize,
    /// Category tag from the template
    pub category: String,
    /// Subcategory tag from the template
    pub subcategory: String,
    /// Short description (always present; template lists are validated)
    pub short_description: String,
    /// Longer description; an empty string is a valid sample
    pub description: String,
    /// Internal-facing note
    pub work_notes: String,
    /// Caller-facing comment
    pub comments: String,
    /// Caller reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caller: Option<RecordId>,
    /// Assigned agent; `None` means unassigned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<RecordId>,
    /// Assignment group reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_group: Option<RecordId>,
    /// Related business service reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<RecordId>,
    /// Related configuration item reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_item: Option<RecordId>,
    /// Contact channel the record came in through
    pub contact_type: String,
    /// Impact (1-3)
    pub impact: u8,
    /// Urgency (1-3)
    pub urgency: u8,
    /// Priority, always derived via `priority_for`
    pub priority: u8,
    /// Lifecycle state
    pub state: IncidentState,
    /// When the record was opened
    pub opened_at: DateTime<Utc>,
    /// When the record was resolved (terminal states only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
    /// When the record was closed (terminal states only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
    /// Whether the record is still active
    pub active: bool,
    /// Close code (terminal states only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_code: Option<String>,
    /// Close notes (terminal states only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_notes: Option<String>,
    /// How many times the record was reassigned between groups
    pub reassignment_count: u8,
    /// How many times the record was reopened after resolution
    pub reopen_count: u8,
    /// Escalation level (0 = none)
    pub escalation: u8,
    /// Whether a knowledge article was linked to the record
    pub knowledge: bool,
    /// Whether the record met its SLA
    pub made_sla: bool,
}

impl SyntheticRecord {
    /// Serialize to the untyped field map the record store expects.
    /// Unset optional references serialize as empty strings, matching the
    /// store's "unassigned" sentinel; unset timestamps are omitted entirely.
    pub fn to_fields(&self) -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert("category".into(), Value::String(self.category.clone()));
        fields.insert(
            "subcategory".into(),
            Value::String(self.subcategory.clone()),
        );
        fields.insert(
            "short_description".into(),
            Value::String(self.short_description.clone()),
        );
        fields.insert(
            "description".into(),
            Value::String(self.description.clone()),
        );
        fields.insert("work_notes".into(), Value::String(self.work_notes.clone()));
        fields.insert("comments".into(), Value::String(self.comments.clone()));
        fields.insert("caller_id".into(), ref_value(&self.caller));
        fields.insert("assigned_to".into(), ref_value(&self.assigned_to));
        fields.insert(
            "assignment_group".into(),
            ref_value(&self.assignment_group),
        );
        fields.insert("business_service".into(), ref_value(&self.service));
        fields.insert("cmdb_ci".into(), ref_value(&self.configuration_item));
        fields.insert(
            "contact_type".into(),
            Value::String(self.contact_type.clone()),
        );
        fields.insert("impact".into(), Value::from(self.impact));
        fields.insert("urgency".into(), Value::from(self.urgency));
        fields.insert("priority".into(), Value::from(self.priority));
        fields.insert("state".into(), Value::from(self.state.value()));
        fields.insert(
            "opened_at".into(),
            Value::String(self.opened_at.to_rfc3339()),
        );
        fields.insert(
            "sys_created_on".into(),
            Value::String(self.opened_at.to_rfc3339()),
        );
        fields.insert(
            "sys_updated_on".into(),
            Value::String(self.updated_at.to_rfc3339()),
        );
        if let Some(resolved_at) = self.resolved_at {
            fields.insert(
                "resolved_at".into(),
                Value::String(resolved_at.to_rfc3339()),
            );
        }
        if let Some(closed_at) = self.closed_at {
            fields.insert("closed_at".into(), Value::String(closed_at.to_rfc3339()));
        }
        fields.insert("active".into(), Value::Bool(self.active));
        if let Some(close_code) = &self.close_code {
            fields.insert("close_code".into(), Value::String(close_code.clone()));
        }
        if let Some(close_notes) = &self.close_notes {
            fields.insert("close_notes".into(), Value::String(close_notes.clone()));
        }
        fields.insert(
            "reassignment_count".into(),
            Value::from(self.reassignment_count),
        );
        fields.insert("reopen_count".into(), Value::from(self.reopen_count));
        fields.insert("escalation".into(), Value::from(self.escalation));
        fields.insert("knowledge".into(), Value::Bool(self.knowledge));
        fields.insert("made_sla".into(), Value::Bool(self.made_sla));
        fields
    }
}

fn ref_value(reference: &Option<RecordId>) -> Value {
    match reference {
        Some(id) => Value::String(id.0.clone()),
        None => Value::String(String::new()),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_matrix_all_combinations() {
        let expected = [
            ((1, 1), 1),
            ((1, 2), 2),
            ((1, 3), 3),
            ((2, 1), 2),
            ((2, 2), 3),
            ((2, 3), 4),
            ((3, 1), 3),
            ((3, 2), 4),
            ((3, 3), 5),
        ];
        for ((impact, urgency), priority) in expected {
            assert_eq!(
                priority_for(impact, urgency),
                priority,
                "impact={} urgency={}",
                impact,
                urgency
            );
        }
    }

    #[test]
    fn test_priority_defaults_to_lowest_outside_matrix() {
        assert_eq!(priority_for(0, 1), 5);
        assert_eq!(priority_for(4, 2), 5);
        assert_eq!(priority_for(1, 0), 5);
        assert_eq!(priority_for(0, 0), 5);
    }

    #[test]
    fn test_field_map_unassigned_sentinel() {
        let now = Utc::now();
        let record = SyntheticRecord {
            template_index: 0,
            category: "software".to_string(),
            subcategory: "vpn".to_string(),
            short_description: "vpn problem".to_string(),
            description: String::new(),
            work_notes: "checked concentrator".to_string(),
            comments: "please reconnect".to_string(),
            caller: Some(RecordId("u-1".to_string())),
            assigned_to: None,
            assignment_group: Some(RecordId("g-1".to_string())),
            service: None,
            configuration_item: None,
            contact_type: "phone".to_string(),
            impact: 2,
            urgency: 3,
            priority: priority_for(2, 3),
            state: IncidentState::New,
            opened_at: now,
            resolved_at: None,
            closed_at: None,
            updated_at: now,
            active: true,
            close_code: None,
            close_notes: None,
            reassignment_count: 0,
            reopen_count: 0,
            escalation: 0,
            knowledge: false,
            made_sla: true,
        };
        let fields = record.to_fields();
        assert_eq!(fields["assigned_to"], Value::String(String::new()));
        assert_eq!(fields["caller_id"], Value::String("u-1".to_string()));
        assert_eq!(fields["priority"], Value::from(4));
        assert_eq!(fields["state"], Value::from(1));
        assert!(!fields.contains_key("resolved_at"));
        assert!(!fields.contains_key("close_code"));
    }

    #[test]
    fn test_field_map_carries_sla_knowledge_and_created_timestamp() {
        let now = Utc::now();
        let record = SyntheticRecord {
            template_index: 1,
            category: "network".to_string(),
            subcategory: "wifi".to_string(),
            short_description: "wifi drops".to_string(),
            description: String::new(),
            work_notes: "swapped access point".to_string(),
            comments: "still flaky".to_string(),
            caller: Some(RecordId("u-2".to_string())),
            assigned_to: None,
            assignment_group: None,
            service: None,
            configuration_item: None,
            contact_type: "self-service".to_string(),
            impact: 1,
            urgency: 1,
            priority: priority_for(1, 1),
            state: IncidentState::New,
            opened_at: now,
            resolved_at: None,
            closed_at: None,
            updated_at: now,
            active: true,
            close_code: None,
            close_notes: None,
            reassignment_count: 0,
            reopen_count: 0,
            escalation: 0,
            knowledge: true,
            made_sla: false,
        };
        let fields = record.to_fields();
        assert_eq!(fields["knowledge"], Value::Bool(true));
        assert_eq!(fields["made_sla"], Value::Bool(false));
        assert_eq!(
            fields["sys_created_on"],
            Value::String(now.to_rfc3339()),
            "creation timestamp mirrors opened_at"
        );
    }
}
