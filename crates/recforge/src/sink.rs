//! Record sinks
//!
//! The output boundary of the generator. A sink either logs a summary of
//! the record (dry run) or serializes it to a field map and submits it to
//! the record-store collaborator. The sink never retries and never
//! validates reference fields; unresolved references were already degraded
//! upstream by the resolver.

use tracing::{debug, info};
use uuid::Uuid;

use crate::record::{FieldMap, RecordId, SyntheticRecord};

/// Sink errors. A failed insert is surfaced per record; whether the run
/// aborts or skips is the caller's policy, not the sink's.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("record store rejected insert: {0}")]
    StoreRejected(String),
}

/// What happened to an emitted record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitOutcome {
    /// Persisted; the store issued this handle
    Stored(RecordId),
    /// Dry run; nothing was persisted
    Simulated,
}

/// Record-store collaborator. Accepts arbitrary extra fields silently;
/// unknown fields are the store's concern, not the generator's.
pub trait RecordStore {
    fn insert(&mut self, fields: FieldMap) -> Result<RecordId, SinkError>;
}

/// Output boundary for synthesized records
pub trait RecordSink {
    fn emit(&mut self, record: &SyntheticRecord) -> Result<EmitOutcome, SinkError>;
}

/// Sink that only counts and logs; no external mutation occurs
#[derive(Debug, Default)]
pub struct DryRunSink {
    emitted: usize,
}

impl DryRunSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emitted(&self) -> usize {
        self.emitted
    }
}

impl RecordSink for DryRunSink {
    fn emit(&mut self, record: &SyntheticRecord) -> Result<EmitOutcome, SinkError> {
        self.emitted += 1;
        info!(
            template = record.template_index,
            category = %record.category,
            assignment = %record
                .assignment_group
                .as_ref()
                .map(|id| id.as_str())
                .unwrap_or(""),
            "{}",
            record.short_description
        );
        Ok(EmitOutcome::Simulated)
    }
}

/// Sink that persists through a record store
pub struct StoreSink<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> StoreSink<S> {
    pub fn new(store: S) -> Self {
        StoreSink { store }
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: RecordStore> RecordSink for StoreSink<S> {
    fn emit(&mut self, record: &SyntheticRecord) -> Result<EmitOutcome, SinkError> {
        let id = self.store.insert(record.to_fields())?;
        debug!(id = %id, template = record.template_index, "record inserted");
        Ok(EmitOutcome::Stored(id))
    }
}

/// In-memory record store for tests and simulations
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Vec<(RecordId, FieldMap)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[(RecordId, FieldMap)] {
        &self.rows
    }
}

impl RecordStore for MemoryStore {
    fn insert(&mut self, fields: FieldMap) -> Result<RecordId, SinkError> {
        let id = RecordId(Uuid::new_v4().to_string());
        self.rows.push((id.clone(), fields));
        Ok(id)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::priority_for;
    use crate::state::IncidentState;
    use chrono::Utc;

    fn sample_record() -> SyntheticRecord {
        let now = Utc::now();
        SyntheticRecord {
            template_index: 3,
            category: "hardware".to_string(),
            subcategory: "computer_hardware".to_string(),
            short_description: "laptop won't turn on".to_string(),
            description: "Hardware failure suspected.".to_string(),
            work_notes: "Ran hardware diagnostics.".to_string(),
            comments: "Checking inventory now.".to_string(),
            caller: Some(RecordId("u-2".to_string())),
            assigned_to: Some(RecordId("u-9".to_string())),
            assignment_group: Some(RecordId("g-hw".to_string())),
            service: None,
            configuration_item: Some(RecordId("ci-1".to_string())),
            contact_type: "email".to_string(),
            impact: 1,
            urgency: 2,
            priority: priority_for(1, 2),
            state: IncidentState::InProgress,
            opened_at: now,
            resolved_at: None,
            closed_at: None,
            updated_at: now,
            active: true,
            close_code: None,
            close_notes: None,
            reassignment_count: 2,
            reopen_count: 0,
            escalation: 0,
            knowledge: false,
            made_sla: true,
        }
    }

    #[test]
    fn test_dry_run_sink_counts_without_storing() {
        let mut sink = DryRunSink::new();
        for _ in 0..4 {
            assert_eq!(sink.emit(&sample_record()).unwrap(), EmitOutcome::Simulated);
        }
        assert_eq!(sink.emitted(), 4);
    }

    #[test]
    fn test_store_sink_returns_issued_handle() {
        let mut sink = StoreSink::new(MemoryStore::new());
        let outcome = sink.emit(&sample_record()).unwrap();
        let EmitOutcome::Stored(id) = outcome else {
            panic!("expected a stored outcome");
        };
        let store = sink.into_store();
        assert_eq!(store.len(), 1);
        assert_eq!(store.rows()[0].0, id);
        assert_eq!(
            store.rows()[0].1["short_description"],
            serde_json::Value::String("laptop won't turn on".to_string())
        );
    }

    /// Store double that rejects everything
    struct RejectingStore;

    impl RecordStore for RejectingStore {
        fn insert(&mut self, _fields: FieldMap) -> Result<RecordId, SinkError> {
            Err(SinkError::StoreRejected("table is read-only".to_string()))
        }
    }

    #[test]
    fn test_store_failure_surfaces_per_record() {
        let mut sink = StoreSink::new(RejectingStore);
        let err = sink.emit(&sample_record()).unwrap_err();
        assert!(err.to_string().contains("read-only"));
    }
}
