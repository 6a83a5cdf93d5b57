//! Recforge - Synthetic ITSM record generator
//!
//! Deterministic, template-driven seeding of incident-style records for
//! demos and model training. One seeded RNG drives every sample, so a run
//! replays identically; external collaborators (record store, lookup
//! service) sit behind traits and never leak into the core.

pub mod config;
pub mod generator;
pub mod record;
pub mod resolver;
pub mod sink;
pub mod state;
pub mod template;


pub use config::{ConfigError, GenerationConfig};
pub use generator::{GenerationReport, GenerationRun};
pub use record::{priority_for, FieldMap, RecordId, SyntheticRecord};
pub use resolver::{EntityKind, LookupService, MemoryLookup, NullLookup, ReferenceResolver};
pub use sink::{DryRunSink, EmitOutcome, MemoryStore, RecordSink, RecordStore, SinkError, StoreSink};
pub use state::IncidentState;
pub use template::{CatalogError, ReferenceKey, Template, TemplateCatalog};
