//! Generation run
//!
//! `GenerationRun` is the per-invocation context object: it owns the
//! configuration, the resolver cache, and the seeded RNG, and borrows the
//! immutable template catalog. Every random draw flows through the one RNG,
//! so a seeded run replays identically.
//!
//! The loop is strictly sequential and synchronous; iterations are
//! independent and there is no ordering contract beyond "count records
//! produced".

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::{ConfigError, GenerationConfig};
use crate::record::{priority_for, RecordId, SyntheticRecord};
use crate::resolver::{LookupService, ReferenceResolver};
use crate::sink::RecordSink;
use crate::state::IncidentState;
use crate::template::{
    Template, TemplateCatalog, CLOSE_CODES, CONTACT_CHANNELS, DEFAULT_CLOSE_NOTES,
    DEFAULT_COMMENT, DEFAULT_DESCRIPTION, DEFAULT_WORK_NOTE,
};

/// Outcome summary of one generation run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Records requested (the configured count)
    pub requested: u32,
    /// Records the sink accepted (stored or simulated)
    pub emitted: usize,
    /// Records suppressed by dry-run mode
    pub simulated: usize,
    /// Records the store rejected (skipped, run continued)
    pub failed: usize,
    /// Records synthesized in a terminal state
    pub terminal: usize,
    /// Distinct references that failed to resolve
    pub unresolved_references: usize,
}

/// Per-invocation generation context
pub struct GenerationRun<'a, L: LookupService> {
    config: GenerationConfig,
    catalog: &'a TemplateCatalog,
    resolver: ReferenceResolver<'a, L>,
    rng: StdRng,
    callers: Vec<RecordId>,
    agents: Vec<RecordId>,
}

impl<'a, L: LookupService> GenerationRun<'a, L> {
    /// Build a run context. Validates the configuration fail-fast and
    /// resolves the caller/agent pools up front; pool entries that fail to
    /// resolve drop out of the pool instead of aborting.
    pub fn new(
        config: GenerationConfig,
        catalog: &'a TemplateCatalog,
        lookup: &'a L,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut resolver = ReferenceResolver::new(lookup);
        let callers = catalog
            .callers
            .iter()
            .filter_map(|key| resolver.resolve(key))
            .collect();
        let agents = catalog
            .agents
            .iter()
            .filter_map(|key| resolver.resolve(key))
            .collect();

        Ok(GenerationRun {
            config,
            catalog,
            resolver,
            rng,
            callers,
            agents,
        })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Synthesize one record: pick a template, sample its text variants,
    /// derive priority and lifecycle fields, resolve references.
    pub fn synthesize(&mut self) -> SyntheticRecord {
        let catalog = self.catalog;
        let (template_index, template) = catalog.pick(&mut self.rng);

        let short_description = sample(&mut self.rng, &template.short_descriptions, "");
        let description = sample(&mut self.rng, &template.descriptions, DEFAULT_DESCRIPTION);
        let work_notes = sample(&mut self.rng, &template.work_notes, DEFAULT_WORK_NOTE);
        let comments = sample(&mut self.rng, &template.comments, DEFAULT_COMMENT);

        let impact = self.rng.gen_range(1..=3);
        let urgency = self.rng.gen_range(1..=3);

        let now = Utc::now();
        let days_back = self.rng.gen_range(0..self.config.max_days_back);
        let opened_at = now - Duration::days(days_back);

        let state = if self.config.resolved_only {
            IncidentState::Closed
        } else {
            // Raw draw over the store's 1..=7 range; the undefined gap
            // values 4 and 5 remap to InProgress.
            let raw = self.rng.gen_range(1..=7u8);
            IncidentState::from_value(raw).unwrap_or(IncidentState::InProgress)
        };

        let caller = pick_pool(&mut self.rng, &self.callers);
        let assigned_to = if self.rng.gen_bool(self.config.unassigned_probability) {
            None
        } else {
            pick_pool(&mut self.rng, &self.agents)
        };
        let assignment_group = template
            .assignment_group
            .as_ref()
            .and_then(|key| self.resolver.resolve(key));
        let service = template
            .service
            .as_ref()
            .and_then(|key| self.resolver.resolve(key));
        let configuration_item = template
            .configuration_item
            .as_ref()
            .and_then(|key| self.resolver.resolve(key));

        let contact_type =
            CONTACT_CHANNELS[self.rng.gen_range(0..CONTACT_CHANNELS.len())].to_string();

        // Reassignment skew is keyed off the template index, not a per-record
        // draw, so roughly a third of the catalog produces reassigned records
        // in a reproducible pattern.
        let reassignment_count = if template_index % 3 == 0 {
            self.rng.gen_range(0..10)
        } else {
            0
        };
        let reopen_count = if self.rng.gen_bool(0.15) {
            self.rng.gen_range(0..3)
        } else {
            0
        };
        let escalation = if self.rng.gen_bool(0.08) {
            self.rng.gen_range(1..=2)
        } else {
            0
        };
        let knowledge = self.rng.gen_bool(0.20);
        let made_sla = self.rng.gen_bool(0.85);

        let mut record = SyntheticRecord {
            template_index,
            category: template.category.clone(),
            subcategory: template.subcategory.clone(),
            short_description,
            description,
            work_notes,
            comments,
            caller,
            assigned_to,
            assignment_group,
            service,
            configuration_item,
            contact_type,
            impact,
            urgency,
            priority: priority_for(impact, urgency),
            state,
            opened_at,
            resolved_at: None,
            closed_at: None,
            updated_at: opened_at,
            active: true,
            close_code: None,
            close_notes: None,
            reassignment_count,
            reopen_count,
            escalation,
            knowledge,
            made_sla,
        };

        if state.is_terminal() {
            self.close(&mut record, template, days_back);
        }

        record
    }

    /// Set closure fields on a terminal record.
    ///
    /// The close offset keeps the source computation: a uniform draw over
    /// `days_back % max_open_days`, then a second modulus by
    /// `max_days_back`. When `days_back < max_open_days` the first modulus
    /// is a no-op and the offset can range up to `days_back`; when
    /// `days_back` is an exact multiple of `max_open_days` the span is zero
    /// and the record closes the day it opened. The resulting bias is kept
    /// as-is.
    fn close(&mut self, record: &mut SyntheticRecord, template: &Template, days_back: i64) {
        let span = days_back % self.config.max_open_days;
        let close_offset_days = if span > 0 {
            self.rng.gen_range(0..span)
        } else {
            0
        } % self.config.max_days_back;

        // Resolution time and closure time are the same instant.
        let close_date = record.opened_at + Duration::days(close_offset_days);
        record.active = false;
        record.resolved_at = Some(close_date);
        record.closed_at = Some(close_date);
        record.updated_at = close_date;
        record.close_code =
            Some(CLOSE_CODES[self.rng.gen_range(0..CLOSE_CODES.len())].to_string());
        record.close_notes = Some(sample(
            &mut self.rng,
            &template.resolution_notes,
            DEFAULT_CLOSE_NOTES,
        ));

        debug!(
            opened = %record.opened_at,
            close_offset_days,
            closed = %close_date,
            "record closed"
        );
    }

    /// Run the full loop: synthesize `count` records and hand each to the
    /// sink exactly once. Dry-run mode logs summaries and never touches the
    /// sink. A sink failure skips that record and continues; callers that
    /// want abort-on-first drive `synthesize` themselves.
    pub fn run<S: RecordSink>(&mut self, sink: &mut S) -> GenerationReport {
        info!(
            count = self.config.count,
            simulate = self.config.simulate,
            resolved_only = self.config.resolved_only,
            templates = self.catalog.len(),
            "starting generation"
        );

        let mut report = GenerationReport {
            requested: self.config.count,
            ..Default::default()
        };

        for _ in 0..self.config.count {
            let record = self.synthesize();
            if record.state.is_terminal() {
                report.terminal += 1;
            }

            if self.config.simulate {
                debug!(
                    template = record.template_index,
                    category = %record.category,
                    "{}",
                    record.short_description
                );
                report.simulated += 1;
                continue;
            }

            match sink.emit(&record) {
                Ok(_) => report.emitted += 1,
                Err(err) => {
                    warn!(template = record.template_index, error = %err, "sink failed, skipping record");
                    report.failed += 1;
                }
            }
        }

        report.unresolved_references = self.resolver.miss_count();
        info!(
            emitted = report.emitted,
            simulated = report.simulated,
            failed = report.failed,
            terminal = report.terminal,
            "generation complete"
        );
        report
    }
}

/// Sample one variant uniformly; an empty list falls back to the fixed
/// default. An empty string inside a non-empty list is a valid sample.
fn sample<R: Rng>(rng: &mut R, variants: &[String], default: &str) -> String {
    if variants.is_empty() {
        default.to_string()
    } else {
        variants[rng.gen_range(0..variants.len())].clone()
    }
}

fn pick_pool<R: Rng>(rng: &mut R, pool: &[RecordId]) -> Option<RecordId> {
    if pool.is_empty() {
        None
    } else {
        Some(pool[rng.gen_range(0..pool.len())].clone())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{MemoryLookup, NullLookup};

    fn seeded_config(count: u32) -> GenerationConfig {
        GenerationConfig {
            count,
            seed: Some(1234),
            ..Default::default()
        }
    }

    fn seeded_lookup(catalog: &TemplateCatalog) -> MemoryLookup {
        let mut lookup = MemoryLookup::new();
        lookup.seed_from_catalog(catalog);
        lookup
    }

    #[test]
    fn test_invalid_config_fails_before_any_iteration() {
        let catalog = TemplateCatalog::builtin();
        let config = GenerationConfig {
            max_open_days: 0,
            ..Default::default()
        };
        assert!(GenerationRun::new(config, &catalog, &NullLookup).is_err());
    }

    #[test]
    fn test_opened_at_never_in_the_future() {
        let catalog = TemplateCatalog::builtin();
        let lookup = seeded_lookup(&catalog);
        let mut run = GenerationRun::new(seeded_config(50), &catalog, &lookup).unwrap();
        for _ in 0..50 {
            let record = run.synthesize();
            assert!(record.opened_at <= Utc::now());
        }
    }

    #[test]
    fn test_sla_and_knowledge_flags_reach_the_field_map() {
        let catalog = TemplateCatalog::builtin();
        let lookup = seeded_lookup(&catalog);
        let mut run = GenerationRun::new(seeded_config(100), &catalog, &lookup).unwrap();
        let mut knowledge_seen = 0usize;
        let mut sla_seen = 0usize;
        for _ in 0..100 {
            let record = run.synthesize();
            let fields = record.to_fields();
            assert!(fields.contains_key("knowledge"));
            assert!(fields.contains_key("made_sla"));
            assert_eq!(
                fields["sys_created_on"],
                serde_json::Value::String(record.opened_at.to_rfc3339())
            );
            if record.knowledge {
                knowledge_seen += 1;
            }
            if record.made_sla {
                sla_seen += 1;
            }
        }
        // With a fixed seed both flags come up on both sides at least once
        // in 100 draws.
        assert!(knowledge_seen > 0 && knowledge_seen < 100);
        assert!(sla_seen > 0 && sla_seen < 100);
    }

    #[test]
    fn test_terminal_and_active_are_consistent() {
        let catalog = TemplateCatalog::builtin();
        let lookup = seeded_lookup(&catalog);
        let mut run = GenerationRun::new(seeded_config(100), &catalog, &lookup).unwrap();
        for _ in 0..100 {
            let record = run.synthesize();
            if record.state.is_terminal() {
                assert!(!record.active);
                let resolved = record.resolved_at.expect("terminal record has resolved_at");
                let closed = record.closed_at.expect("terminal record has closed_at");
                assert_eq!(resolved, closed);
                assert!(resolved >= record.opened_at);
                assert!(record.close_code.is_some());
                assert!(record.close_notes.is_some());
            } else {
                assert!(record.active);
                assert!(record.resolved_at.is_none());
                assert!(record.closed_at.is_none());
                assert!(record.close_code.is_none());
            }
        }
    }

    #[test]
    fn test_priority_always_follows_matrix() {
        let catalog = TemplateCatalog::builtin();
        let lookup = seeded_lookup(&catalog);
        let mut run = GenerationRun::new(seeded_config(100), &catalog, &lookup).unwrap();
        for _ in 0..100 {
            let record = run.synthesize();
            assert_eq!(record.priority, priority_for(record.impact, record.urgency));
            assert!((1..=5).contains(&record.priority));
        }
    }

    #[test]
    fn test_reassignment_skew_is_keyed_by_template_index() {
        let catalog = TemplateCatalog::builtin();
        let lookup = seeded_lookup(&catalog);
        let mut run = GenerationRun::new(seeded_config(200), &catalog, &lookup).unwrap();
        for _ in 0..200 {
            let record = run.synthesize();
            if record.template_index % 3 != 0 {
                assert_eq!(record.reassignment_count, 0);
            }
        }
    }

    #[test]
    fn test_close_offset_bounded_by_open_window() {
        // days_back an exact multiple of max_open_days makes the span zero
        // and the record closes the day it opened; everything else stays
        // strictly under max_open_days.
        let catalog = TemplateCatalog::builtin();
        let lookup = seeded_lookup(&catalog);
        let config = GenerationConfig {
            count: 1,
            resolved_only: true,
            max_days_back: 15,
            max_open_days: 14,
            seed: Some(9),
            ..Default::default()
        };
        let mut run = GenerationRun::new(config, &catalog, &lookup).unwrap();
        for _ in 0..100 {
            let record = run.synthesize();
            let days_open = (record.closed_at.unwrap() - record.opened_at).num_days();
            assert!((0..14).contains(&days_open));
        }
    }

    #[test]
    fn test_seeded_runs_replay_identically() {
        let catalog = TemplateCatalog::builtin();
        let lookup = seeded_lookup(&catalog);

        let mut first = GenerationRun::new(seeded_config(30), &catalog, &lookup).unwrap();
        let mut second = GenerationRun::new(seeded_config(30), &catalog, &lookup).unwrap();
        for _ in 0..30 {
            let a = first.synthesize();
            let b = second.synthesize();
            assert_eq!(a.template_index, b.template_index);
            assert_eq!(a.short_description, b.short_description);
            assert_eq!(a.state, b.state);
            assert_eq!(a.impact, b.impact);
            assert_eq!(a.urgency, b.urgency);
            assert_eq!(a.assigned_to, b.assigned_to);
            assert_eq!(a.reassignment_count, b.reassignment_count);
        }
    }

    #[test]
    fn test_unresolved_pool_degrades_to_unassigned() {
        // A lookup that knows nothing empties both pools: every record comes
        // out without caller or agent, and the run still completes.
        let catalog = TemplateCatalog::builtin();
        let config = GenerationConfig {
            count: 10,
            unassigned_probability: 0.0,
            seed: Some(3),
            ..Default::default()
        };
        let mut run = GenerationRun::new(config, &catalog, &NullLookup).unwrap();
        for _ in 0..10 {
            let record = run.synthesize();
            assert!(record.caller.is_none());
            assert!(record.assigned_to.is_none());
            assert!(record.assignment_group.is_none());
        }
        assert!(run.resolver.miss_count() > 0);
    }
}
