//! Reference resolution
//!
//! Templates name external entities (users, groups, services, configuration
//! items) by natural key. The resolver turns those keys into opaque
//! identifiers through the `LookupService` collaborator and caches every
//! outcome for the run, including misses, so a failing lookup is queried at
//! most once. A miss degrades the field to the unassigned sentinel; it never
//! aborts generation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::record::RecordId;
use crate::template::ReferenceKey;

/// Kinds of external entities a reference can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    User,
    Group,
    Service,
    ConfigurationItem,
}

impl EntityKind {
    /// Table-ish label used for logging and lookup routing
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Group => "group",
            EntityKind::Service => "service",
            EntityKind::ConfigurationItem => "configuration_item",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Lookup collaborator (the host's record store, behind a seam).
/// Must be idempotent and side-effect-free.
pub trait LookupService {
    /// Find the identifier of the entity whose `field` equals `value`,
    /// or `None` if no such record exists.
    fn find(&self, kind: EntityKind, field: &str, value: &str) -> Option<RecordId>;
}

/// Lookup that knows nothing (every key is a miss)
pub struct NullLookup;

impl LookupService for NullLookup {
    fn find(&self, _kind: EntityKind, _field: &str, _value: &str) -> Option<RecordId> {
        None
    }
}

/// In-memory lookup backed by a map, for tests and simulations
#[derive(Debug, Default)]
pub struct MemoryLookup {
    entries: HashMap<(EntityKind, String), RecordId>,
}

impl MemoryLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity under its natural key
    pub fn insert(&mut self, kind: EntityKind, value: &str, id: &str) {
        self.entries
            .insert((kind, value.to_string()), RecordId(id.to_string()));
    }

    /// Register every caller, agent, and template reference of a catalog
    /// with synthetic identifiers, so a simulation resolves cleanly.
    pub fn seed_from_catalog(&mut self, catalog: &crate::template::TemplateCatalog) {
        let mut counter = 0usize;
        let mut add = |entries: &mut HashMap<(EntityKind, String), RecordId>,
                       key: &ReferenceKey| {
            counter += 1;
            entries
                .entry((key.kind, key.value.clone()))
                .or_insert_with(|| RecordId(format!("{}-{:04}", key.kind.label(), counter)));
        };
        for key in catalog.callers.iter().chain(catalog.agents.iter()) {
            add(&mut self.entries, key);
        }
        for index in 0..catalog.len() {
            let template = catalog.get(index).unwrap();
            for key in [
                &template.assignment_group,
                &template.service,
                &template.configuration_item,
            ]
            .into_iter()
            .flatten()
            {
                add(&mut self.entries, key);
            }
        }
    }
}

impl LookupService for MemoryLookup {
    fn find(&self, kind: EntityKind, _field: &str, value: &str) -> Option<RecordId> {
        self.entries.get(&(kind, value.to_string())).cloned()
    }
}

/// Per-run resolver with a `(kind, key)` cache over a `LookupService`.
/// Negative outcomes are cached too. Process-wide state is deliberately
/// avoided; the cache lives and dies with the run that owns it.
pub struct ReferenceResolver<'a, L: LookupService> {
    lookup: &'a L,
    cache: HashMap<(EntityKind, String), Option<RecordId>>,
    misses: usize,
}

impl<'a, L: LookupService> ReferenceResolver<'a, L> {
    pub fn new(lookup: &'a L) -> Self {
        ReferenceResolver {
            lookup,
            cache: HashMap::new(),
            misses: 0,
        }
    }

    /// Resolve a symbolic reference to an identifier. First request per key
    /// hits the lookup collaborator; every outcome is cached for the run.
    pub fn resolve(&mut self, key: &ReferenceKey) -> Option<RecordId> {
        let cache_key = (key.kind, key.value.clone());
        if let Some(cached) = self.cache.get(&cache_key) {
            return cached.clone();
        }

        let outcome = self.lookup.find(key.kind, &key.field, &key.value);
        match &outcome {
            Some(id) => debug!(kind = %key.kind, key = %key.value, id = %id, "reference resolved"),
            None => {
                // Non-fatal: the field degrades to unassigned, the run goes on.
                self.misses += 1;
                warn!(kind = %key.kind, field = %key.field, key = %key.value, "no record found for reference");
            }
        }
        self.cache.insert(cache_key, outcome.clone());
        outcome
    }

    /// How many distinct references failed to resolve this run
    pub fn miss_count(&self) -> usize {
        self.misses
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Lookup double that counts how often it is queried
    struct CountingLookup {
        inner: MemoryLookup,
        calls: Cell<usize>,
    }

    impl LookupService for CountingLookup {
        fn find(&self, kind: EntityKind, field: &str, value: &str) -> Option<RecordId> {
            self.calls.set(self.calls.get() + 1);
            self.inner.find(kind, field, value)
        }
    }

    #[test]
    fn test_hit_is_cached() {
        let mut inner = MemoryLookup::new();
        inner.insert(EntityKind::User, "beth.anglin", "u-beth");
        let lookup = CountingLookup {
            inner,
            calls: Cell::new(0),
        };
        let mut resolver = ReferenceResolver::new(&lookup);

        let key = ReferenceKey::user("beth.anglin");
        for _ in 0..5 {
            let id = resolver.resolve(&key).unwrap();
            assert_eq!(id.as_str(), "u-beth");
        }
        assert_eq!(lookup.calls.get(), 1);
        assert_eq!(resolver.miss_count(), 0);
    }

    #[test]
    fn test_miss_is_cached_and_not_requeried() {
        let lookup = CountingLookup {
            inner: MemoryLookup::new(),
            calls: Cell::new(0),
        };
        let mut resolver = ReferenceResolver::new(&lookup);

        let key = ReferenceKey::group("No Such Group");
        for _ in 0..5 {
            assert!(resolver.resolve(&key).is_none());
        }
        assert_eq!(lookup.calls.get(), 1);
        assert_eq!(resolver.miss_count(), 1);
    }

    #[test]
    fn test_distinct_kinds_do_not_collide() {
        let mut inner = MemoryLookup::new();
        inner.insert(EntityKind::User, "Email", "u-email");
        inner.insert(EntityKind::Service, "Email", "svc-email");
        let lookup = CountingLookup {
            inner,
            calls: Cell::new(0),
        };
        let mut resolver = ReferenceResolver::new(&lookup);

        let user = resolver.resolve(&ReferenceKey::user("Email")).unwrap();
        let service = resolver.resolve(&ReferenceKey::service("Email")).unwrap();
        assert_eq!(user.as_str(), "u-email");
        assert_eq!(service.as_str(), "svc-email");
    }

    #[test]
    fn test_seed_from_catalog_covers_pools_and_templates() {
        let catalog = crate::template::TemplateCatalog::builtin();
        let mut lookup = MemoryLookup::new();
        lookup.seed_from_catalog(&catalog);

        let mut resolver = ReferenceResolver::new(&lookup);
        for key in catalog.callers.iter().chain(catalog.agents.iter()) {
            assert!(resolver.resolve(key).is_some(), "pool key {:?}", key.value);
        }
        for index in 0..catalog.len() {
            let template = catalog.get(index).unwrap();
            if let Some(group) = &template.assignment_group {
                assert!(resolver.resolve(group).is_some(), "group {:?}", group.value);
            }
        }
        assert_eq!(resolver.miss_count(), 0);
    }
}
