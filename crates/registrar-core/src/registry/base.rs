//! Per-factory registry storage.

use dashmap::DashMap;
use std::any::{type_name, TypeId};
use std::sync::Arc;

use tracing::debug;

use crate::factory::Factory;

use super::registration::Registration;

/// Name-to-registration table owned by a single factory type.
///
/// Each [`Factory`] holds exactly one of these in a `static`, so sibling
/// factories never see each other's entries. Entries are only ever added or
/// replaced:
/// - Registering an existing name replaces the previous entry
/// - Type-based registrations also record the type's registered name
/// - Iteration order is the map's internal order
pub struct Registry<F: Factory> {
    entries: DashMap<String, Registration<F>>,
    stamps: DashMap<TypeId, Arc<str>>,
}

impl<F: Factory> Registry<F> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            stamps: DashMap::new(),
        }
    }

    /// Store a registration under its name.
    ///
    /// Returns the entry it replaced, if any.
    pub fn insert(&self, registration: Registration<F>) -> Option<Registration<F>> {
        let name = registration.name().to_string();

        if let Some(stamp) = registration.stamp() {
            self.stamps.insert(stamp.id, Arc::from(name.as_str()));
        }

        let replaced = self.entries.insert(name.clone(), registration);
        debug!(
            factory = type_name::<F>(),
            name = %name,
            replaced = replaced.is_some(),
            "Registered entity"
        );
        replaced
    }

    /// Get a registration by name.
    pub fn get(&self, name: &str) -> Option<Registration<F>> {
        self.entries.get(name).map(|entry| entry.clone())
    }

    /// Check if a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// List all registered names.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Name the type with this `TypeId` was last registered under.
    pub fn name_of(&self, type_id: TypeId) -> Option<String> {
        self.stamps.get(&type_id).map(|name| name.to_string())
    }

    /// Get the number of registered names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over a snapshot of all registrations.
    ///
    /// No shard lock is held while iterating, so registering on the same
    /// factory inside the loop is allowed; new entries are not visited.
    pub fn iter(&self) -> std::vec::IntoIter<Registration<F>> {
        let snapshot: Vec<Registration<F>> =
            self.entries.iter().map(|entry| entry.value().clone()).collect();
        snapshot.into_iter()
    }
}

impl<F: Factory> Default for Registry<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "base_tests.rs"]
mod tests;
