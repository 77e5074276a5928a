// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! The spatial component registry ("astrocyte network"): authoritative
//! store of component records, spatial/criteria queries, the connectivity
//! graph, the synaptic activity ledger, and astrocyte territories.
//!
//! A single `parking_lot::RwLock` over the combined inner state is the
//! hottest concurrent structure in the workspace — reads (spatial
//! queries, criteria scans) take the read lock, writes (register,
//! connect, territory edits) take the write lock. No dedicated spatial
//! index is built: a linear scan over `components` is sufficient at the
//! targeted scale.

use crate::connectivity::ConnectivityGraph;
use crate::error::{RegistryError, Result};
use crate::ledger::{SynapticInfo, SynapticLedger};
use crate::territory::{shrink_radius, LoadStatus, Territory};
use parking_lot::RwLock;
use std::collections::HashMap;
use substrate_types::{ComponentInfo, ComponentKind, ComponentState, Criteria, Position, Timestamp};
use tracing::{debug, trace, warn};

#[derive(Default)]
struct RegistryInner {
    components: HashMap<String, ComponentInfo>,
    connections: ConnectivityGraph,
    ledger: SynapticLedger,
    territories: HashMap<String, Territory>,
}

/// The astrocyte network: authoritative component store plus everything
/// that indexes it.
pub struct SpatialRegistry {
    inner: RwLock<RegistryInner>,
}

impl SpatialRegistry {
    pub fn new() -> Self {
        Self { inner: RwLock::new(RegistryInner::default()) }
    }

    /// Upserts a component record. Fails only if `info.id` is empty.
    /// A duplicate registration overwrites the record but keeps the
    /// original `registered_at`.
    pub fn register(&self, mut info: ComponentInfo) -> Result<()> {
        if info.id.is_empty() {
            return Err(RegistryError::EmptyId);
        }
        let mut inner = self.inner.write();
        if let Some(existing) = inner.components.get(&info.id) {
            info.registered_at = existing.registered_at;
        }
        trace!(id = %info.id, "registering component");
        inner.components.insert(info.id.clone(), info);
        Ok(())
    }

    /// Idempotent: unregistering an absent id is a success. Purges the
    /// component from connections and the synaptic ledger in the same
    /// write-locked step.
    pub fn unregister(&self, id: &str) -> Result<()> {
        let mut inner = self.inner.write();
        if inner.components.remove(id).is_some() {
            debug!(id, "unregistering component");
            inner.connections.purge(id);
            inner.ledger.purge_component(id);
            inner.territories.remove(id);
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<ComponentInfo> {
        self.inner.read().components.get(id).cloned()
    }

    pub fn list(&self) -> Vec<ComponentInfo> {
        self.inner.read().components.values().cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.inner.read().components.len()
    }

    pub fn update_state(&self, id: &str, state: ComponentState) -> Result<()> {
        let mut inner = self.inner.write();
        let component = inner
            .components
            .get_mut(id)
            .ok_or_else(|| RegistryError::ComponentNotFound(id.to_string()))?;
        component.state = state;
        Ok(())
    }

    pub fn find_by_kind(&self, kind: ComponentKind) -> Vec<ComponentInfo> {
        self.inner
            .read()
            .components
            .values()
            .filter(|c| c.kind == kind)
            .cloned()
            .collect()
    }

    /// `radius == 0.0` returns only components whose coordinates equal
    /// `center` exactly. A negative or non-finite `radius` is a recoverable
    /// validation error, matching [`establish_territory`](Self::establish_territory)'s
    /// handling of the same bad input, rather than a panic.
    pub fn find_nearby(&self, center: Position, radius: f64) -> Result<Vec<ComponentInfo>> {
        let criteria = Criteria::new().with_spatial(center, radius);
        self.find(&criteria)
    }

    /// Conjunction of kind/state/spatial predicates. See
    /// [`Criteria::matches_spatial`] for the squared-distance contract.
    /// Rejects a negative or non-finite `criteria.radius` with
    /// [`RegistryError::InvalidRadius`] instead of silently matching
    /// nothing, so a bad argument is visible to the caller.
    pub fn find(&self, criteria: &Criteria) -> Result<Vec<ComponentInfo>> {
        if let Some(radius) = criteria.radius {
            if !radius.is_finite() || radius < 0.0 {
                return Err(RegistryError::InvalidRadius(radius));
            }
        }
        Ok(self
            .inner
            .read()
            .components
            .values()
            .filter(|c| criteria.kind.map_or(true, |k| k == c.kind))
            .filter(|c| criteria.state.map_or(true, |s| s == c.state))
            .filter(|c| criteria.matches_spatial(&c.position))
            .cloned()
            .collect())
    }

    /// Euclidean distance between two registered components.
    pub fn distance(&self, a: &str, b: &str) -> Result<f64> {
        let inner = self.inner.read();
        let pa = inner
            .components
            .get(a)
            .ok_or_else(|| RegistryError::ComponentNotFound(a.to_string()))?;
        let pb = inner
            .components
            .get(b)
            .ok_or_else(|| RegistryError::ComponentNotFound(b.to_string()))?;
        Ok(pa.position.distance(&pb.position))
    }

    /// Both endpoints must be registered. Duplicate edges are no-ops;
    /// self-connections are permitted.
    pub fn map_connection(&self, source: &str, target: &str) -> Result<()> {
        let mut inner = self.inner.write();
        if !inner.components.contains_key(source) {
            return Err(RegistryError::ComponentNotFound(source.to_string()));
        }
        if !inner.components.contains_key(target) {
            return Err(RegistryError::ComponentNotFound(target.to_string()));
        }
        inner.connections.connect(source, target);
        Ok(())
    }

    pub fn get_connections(&self, id: &str) -> Vec<String> {
        self.inner.read().connections.outgoing_of(id)
    }

    /// Both endpoints must exist; also establishes the `pre -> post` edge.
    pub fn record_synaptic_activity(
        &self,
        synapse_id: &str,
        pre: &str,
        post: &str,
        strength: f64,
    ) -> Result<()> {
        if !(-1.0..=1.0).contains(&strength) {
            return Err(RegistryError::InvalidStrength(strength));
        }
        let mut inner = self.inner.write();
        if !inner.components.contains_key(pre) {
            return Err(RegistryError::ComponentNotFound(pre.to_string()));
        }
        if !inner.components.contains_key(post) {
            return Err(RegistryError::ComponentNotFound(post.to_string()));
        }
        inner.connections.connect(pre, post);
        inner.ledger.record(synapse_id, pre, post, strength);
        Ok(())
    }

    pub fn get_synaptic_info(&self, synapse_id: &str) -> Option<SynapticInfo> {
        self.inner.read().ledger.get(synapse_id)
    }

    /// Synapse ids whose recorded ledger entry connects `pre` to `post`
    /// directly (ignores transitive paths).
    pub fn synapses_between(&self, pre: &str, post: &str) -> Vec<String> {
        self.inner.read().ledger.between(pre, post)
    }

    /// Removes a single synaptic ledger entry and, if `synapse_id` is
    /// also registered as a component, unregisters it. Idempotent on
    /// unknown ids — used by pruning to sever a connection without
    /// affecting its endpoints.
    pub fn remove_synapse(&self, synapse_id: &str) {
        let mut inner = self.inner.write();
        inner.ledger.remove(synapse_id);
        if inner.components.remove(synapse_id).is_some() {
            inner.connections.purge(synapse_id);
        }
    }

    pub fn establish_territory(&self, astrocyte_id: &str, center: Position, radius: f64) -> Result<()> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(RegistryError::InvalidRadius(radius));
        }
        let mut inner = self.inner.write();
        inner.territories.insert(
            astrocyte_id.to_string(),
            Territory { center, radius, created_at: Timestamp::now() },
        );
        Ok(())
    }

    pub fn get_territory(&self, astrocyte_id: &str) -> Option<Territory> {
        self.inner.read().territories.get(astrocyte_id).copied()
    }

    /// Counts neurons within the territory's radius; if the count exceeds
    /// `max_neurons`, shrinks the territory's radius in place by
    /// `sqrt(max_neurons / count)` and reports [`LoadStatus::Adjusted`].
    pub fn validate_astrocyte_load(&self, astrocyte_id: &str, max_neurons: usize) -> Result<LoadStatus> {
        let mut inner = self.inner.write();
        let territory = *inner
            .territories
            .get(astrocyte_id)
            .ok_or_else(|| RegistryError::TerritoryNotFound(astrocyte_id.to_string()))?;

        let count = inner
            .components
            .values()
            .filter(|c| c.kind == ComponentKind::Neuron)
            .filter(|c| c.position.distance_squared(&territory.center) <= territory.radius * territory.radius)
            .count();

        if count > max_neurons {
            let new_radius = shrink_radius(territory.radius, count, max_neurons);
            warn!(astrocyte_id, count, max_neurons, old_radius = territory.radius, new_radius, "territory load exceeded, shrinking");
            if let Some(t) = inner.territories.get_mut(astrocyte_id) {
                t.radius = new_radius;
            }
            Ok(LoadStatus::Adjusted {
                old_radius: territory.radius,
                new_radius,
                count,
                max_neurons,
            })
        } else {
            Ok(LoadStatus::Ok)
        }
    }
}

impl Default for SpatialRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use substrate_types::ComponentKind;

    fn neuron_at(id: &str, x: f64, y: f64, z: f64) -> ComponentInfo {
        ComponentInfo::new(id, ComponentKind::Neuron, Position::new(x, y, z))
    }

    #[test]
    fn register_then_get_round_trips() {
        let registry = SpatialRegistry::new();
        let info = neuron_at("n1", 1.0, 2.0, 3.0);
        registry.register(info.clone()).unwrap();
        let fetched = registry.get("n1").unwrap();
        assert_eq!(fetched.position, info.position);
        assert_eq!(fetched.id, info.id);
    }

    #[test]
    fn empty_id_is_rejected() {
        let registry = SpatialRegistry::new();
        let info = neuron_at("", 0.0, 0.0, 0.0);
        assert!(matches!(registry.register(info), Err(RegistryError::EmptyId)));
    }

    #[test]
    fn duplicate_registration_keeps_original_timestamp() {
        let registry = SpatialRegistry::new();
        registry.register(neuron_at("n1", 0.0, 0.0, 0.0)).unwrap();
        let first = registry.get("n1").unwrap();
        registry.register(neuron_at("n1", 5.0, 5.0, 5.0)).unwrap();
        let second = registry.get("n1").unwrap();
        assert_eq!(first.registered_at, second.registered_at);
        assert_eq!(second.position, Position::new(5.0, 5.0, 5.0));
    }

    #[test]
    fn unregister_is_idempotent() {
        let registry = SpatialRegistry::new();
        assert!(registry.unregister("ghost").is_ok());
    }

    #[test]
    fn unregister_purges_connections_and_ledger() {
        let registry = SpatialRegistry::new();
        registry.register(neuron_at("n1", 0.0, 0.0, 0.0)).unwrap();
        registry.register(neuron_at("n2", 1.0, 0.0, 0.0)).unwrap();
        registry.map_connection("n1", "n2").unwrap();
        registry.record_synaptic_activity("syn1", "n1", "n2", 0.3).unwrap();

        registry.unregister("n1").unwrap();

        assert!(registry.get_connections("n1").is_empty());
        assert!(registry.get_synaptic_info("syn1").is_none());
    }

    // --- Scenario 1: squared-distance regression ---
    #[test]
    fn scenario_squared_distance_regression() {
        let registry = SpatialRegistry::new();
        registry.register(neuron_at("a", 0.0, 0.0, 0.0)).unwrap();
        registry.register(neuron_at("b", 1.0, 0.0, 0.0)).unwrap();
        registry.register(neuron_at("c", 2.0, 0.0, 0.0)).unwrap();
        registry.register(neuron_at("d", 3.0, 0.0, 0.0)).unwrap();
        registry.register(neuron_at("e", 1.0, 2.0, 0.0)).unwrap();

        let mut ids: Vec<String> = registry
            .find_nearby(Position::new(0.0, 0.0, 0.0), 2.0)
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string(), "c".to_string()]);

        let with_e = registry.find_nearby(Position::new(0.0, 0.0, 0.0), 5.0_f64.sqrt()).unwrap();
        assert!(with_e.iter().any(|c| c.id == "e"));
    }

    // --- Scenario 2: zero radius ---
    #[test]
    fn scenario_zero_radius_exact_match_only() {
        let registry = SpatialRegistry::new();
        registry.register(neuron_at("a", 0.0, 0.0, 0.0)).unwrap();
        registry.register(neuron_at("b", 1.0, 0.0, 0.0)).unwrap();

        let found = registry.find_nearby(Position::new(0.0, 0.0, 0.0), 0.0).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "a");
    }

    #[test]
    fn negative_radius_is_rejected_not_panicked() {
        let registry = SpatialRegistry::new();
        registry.register(neuron_at("a", 0.0, 0.0, 0.0)).unwrap();
        assert!(matches!(
            registry.find_nearby(Position::new(0.0, 0.0, 0.0), -1.0),
            Err(RegistryError::InvalidRadius(_))
        ));
        assert!(matches!(
            registry.find_nearby(Position::new(0.0, 0.0, 0.0), f64::NAN),
            Err(RegistryError::InvalidRadius(_))
        ));
    }

    // --- Scenario 3: territory shrink ---
    #[test]
    fn scenario_territory_shrink() {
        let registry = SpatialRegistry::new();
        registry
            .establish_territory("astro1", Position::new(200.0, 200.0, 200.0), 40.0)
            .unwrap();
        for i in 0..16 {
            registry
                .register(neuron_at(&format!("n{i}"), 200.0 + i as f64 * 0.1, 200.0, 200.0))
                .unwrap();
        }

        let status = registry.validate_astrocyte_load("astro1", 4).unwrap();
        match status {
            LoadStatus::Adjusted { new_radius, .. } => {
                assert!((new_radius - 20.0).abs() < 1e-3);
            }
            LoadStatus::Ok => panic!("expected an adjustment"),
        }
        assert!((registry.get_territory("astro1").unwrap().radius - 20.0).abs() < 1e-3);
    }

    #[test]
    fn validate_load_missing_territory_errors() {
        let registry = SpatialRegistry::new();
        assert!(matches!(
            registry.validate_astrocyte_load("ghost", 4),
            Err(RegistryError::TerritoryNotFound(_))
        ));
    }

    #[test]
    fn record_synaptic_activity_round_trips_and_increments() {
        let registry = SpatialRegistry::new();
        registry.register(neuron_at("n1", 0.0, 0.0, 0.0)).unwrap();
        registry.register(neuron_at("n2", 1.0, 0.0, 0.0)).unwrap();
        registry.record_synaptic_activity("syn1", "n1", "n2", -0.4).unwrap();
        registry.record_synaptic_activity("syn1", "n1", "n2", 0.1).unwrap();

        let info = registry.get_synaptic_info("syn1").unwrap();
        assert_eq!(info.strength, 0.1);
        assert!(info.activity_count >= 2);
    }

    #[test]
    fn remove_synapse_clears_ledger_entry_only() {
        let registry = SpatialRegistry::new();
        registry.register(neuron_at("n1", 0.0, 0.0, 0.0)).unwrap();
        registry.register(neuron_at("n2", 1.0, 0.0, 0.0)).unwrap();
        registry.record_synaptic_activity("syn1", "n1", "n2", 0.3).unwrap();

        registry.remove_synapse("syn1");

        assert!(registry.get_synaptic_info("syn1").is_none());
        assert!(registry.get("n1").is_some());
        assert!(registry.get("n2").is_some());
    }

    #[test]
    fn invalid_strength_is_rejected() {
        let registry = SpatialRegistry::new();
        registry.register(neuron_at("n1", 0.0, 0.0, 0.0)).unwrap();
        registry.register(neuron_at("n2", 1.0, 0.0, 0.0)).unwrap();
        assert!(matches!(
            registry.record_synaptic_activity("syn1", "n1", "n2", 2.0),
            Err(RegistryError::InvalidStrength(_))
        ));
    }
}
