// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! Microglia: bounded component creation/removal, health scoring,
//! pruning, patrol, and prioritized birth intake, composed over a shared
//! [`SpatialRegistry`].

use crate::birth::{BirthQueue, BirthRequest};
use crate::error::{MicrogliaError, Result};
use crate::health::{HealthRecord, HealthTable};
use crate::patrol::{PatrolReport, PatrolRoute};
use crate::pruning::{PruningCandidate, PruningQueue};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use substrate_config::LifecycleProfile;
use substrate_registry::SpatialRegistry;
use substrate_types::{ComponentInfo, ComponentKind, Timestamp};
use tracing::{debug, warn};

#[derive(Default)]
struct MicrogliaInner {
    health: HealthTable,
    pruning: PruningQueue,
    routes: HashMap<String, PatrolRoute>,
    births: BirthQueue,
}

pub struct Microglia {
    registry: Arc<SpatialRegistry>,
    profile: LifecycleProfile,
    max_components: usize,
    inner: RwLock<MicrogliaInner>,
}

impl Microglia {
    pub fn new(registry: Arc<SpatialRegistry>, profile: LifecycleProfile, max_components: usize) -> Self {
        Self { registry, profile, max_components, inner: RwLock::new(MicrogliaInner::default()) }
    }

    /// Registers `info` if the Registry is below `max_components`.
    pub fn create_component(&self, info: ComponentInfo) -> Result<ComponentInfo> {
        let current = self.registry.count();
        if current >= self.max_components {
            return Err(MicrogliaError::CapacityExceeded { current, max: self.max_components });
        }
        self.registry.register(info.clone())?;
        debug!(id = %info.id, current = current + 1, max = self.max_components, "component created");
        Ok(info)
    }

    /// Idempotent: unregisters `id` and purges its health and pruning
    /// records.
    pub fn remove_component(&self, id: &str) -> Result<()> {
        self.registry.unregister(id)?;
        let mut inner = self.inner.write();
        inner.health.purge(id);
        inner.pruning.purge_component(id);
        Ok(())
    }

    /// Updates (creating lazily) the rolling health record for `id`.
    /// Unknown ids are accepted silently to avoid races with concurrent
    /// registration.
    pub fn update_component_health(&self, id: &str, activity: f64, connections: u32) -> Result<HealthRecord> {
        if !activity.is_finite() {
            return Err(MicrogliaError::InvalidActivity(activity));
        }
        Ok(self.inner.write().health.update(id, activity, connections, &self.profile))
    }

    pub fn get_component_health(&self, id: &str) -> Option<HealthRecord> {
        self.inner.read().health.get(id)
    }

    pub fn mark_for_pruning(&self, synapse_id: &str, pre: &str, post: &str, activity: f64) {
        self.inner.write().pruning.mark(synapse_id, pre, post, activity, &self.profile);
    }

    pub fn get_pruning_candidates(&self) -> Vec<PruningCandidate> {
        self.inner.read().pruning.candidates()
    }

    /// Removes every candidate at or above the configured execution
    /// threshold from both the queue and the Registry's synaptic ledger,
    /// returning the removed synapse ids.
    ///
    /// Asserts the ledger entry is actually gone afterward: a dangling
    /// pruning candidate whose synapse survives removal indicates the
    /// queue and the Registry have drifted out of sync, which should
    /// panic loudly in development builds rather than fail silently.
    pub fn execute_pruning(&self) -> Vec<String> {
        let removed = self.inner.write().pruning.execute(self.profile.pruning_execution_threshold);
        for candidate in &removed {
            self.registry.remove_synapse(&candidate.synapse_id);
            debug_assert!(
                self.registry.get_synaptic_info(&candidate.synapse_id).is_none(),
                "pruned synapse {} still present in ledger after removal",
                candidate.synapse_id
            );
            if self.registry.get_synaptic_info(&candidate.synapse_id).is_some() {
                tracing::error!(synapse_id = %candidate.synapse_id, "pruned synapse survived removal, ledger out of sync");
            }
        }
        removed.into_iter().map(|c| c.synapse_id).collect()
    }

    pub fn establish_patrol_route(&self, microglia_id: &str, route: PatrolRoute) {
        self.inner.write().routes.insert(microglia_id.to_string(), route);
    }

    /// One pass: enumerates components within the route's territory and
    /// performs one health check per component found. Always terminates
    /// in a single pass — an empty territory yields an empty-but-valid
    /// report rather than looping.
    pub fn execute_patrol(&self, microglia_id: &str) -> Result<PatrolReport> {
        let route = self
            .inner
            .read()
            .routes
            .get(microglia_id)
            .copied()
            .ok_or_else(|| MicrogliaError::RouteNotFound(microglia_id.to_string()))?;

        let found = self.registry.find_nearby(route.center, route.radius)?;
        let mut issues_found = 0;
        for component in &found {
            let connections = self.registry.get_connections(&component.id).len() as u32;
            let record = self.inner.write().health.update(&component.id, 0.0, connections, &self.profile);
            issues_found += record.issues.len();
        }

        Ok(PatrolReport { components_checked: found.len(), issues_found, at: Timestamp::now() })
    }

    pub fn request_component_birth(&self, request: BirthRequest) {
        self.inner.write().births.enqueue(request);
    }

    /// Dequeues a bounded batch ordered by priority then enqueue time,
    /// honors the capacity cap, and registers the created components.
    /// Requests that would exceed capacity are left queued rather than
    /// dropped.
    pub fn process_birth_requests(&self, batch_size: usize) -> Vec<ComponentInfo> {
        let batch = self.inner.write().births.dequeue_batch(batch_size);
        let mut created = Vec::new();
        for request in batch {
            match self.create_component(request.info.clone()) {
                Ok(info) => created.push(info),
                Err(MicrogliaError::CapacityExceeded { .. }) => {
                    warn!(id = %request.info.id, "birth request deferred: capacity exceeded");
                    self.inner.write().births.requeue_front(request);
                }
                Err(err) => {
                    warn!(id = %request.info.id, %err, "birth request rejected");
                }
            }
        }
        created
    }

    pub fn pending_births(&self) -> usize {
        self.inner.read().births.len()
    }
}
