// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! Synaptic activity ledger.

use std::collections::{HashMap, HashSet};
use substrate_types::Timestamp;

#[derive(Debug, Clone, PartialEq)]
pub struct SynapticInfo {
    pub synapse_id: String,
    pub presynaptic_id: String,
    pub postsynaptic_id: String,
    /// `[-1, +1]`; negative is inhibitory.
    pub strength: f64,
    pub activity_count: u64,
    pub last_activity: Timestamp,
}

#[derive(Debug, Default)]
pub struct SynapticLedger {
    entries: HashMap<String, SynapticInfo>,
    /// component id -> synapse ids touching it, for O(touched) purge.
    by_endpoint: HashMap<String, HashSet<String>>,
}

impl SynapticLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records (or updates) an activity event. The caller has already
    /// verified both endpoints are registered.
    pub fn record(&mut self, synapse_id: &str, pre: &str, post: &str, strength: f64) {
        let entry = self
            .entries
            .entry(synapse_id.to_string())
            .or_insert_with(|| SynapticInfo {
                synapse_id: synapse_id.to_string(),
                presynaptic_id: pre.to_string(),
                postsynaptic_id: post.to_string(),
                strength,
                activity_count: 0,
                last_activity: Timestamp::now(),
            });
        entry.strength = strength;
        entry.activity_count += 1;
        entry.last_activity = Timestamp::now();

        self.by_endpoint
            .entry(pre.to_string())
            .or_default()
            .insert(synapse_id.to_string());
        self.by_endpoint
            .entry(post.to_string())
            .or_default()
            .insert(synapse_id.to_string());
    }

    pub fn get(&self, synapse_id: &str) -> Option<SynapticInfo> {
        self.entries.get(synapse_id).cloned()
    }

    /// Synapse ids whose ledger entry directly connects `pre` to `post`.
    pub fn between(&self, pre: &str, post: &str) -> Vec<String> {
        self.entries
            .values()
            .filter(|info| info.presynaptic_id == pre && info.postsynaptic_id == post)
            .map(|info| info.synapse_id.clone())
            .collect()
    }

    /// Removes a single ledger entry by its own synapse id, cleaning up
    /// both endpoints' indices. Idempotent on unknown synapse ids.
    pub fn remove(&mut self, synapse_id: &str) -> Option<SynapticInfo> {
        let info = self.entries.remove(synapse_id)?;
        if let Some(set) = self.by_endpoint.get_mut(&info.presynaptic_id) {
            set.remove(synapse_id);
        }
        if let Some(set) = self.by_endpoint.get_mut(&info.postsynaptic_id) {
            set.remove(synapse_id);
        }
        Some(info)
    }

    /// Delete every ledger entry touching `component_id`, either as an
    /// endpoint or as the entry's own synapse id (a synapse is itself a
    /// registered component, keyed by `component_id` in `entries` rather
    /// than `by_endpoint`).
    pub fn purge_component(&mut self, component_id: &str) {
        if let Some(synapse_ids) = self.by_endpoint.remove(component_id) {
            for synapse_id in synapse_ids {
                if let Some(info) = self.entries.remove(&synapse_id) {
                    let other = if info.presynaptic_id == component_id {
                        &info.postsynaptic_id
                    } else {
                        &info.presynaptic_id
                    };
                    if let Some(set) = self.by_endpoint.get_mut(other) {
                        set.remove(&synapse_id);
                    }
                }
            }
        }
        if let Some(info) = self.entries.remove(component_id) {
            if let Some(set) = self.by_endpoint.get_mut(&info.presynaptic_id) {
                set.remove(component_id);
            }
            if let Some(set) = self.by_endpoint.get_mut(&info.postsynaptic_id) {
                set.remove(component_id);
            }
        }
    }
}
