// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! Directed connectivity graph with an incoming-edge index so that
//! removing a component can purge both directions without a full scan.

use std::collections::{HashMap, HashSet};

#[derive(Debug, Default)]
pub struct ConnectivityGraph {
    outgoing: HashMap<String, HashSet<String>>,
    incoming: HashMap<String, HashSet<String>>,
}

impl ConnectivityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent: a duplicate edge is a no-op. Self-connections permitted.
    pub fn connect(&mut self, source: &str, target: &str) {
        self.outgoing
            .entry(source.to_string())
            .or_default()
            .insert(target.to_string());
        self.incoming
            .entry(target.to_string())
            .or_default()
            .insert(source.to_string());
    }

    pub fn outgoing_of(&self, id: &str) -> Vec<String> {
        self.outgoing
            .get(id)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Remove every edge touching `id`, in either direction.
    pub fn purge(&mut self, id: &str) {
        if let Some(targets) = self.outgoing.remove(id) {
            for target in &targets {
                if let Some(incoming) = self.incoming.get_mut(target) {
                    incoming.remove(id);
                }
            }
        }
        if let Some(sources) = self.incoming.remove(id) {
            for source in &sources {
                if let Some(outgoing) = self.outgoing.get_mut(source) {
                    outgoing.remove(id);
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn edge_count(&self) -> usize {
        self.outgoing.values().map(|s| s.len()).sum()
    }
}
