// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! Convenience discovery helpers layered on top of [`SpatialRegistry`].

use crate::error::Result;
use crate::registry::SpatialRegistry;
use substrate_types::{ComponentInfo, ComponentKind, Position};

/// All active neurons within `radius` of `center`.
pub fn neurons_near(registry: &SpatialRegistry, center: Position, radius: f64) -> Result<Vec<ComponentInfo>> {
    Ok(registry
        .find_nearby(center, radius)?
        .into_iter()
        .filter(|c| c.kind == ComponentKind::Neuron)
        .collect())
}

/// Synapse ids whose recorded ledger entry connects `pre` to `post`
/// directly (ignores transitive paths).
pub fn synapses_between(registry: &SpatialRegistry, pre: &str, post: &str) -> Vec<String> {
    registry.synapses_between(pre, post)
}

#[cfg(test)]
mod tests {
    use super::*;
    use substrate_types::ComponentState;

    #[test]
    fn neurons_near_excludes_other_kinds() {
        let registry = SpatialRegistry::new();
        registry
            .register(ComponentInfo::new("n1", ComponentKind::Neuron, Position::new(0.0, 0.0, 0.0)))
            .unwrap();
        registry
            .register(ComponentInfo::new("s1", ComponentKind::Synapse, Position::new(0.0, 0.0, 0.0)))
            .unwrap();

        let found = neurons_near(&registry, Position::new(0.0, 0.0, 0.0), 1.0).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "n1");
    }

    #[test]
    fn synapses_between_reflects_ledger_entries() {
        let registry = SpatialRegistry::new();
        registry
            .register(
                ComponentInfo::new("n1", ComponentKind::Neuron, Position::new(0.0, 0.0, 0.0))
                    .with_state(ComponentState::Active),
            )
            .unwrap();
        registry
            .register(ComponentInfo::new("n2", ComponentKind::Neuron, Position::new(1.0, 0.0, 0.0)))
            .unwrap();
        registry.record_synaptic_activity("syn1", "n1", "n2", 0.5).unwrap();

        assert_eq!(synapses_between(&registry, "n1", "n2"), vec!["syn1".to_string()]);
        assert!(synapses_between(&registry, "n2", "n1").is_empty());
    }
}
