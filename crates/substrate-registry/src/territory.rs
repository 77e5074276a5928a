// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! Astrocyte territories: a sphere of influence subject to a neuron-count
//! cap, with load-adaptive shrinking.

use substrate_types::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Territory {
    pub center: substrate_types::Position,
    pub radius: f64,
    pub created_at: Timestamp,
}

/// Outcome of [`crate::SpatialRegistry::validate_astrocyte_load`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadStatus {
    Ok,
    Adjusted { old_radius: f64, new_radius: f64, count: usize, max_neurons: usize },
}

/// Shrinks `radius` by `sqrt(max_neurons / count)`, never below zero.
/// `count` is assumed to exceed `max_neurons` (checked by the caller).
pub fn shrink_radius(radius: f64, count: usize, max_neurons: usize) -> f64 {
    debug_assert!(count > max_neurons);
    if max_neurons == 0 {
        return 0.0;
    }
    let factor = (max_neurons as f64 / count as f64).sqrt();
    (radius * factor).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrink_matches_scenario_3() {
        // 40 * sqrt(4/16) = 40 * 0.5 = 20
        let new_radius = shrink_radius(40.0, 16, 4);
        assert!((new_radius - 20.0).abs() < 1e-3);
    }

    #[test]
    fn never_negative() {
        assert!(shrink_radius(10.0, 1000, 0) >= 0.0);
    }
}
