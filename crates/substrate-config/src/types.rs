// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! Configuration records.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level configuration consumed by the Matrix façade at `Start`.
///
/// `max_components` is signed so that "negative values are invalid" (per
/// spec) is a representable, validatable state rather than a value the
/// type system silently forbids — `validate_matrix_config` is what turns
/// a negative cap into a rejected `Start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixConfig {
    pub chemical_enabled: bool,
    pub spatial_enabled: bool,
    #[serde(with = "duration_millis")]
    pub update_interval: Duration,
    pub max_components: i64,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            chemical_enabled: true,
            spatial_enabled: true,
            update_interval: Duration::from_millis(10),
            max_components: 50_000,
        }
    }
}

/// Per-ligand-kind kinetics: reference peak concentration, half-life,
/// diffusion radius, and per-source maximum release rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LigandKinetics {
    pub peak_concentration: f64,
    #[serde(with = "duration_millis")]
    pub half_life: Duration,
    pub diffusion_radius_um: f64,
    #[serde(with = "duration_millis")]
    pub min_release_interval: Duration,
    pub binding_threshold: f64,
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let millis = u64::deserialize(d)?;
        Ok(Duration::from_millis(millis))
    }
}

/// Lifecycle tuning profile consumed by the microglia subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LifecycleProfile {
    /// Multiplies the pruning score's activity-deficit term; `Aggressive`
    /// uses a higher value so unused synapses cross the execution
    /// threshold sooner.
    pub pruning_aggressiveness: f64,
    /// Score at or above which `ExecutePruning` removes a candidate.
    pub pruning_execution_threshold: f64,
    /// Rolling-average smoothing factor for health scoring, in `(0, 1]`.
    pub health_decay_rate: f64,
    /// Cadence at which a patrol route is expected to be re-run. Advisory
    /// only — `ExecutePatrol` is always caller-driven.
    pub patrol_interval: Duration,
    /// Target activity band considered healthy.
    pub target_activity_low: f64,
    pub target_activity_high: f64,
    /// Expected connection-count band considered healthy.
    pub expected_connections_low: u32,
    pub expected_connections_high: u32,
}

impl LifecycleProfile {
    pub const fn default_profile() -> Self {
        Self {
            pruning_aggressiveness: 0.5,
            pruning_execution_threshold: 0.75,
            health_decay_rate: 0.2,
            patrol_interval: Duration::from_millis(500),
            target_activity_low: 0.1,
            target_activity_high: 0.8,
            expected_connections_low: 1,
            expected_connections_high: 20,
        }
    }

    pub const fn conservative() -> Self {
        Self {
            pruning_aggressiveness: 0.25,
            pruning_execution_threshold: 0.9,
            health_decay_rate: 0.1,
            patrol_interval: Duration::from_millis(1000),
            target_activity_low: 0.05,
            target_activity_high: 0.9,
            expected_connections_low: 1,
            expected_connections_high: 30,
        }
    }

    pub const fn aggressive() -> Self {
        Self {
            pruning_aggressiveness: 0.8,
            pruning_execution_threshold: 0.55,
            health_decay_rate: 0.35,
            patrol_interval: Duration::from_millis(250),
            target_activity_low: 0.2,
            target_activity_high: 0.7,
            expected_connections_low: 2,
            expected_connections_high: 15,
        }
    }
}

impl Default for LifecycleProfile {
    fn default() -> Self {
        Self::default_profile()
    }
}

/// Named lifecycle presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecyclePreset {
    Default,
    Conservative,
    Aggressive,
}

impl LifecyclePreset {
    pub fn profile(self) -> LifecycleProfile {
        match self {
            LifecyclePreset::Default => LifecycleProfile::default_profile(),
            LifecyclePreset::Conservative => LifecycleProfile::conservative(),
            LifecyclePreset::Aggressive => LifecycleProfile::aggressive(),
        }
    }
}
