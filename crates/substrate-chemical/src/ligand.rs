// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! Ligand kinds and their default kinetics.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use substrate_config::LigandKinetics;

/// Fixed set of chemical messenger categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LigandKind {
    Glutamate,
    GABA,
    Dopamine,
    Serotonin,
    Acetylcholine,
}

impl LigandKind {
    pub const ALL: [LigandKind; 5] = [
        LigandKind::Glutamate,
        LigandKind::GABA,
        LigandKind::Dopamine,
        LigandKind::Serotonin,
        LigandKind::Acetylcholine,
    ];

    /// Reference kinetics tuned so that the fast synaptic transmitters
    /// (`Glutamate`, `GABA`) clear at cleft scale within single-digit
    /// milliseconds, while the neuromodulators (`Dopamine`, `Serotonin`)
    /// diffuse over tens of micrometers and linger for hundreds of
    /// milliseconds.
    pub fn default_kinetics(self) -> LigandKinetics {
        match self {
            LigandKind::Glutamate => LigandKinetics {
                peak_concentration: 1.0,
                half_life: Duration::from_micros(1_000),
                diffusion_radius_um: 0.02,
                min_release_interval: Duration::from_millis(2),
                binding_threshold: 0.05,
            },
            LigandKind::GABA => LigandKinetics {
                peak_concentration: 1.0,
                half_life: Duration::from_micros(2_000),
                diffusion_radius_um: 0.5,
                min_release_interval: Duration::from_millis(1),
                binding_threshold: 0.05,
            },
            LigandKind::Dopamine => LigandKinetics {
                peak_concentration: 1.0,
                half_life: Duration::from_millis(500),
                diffusion_radius_um: 20.0,
                min_release_interval: Duration::from_millis(20),
                binding_threshold: 0.01,
            },
            LigandKind::Serotonin => LigandKinetics {
                peak_concentration: 1.0,
                half_life: Duration::from_millis(300),
                diffusion_radius_um: 15.0,
                min_release_interval: Duration::from_millis(10),
                binding_threshold: 0.01,
            },
            LigandKind::Acetylcholine => LigandKinetics {
                peak_concentration: 1.0,
                half_life: Duration::from_millis(5),
                diffusion_radius_um: 5.0,
                min_release_interval: Duration::from_millis(2),
                binding_threshold: 0.02,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_positive_kinetics() {
        for kind in LigandKind::ALL {
            let k = kind.default_kinetics();
            assert!(k.peak_concentration > 0.0);
            assert!(!k.half_life.is_zero());
            assert!(k.diffusion_radius_um > 0.0);
        }
    }
}
