// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! Factory registries: user-supplied constructors for neuron and synapse
//! kinds, plus the config validation the Matrix applies before calling
//! them.

use crate::error::{MatrixError, Result};
use std::sync::Arc;
use substrate_chemical::BindingTarget;
use substrate_signal::SignalListener;
use substrate_types::{Metadata, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct NeuronConfig {
    pub kind: String,
    pub threshold: f64,
    pub decay_rate: f64,
    pub position: Position,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SynapseConfig {
    pub kind: String,
    pub threshold: f64,
    pub decay_rate: f64,
    pub presynaptic_id: String,
    pub postsynaptic_id: String,
    pub strength: f64,
    pub position: Position,
    pub metadata: Metadata,
}

/// What a factory hands back: the registry record plus any capability
/// adapters the Matrix should attach the product to.
pub struct Product {
    pub id: String,
    pub position: Position,
    pub metadata: Metadata,
    pub binding_target: Option<Arc<dyn BindingTarget>>,
    pub signal_listener: Option<Arc<dyn SignalListener>>,
}

pub type NeuronFactory = Arc<dyn Fn(&NeuronConfig) -> std::result::Result<Product, String> + Send + Sync>;
pub type SynapseFactory = Arc<dyn Fn(&SynapseConfig) -> std::result::Result<Product, String> + Send + Sync>;

/// Rejects non-finite thresholds, decay rates outside `[0, 1]`,
/// non-finite positions, and empty kind strings.
pub fn validate_neuron_config(config: &NeuronConfig) -> Result<()> {
    if config.kind.is_empty() {
        return Err(MatrixError::EmptyKind);
    }
    if !config.threshold.is_finite() {
        return Err(MatrixError::Validation(format!("threshold must be finite, got {}", config.threshold)));
    }
    if !(0.0..=1.0).contains(&config.decay_rate) {
        return Err(MatrixError::Validation(format!("decay_rate must be in [0, 1], got {}", config.decay_rate)));
    }
    if !config.position.is_finite() {
        return Err(MatrixError::Validation("position must be finite".to_string()));
    }
    Ok(())
}

pub fn validate_synapse_config(config: &SynapseConfig) -> Result<()> {
    if config.kind.is_empty() {
        return Err(MatrixError::EmptyKind);
    }
    if !config.threshold.is_finite() {
        return Err(MatrixError::Validation(format!("threshold must be finite, got {}", config.threshold)));
    }
    if !(0.0..=1.0).contains(&config.decay_rate) {
        return Err(MatrixError::Validation(format!("decay_rate must be in [0, 1], got {}", config.decay_rate)));
    }
    if !config.position.is_finite() {
        return Err(MatrixError::Validation("position must be finite".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> NeuronConfig {
        NeuronConfig {
            kind: "pyramidal".into(),
            threshold: 0.5,
            decay_rate: 0.1,
            position: Position::ORIGIN,
            metadata: Metadata::new(),
        }
    }

    #[test]
    fn rejects_empty_kind() {
        let mut c = config();
        c.kind.clear();
        assert!(matches!(validate_neuron_config(&c), Err(MatrixError::EmptyKind)));
    }

    #[test]
    fn rejects_nonfinite_threshold() {
        let mut c = config();
        c.threshold = f64::NAN;
        assert!(validate_neuron_config(&c).is_err());
    }

    #[test]
    fn rejects_decay_rate_outside_unit_interval() {
        let mut c = config();
        c.decay_rate = 1.5;
        assert!(validate_neuron_config(&c).is_err());
        c.decay_rate = -0.1;
        assert!(validate_neuron_config(&c).is_err());
    }

    #[test]
    fn rejects_nonfinite_position() {
        let mut c = config();
        c.position = Position::new(f64::INFINITY, 0.0, 0.0);
        assert!(validate_neuron_config(&c).is_err());
    }

    #[test]
    fn accepts_valid_config() {
        assert!(validate_neuron_config(&config()).is_ok());
    }
}
