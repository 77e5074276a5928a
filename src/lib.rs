// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! # substrate
//!
//! The extracellular coordination substrate for bio-inspired neural
//! simulations: a process-local, in-memory layer that lets many
//! autonomous components (neurons, synapses, glia analogs) discover each
//! other spatially, exchange continuous (chemical) and discrete
//! (electrical) signals, and be lifecycle-managed by a surveillance
//! subsystem.
//!
//! This umbrella crate re-exports the five subsystem crates behind
//! feature flags so an embedding simulation can depend on `substrate`
//! alone, or take individual subsystems (`substrate-registry`,
//! `substrate-chemical`, ...) directly for selective use.
//!
//! ## Quick start
//!
//! ```
//! use std::time::Duration;
//! use substrate::prelude::*;
//!
//! let config = MatrixConfig {
//!     chemical_enabled: true,
//!     spatial_enabled: true,
//!     update_interval: Duration::from_millis(10),
//!     max_components: 1_000,
//! };
//! let matrix = Matrix::new(config, LifecycleProfile::default_profile());
//! matrix.start().unwrap();
//!
//! matrix
//!     .register_component(ComponentInfo::new("n1", ComponentKind::Neuron, Position::ORIGIN))
//!     .unwrap();
//! assert_eq!(matrix.count().unwrap(), 1);
//! matrix.stop().unwrap();
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Foundation: substrate-types, substrate-config           │
//! │  (Position, ComponentInfo, Criteria, MatrixConfig, ...)  │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Subsystems: substrate-registry, substrate-chemical,      │
//! │  substrate-signal, substrate-microglia                    │
//! │  (each owns its own state exclusively)                   │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Composition root: substrate-matrix                       │
//! │  (lifecycle state machine, factory routing, admission)    │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub use substrate_config as config;
pub use substrate_observability as observability;
pub use substrate_types as types;

#[cfg(feature = "registry")]
pub use substrate_registry as registry;

#[cfg(feature = "chemical")]
pub use substrate_chemical as chemical;

#[cfg(feature = "signal")]
pub use substrate_signal as signal;

#[cfg(feature = "microglia")]
pub use substrate_microglia as microglia;

#[cfg(feature = "matrix")]
pub use substrate_matrix as matrix;

/// Commonly used types and the `Matrix` facade, gathered for a single
/// glob import.
pub mod prelude {
    pub use crate::config::{LifecyclePreset, LifecycleProfile, LigandKinetics, MatrixConfig};
    pub use crate::types::{
        ComponentInfo, ComponentKind, ComponentState, Criteria, Metadata, MetadataValue, Position, Priority,
        Timestamp,
    };

    #[cfg(feature = "registry")]
    pub use crate::registry::{LoadStatus, SpatialRegistry, SynapticInfo, Territory};

    #[cfg(feature = "chemical")]
    pub use crate::chemical::{BindingTarget, ChemicalModulator, LigandKind};

    #[cfg(feature = "signal")]
    pub use crate::signal::{SignalEvent, SignalKind, SignalListener, SignalMediator};

    #[cfg(feature = "microglia")]
    pub use crate::microglia::{BirthRequest, HealthRecord, Microglia, PatrolReport, PatrolRoute, PruningCandidate};

    #[cfg(feature = "matrix")]
    pub use crate::matrix::{Matrix, MatrixState, NeuronConfig, SynapseConfig};
}
