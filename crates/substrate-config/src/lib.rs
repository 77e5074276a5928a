// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! # substrate-config
//!
//! Configuration records for the extracellular coordination substrate:
//! the Matrix's top-level [`MatrixConfig`], per-ligand [`LigandKinetics`],
//! and microglia [`LifecycleProfile`] presets, plus validation that
//! collects every violation rather than failing on the first one.

pub mod types;
pub mod validation;

pub use types::{LifecycleProfile, LifecyclePreset, LigandKinetics, MatrixConfig};
pub use validation::{
    validate_lifecycle_profile, validate_ligand_kinetics, validate_matrix_config,
    ConfigValidationError,
};
