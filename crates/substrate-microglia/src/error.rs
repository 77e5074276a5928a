// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for the lifecycle and surveillance subsystem.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MicrogliaError {
    #[error("component capacity exceeded: {current} components at cap {max}")]
    CapacityExceeded { current: usize, max: usize },

    #[error("activity must be finite, got {0}")]
    InvalidActivity(f64),

    #[error("patrol route not found for microglia: {0}")]
    RouteNotFound(String),

    #[error("internal invariant violated: {0}")]
    Invariant(String),

    #[error(transparent)]
    Registry(#[from] substrate_registry::RegistryError),
}

pub type Result<T> = std::result::Result<T, MicrogliaError>;
