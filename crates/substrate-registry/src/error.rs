// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for the spatial registry.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("component id must not be empty")]
    EmptyId,

    #[error("component not found: {0}")]
    ComponentNotFound(String),

    #[error("territory not found for astrocyte: {0}")]
    TerritoryNotFound(String),

    #[error("radius must be non-negative and finite, got {0}")]
    InvalidRadius(f64),

    #[error("synaptic strength must be in [-1, 1], got {0}")]
    InvalidStrength(f64),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
