// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for the chemical modulator.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChemicalError {
    #[error("source id must not be empty")]
    EmptyId,

    #[error("concentration must be finite and non-negative, got {0}")]
    InvalidConcentration(f64),

    #[error("release rate limit exceeded for source {source} ligand {kind:?}, retry after {retry_after_ms}ms")]
    RateLimited { source: String, kind: crate::ligand::LigandKind, retry_after_ms: u64 },

    #[error("binding target id must not be empty")]
    EmptyTargetId,

    #[error("chemical modulator already started")]
    AlreadyStarted,

    #[error("chemical modulator not started")]
    NotStarted,
}

pub type Result<T> = std::result::Result<T, ChemicalError>;
