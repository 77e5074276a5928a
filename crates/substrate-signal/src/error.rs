// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for the signal mediator.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignalError {
    #[error("listener id must not be empty")]
    EmptyId,

    #[error("electrical conductance must be finite, got {0}")]
    InvalidConductance(f64),

    #[error("no electrical coupling between {0} and {1}")]
    CouplingNotFound(String, String),
}

pub type Result<T> = std::result::Result<T, SignalError>;
