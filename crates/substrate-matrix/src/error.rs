// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for the Matrix facade.

use crate::state::MatrixState;
use substrate_config::ConfigValidationError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    #[error("configuration is invalid: {0}")]
    Validation(String),

    #[error("configuration rejected: {0:?}")]
    ConfigInvalid(Vec<ConfigValidationError>),

    #[error("operation not admitted in state {state:?}")]
    NotAdmitted { state: MatrixState },

    #[error("no factory registered for kind: {0}")]
    UnknownKind(String),

    #[error("kind must not be empty")]
    EmptyKind,

    #[error("factory failed: {0}")]
    FactoryFailed(String),

    #[error(transparent)]
    Registry(#[from] substrate_registry::RegistryError),

    #[error(transparent)]
    Chemical(#[from] substrate_chemical::ChemicalError),

    #[error(transparent)]
    Signal(#[from] substrate_signal::SignalError),

    #[error(transparent)]
    Microglia(#[from] substrate_microglia::MicrogliaError),
}

impl From<Vec<ConfigValidationError>> for MatrixError {
    fn from(errors: Vec<ConfigValidationError>) -> Self {
        MatrixError::ConfigInvalid(errors)
    }
}

pub type Result<T> = std::result::Result<T, MatrixError>;
