// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! The Matrix lifecycle state machine.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatrixState {
    Constructed,
    Starting,
    Running,
    Stopping,
    Stopped,
}

/// Operation classes gated by [`MatrixState`]. Structural and read-only
/// operations are always admitted; only functional operations are
/// state-gated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationClass {
    Structural,
    Functional,
    ReadOnly,
}

impl MatrixState {
    pub fn admits(self, class: OperationClass) -> bool {
        match class {
            OperationClass::Structural | OperationClass::ReadOnly => true,
            OperationClass::Functional => self == MatrixState::Running,
        }
    }
}
