// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! Component identity: kind, lifecycle state, and the registry record.

use crate::clock::Timestamp;
use crate::metadata::Metadata;
use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Kind tag for a registered component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    Neuron,
    Synapse,
    Gate,
    Plugin,
}

/// Lifecycle state of a registered component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentState {
    Active,
    Inactive,
    ShuttingDown,
}

/// Registry record for a single component.
///
/// Duplicate registrations with the same `id` overwrite the existing
/// record but keep its original `registered_at` (first write wins for the
/// timestamp, last write wins for everything else).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentInfo {
    pub id: String,
    pub kind: ComponentKind,
    pub state: ComponentState,
    pub position: Position,
    pub registered_at: Timestamp,
    pub metadata: Metadata,
}

impl ComponentInfo {
    pub fn new(id: impl Into<String>, kind: ComponentKind, position: Position) -> Self {
        Self {
            id: id.into(),
            kind,
            state: ComponentState::Active,
            position,
            registered_at: Timestamp::now(),
            metadata: Metadata::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_state(mut self, state: ComponentState) -> Self {
        self.state = state;
        self
    }
}
