// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! Discrete signal kinds carried over the event bus.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalKind {
    Fired,
    Connected,
    Disconnected,
    ThresholdChanged,
}
