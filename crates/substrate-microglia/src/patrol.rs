// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! Patrol routes: periodic health sweeps over an astrocyte-style
//! territory.

use std::time::Duration;
use substrate_types::{Position, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolRoute {
    pub center: Position,
    pub radius: f64,
    pub interval: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolReport {
    pub components_checked: usize,
    pub issues_found: usize,
    pub at: Timestamp,
}
