// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! Lifecycle and surveillance ("microglia"): bounded component
//! creation/removal, health scoring, pruning, patrol, and prioritized
//! birth intake.

mod birth;
mod error;
mod health;
mod microglia;
mod patrol;
mod pruning;

pub use birth::{BirthQueue, BirthRequest};
pub use error::{MicrogliaError, Result};
pub use health::HealthRecord;
pub use microglia::Microglia;
pub use patrol::{PatrolReport, PatrolRoute};
pub use pruning::PruningCandidate;
