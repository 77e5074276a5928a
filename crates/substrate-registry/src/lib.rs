// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! The spatial component registry: the astrocyte network's authoritative
//! store of component records, connectivity, synaptic activity, and
//! territories.

mod connectivity;
mod discovery;
mod error;
mod ledger;
mod registry;
mod territory;

pub use discovery::{neurons_near, synapses_between};
pub use error::{RegistryError, Result};
pub use ledger::SynapticInfo;
pub use registry::SpatialRegistry;
pub use territory::{LoadStatus, Territory};
