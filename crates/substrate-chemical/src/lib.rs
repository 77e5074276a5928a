// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! The chemical modulator: per-ligand concentration fields, spatial
//! diffusion/decay, per-source rate limiting, and delivery to registered
//! binding targets.

mod binding;
mod concentration;
mod error;
mod ligand;
mod modulator;
mod release_log;

pub use binding::BindingTarget;
pub use error::{ChemicalError, Result};
pub use ligand::LigandKind;
pub use modulator::ChemicalModulator;
