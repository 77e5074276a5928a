// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! The binding-target capability: anything that can receive a chemical
//! delivery, addressed by trait object rather than a concrete component
//! type.

use crate::ligand::LigandKind;
use substrate_types::Position;

/// Implemented by anything that can receive chemical deliveries.
pub trait BindingTarget: Send + Sync {
    fn id(&self) -> &str;
    fn position(&self) -> Position;
    /// Receptor kinds this target listens for.
    fn receptors(&self) -> &[LigandKind];
    /// Invoked synchronously once per qualifying delivery.
    fn bind(&self, kind: LigandKind, source_id: &str, concentration: f64);
}
