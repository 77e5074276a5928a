// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! # substrate-types
//!
//! Shared value types for the extracellular coordination substrate:
//! [`Position`], component identity ([`ComponentKind`], [`ComponentState`],
//! [`ComponentInfo`]), query [`Criteria`], typed [`metadata::Metadata`],
//! and [`Priority`] ordering for the birth-request queue.
//!
//! These types carry no subsystem behavior — they are the common currency
//! passed between the spatial registry, chemical modulator, signal
//! mediator, and microglia crates.

pub mod clock;
pub mod component;
pub mod criteria;
pub mod metadata;
pub mod position;
pub mod priority;

pub use clock::Timestamp;
pub use component::{ComponentInfo, ComponentKind, ComponentState};
pub use criteria::Criteria;
pub use metadata::{Metadata, MetadataValue};
pub use position::Position;
pub use priority::Priority;
