// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! The signal mediator: discrete event bus and electrical coupling
//! fabric.

mod coupling;
mod error;
mod history;
mod kind;
mod listener;
mod mediator;

pub use coupling::{MAX_CONDUCTANCE, MIN_CONDUCTANCE};
pub use error::{Result, SignalError};
pub use history::{SignalEvent, DEFAULT_HISTORY_CAPACITY};
pub use kind::SignalKind;
pub use listener::SignalListener;
pub use mediator::SignalMediator;
