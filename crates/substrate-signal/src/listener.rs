// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! The signal-listener capability: anything that can receive discrete
//! events from the mediator, addressed by trait object.

use crate::kind::SignalKind;
use substrate_types::Metadata;

/// Implemented by anything that can receive dispatched signals. Also
/// doubles as the electrical-receiver capability: a
/// component wired into the mediator via this trait receives signals
/// re-sent across an electrical coupling the same way it receives any
/// other dispatched signal, through the same `on_signal` path.
pub trait SignalListener: Send + Sync {
    fn id(&self) -> &str;
    /// Invoked synchronously for every `Send` whose kind this listener is
    /// subscribed to and whose `source_id` differs from this listener's
    /// own id.
    fn on_signal(&self, kind: SignalKind, source_id: &str, data: &Metadata);

    /// Signal kinds this listener subscribes to. Defaults to every kind;
    /// override to narrow.
    fn kinds(&self) -> Vec<SignalKind> {
        vec![SignalKind::Fired, SignalKind::Connected, SignalKind::Disconnected, SignalKind::ThresholdChanged]
    }
}
