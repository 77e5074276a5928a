// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! The signal mediator: discrete event dispatch plus the electrical
//! coupling table.

use crate::coupling::ElectricalCouplings;
use crate::error::{Result, SignalError};
use crate::history::{History, SignalEvent};
use crate::kind::SignalKind;
use crate::listener::SignalListener;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use substrate_types::{Metadata, Timestamp};
use tracing::trace;

#[derive(Default)]
struct MediatorInner {
    listeners: HashMap<String, Arc<dyn SignalListener>>,
    subscriptions: HashMap<SignalKind, HashSet<String>>,
    history: History,
    couplings: ElectricalCouplings,
}

/// Discrete event bus and electrical coupling fabric.
pub struct SignalMediator {
    inner: RwLock<MediatorInner>,
}

impl SignalMediator {
    pub fn new() -> Self {
        Self { inner: RwLock::new(MediatorInner::default()) }
    }

    /// Registers `listener` for `kinds`. Re-subscribing the same listener
    /// id to a kind it already subscribes to is a no-op.
    pub fn subscribe(&self, listener: Arc<dyn SignalListener>, kinds: &[SignalKind]) -> Result<()> {
        if listener.id().is_empty() {
            return Err(SignalError::EmptyId);
        }
        let mut inner = self.inner.write();
        let id = listener.id().to_string();
        inner.listeners.insert(id.clone(), listener);
        for kind in kinds {
            inner.subscriptions.entry(*kind).or_default().insert(id.clone());
        }
        Ok(())
    }

    pub fn unsubscribe(&self, listener_id: &str) {
        let mut inner = self.inner.write();
        inner.listeners.remove(listener_id);
        for set in inner.subscriptions.values_mut() {
            set.remove(listener_id);
        }
    }

    /// Removes every back-reference to `id`: its subscription, and any
    /// electrical coupling touching it. Used by the Registry's removal
    /// cascade.
    pub fn purge_component(&self, id: &str) {
        let mut inner = self.inner.write();
        inner.listeners.remove(id);
        for set in inner.subscriptions.values_mut() {
            set.remove(id);
        }
        inner.couplings.purge(id);
    }

    /// Dispatches `kind` to every subscribed listener except one whose id
    /// equals `source_id`, then appends the event to the history ring.
    pub fn send(&self, kind: SignalKind, source_id: &str, data: Metadata) -> Result<()> {
        if source_id.is_empty() {
            return Err(SignalError::EmptyId);
        }
        let inner = self.inner.read();
        if let Some(subscribers) = inner.subscriptions.get(&kind) {
            for listener_id in subscribers {
                if listener_id == source_id {
                    continue;
                }
                if let Some(listener) = inner.listeners.get(listener_id) {
                    trace!(?kind, source_id, listener_id, "dispatching signal");
                    listener.on_signal(kind, source_id, &data);
                }
            }
        }
        drop(inner);
        self.inner.write().history.push(SignalEvent { kind, source_id: source_id.to_string(), data, at: Timestamp::now() });
        Ok(())
    }

    pub fn recent_events(&self, limit: Option<usize>) -> Vec<SignalEvent> {
        self.inner.read().history.recent(limit)
    }

    pub fn establish_electrical_coupling(&self, a: &str, b: &str, conductance: f64) -> Result<f64> {
        if !conductance.is_finite() {
            return Err(SignalError::InvalidConductance(conductance));
        }
        Ok(self.inner.write().couplings.establish(a, b, conductance))
    }

    /// Symmetric; reads as `0.0` when no coupling has been established
    /// (or after removal).
    pub fn get_conductance(&self, a: &str, b: &str) -> f64 {
        self.inner.write().couplings.conductance(a, b)
    }

    pub fn remove_electrical_coupling(&self, a: &str, b: &str) -> Result<()> {
        if self.inner.write().couplings.remove(a, b) {
            Ok(())
        } else {
            Err(SignalError::CouplingNotFound(a.to_string(), b.to_string()))
        }
    }
}

impl Default for SignalMediator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    struct RecordingListener {
        id: String,
        calls: AtomicU64,
    }

    impl SignalListener for RecordingListener {
        fn id(&self) -> &str {
            &self.id
        }
        fn on_signal(&self, _kind: SignalKind, _source_id: &str, _data: &Metadata) {
            self.calls.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn send_excludes_self_source() {
        let mediator = SignalMediator::new();
        let listener = Arc::new(RecordingListener { id: "n1".into(), calls: AtomicU64::new(0) });
        mediator.subscribe(listener.clone(), &[SignalKind::Fired]).unwrap();
        mediator.send(SignalKind::Fired, "n1", Metadata::new()).unwrap();
        assert_eq!(listener.calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn send_reaches_other_subscribers() {
        let mediator = SignalMediator::new();
        let listener = Arc::new(RecordingListener { id: "n2".into(), calls: AtomicU64::new(0) });
        mediator.subscribe(listener.clone(), &[SignalKind::Fired]).unwrap();
        mediator.send(SignalKind::Fired, "n1", Metadata::new()).unwrap();
        assert_eq!(listener.calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn duplicate_subscription_is_a_no_op() {
        let mediator = SignalMediator::new();
        let listener = Arc::new(RecordingListener { id: "n2".into(), calls: AtomicU64::new(0) });
        mediator.subscribe(listener.clone(), &[SignalKind::Fired]).unwrap();
        mediator.subscribe(listener.clone(), &[SignalKind::Fired]).unwrap();
        mediator.send(SignalKind::Fired, "n1", Metadata::new()).unwrap();
        assert_eq!(listener.calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn history_records_sent_events() {
        let mediator = SignalMediator::new();
        mediator.send(SignalKind::Connected, "n1", Metadata::new()).unwrap();
        let recent = mediator.recent_events(None);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].source_id, "n1");
    }

    #[test]
    fn scenario_bidirectional_coupling_remove() {
        let mediator = SignalMediator::new();
        mediator.establish_electrical_coupling("n1", "n2", 0.8).unwrap();
        assert_eq!(mediator.get_conductance("n1", "n2"), 0.8);
        assert_eq!(mediator.get_conductance("n2", "n1"), 0.8);
        mediator.remove_electrical_coupling("n1", "n2").unwrap();
        assert_eq!(mediator.get_conductance("n1", "n2"), 0.0);
        assert_eq!(mediator.get_conductance("n2", "n1"), 0.0);
    }

    #[test]
    fn unsubscribe_stops_future_dispatch() {
        let mediator = SignalMediator::new();
        let listener = Arc::new(RecordingListener { id: "n2".into(), calls: AtomicU64::new(0) });
        mediator.subscribe(listener.clone(), &[SignalKind::Fired]).unwrap();
        mediator.unsubscribe("n2");
        mediator.send(SignalKind::Fired, "n1", Metadata::new()).unwrap();
        assert_eq!(listener.calls.load(Ordering::Relaxed), 0);
    }
}
