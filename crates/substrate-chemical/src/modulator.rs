// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! The chemical modulator: concentration fields per ligand kind, release
//! rate limiting, and synchronous delivery to binding targets.

use crate::binding::BindingTarget;
use crate::concentration::{contribution, distance_between};
use crate::error::{ChemicalError, Result};
use crate::ligand::LigandKind;
use crate::release_log::ReleaseLog;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use substrate_registry::SpatialRegistry;
use tracing::{debug, info, trace, warn};

struct ChemicalInner {
    logs: HashMap<LigandKind, ReleaseLog>,
    targets: HashMap<String, Arc<dyn BindingTarget>>,
}

impl Default for ChemicalInner {
    fn default() -> Self {
        let mut logs = HashMap::new();
        for kind in LigandKind::ALL {
            logs.insert(kind, ReleaseLog::new());
        }
        Self { logs, targets: HashMap::new() }
    }
}

/// Owns release logs and binding-target registrations. Looks source
/// positions up from a [`SpatialRegistry`] but does not own it.
pub struct ChemicalModulator {
    registry: Arc<SpatialRegistry>,
    inner: RwLock<ChemicalInner>,
    running: Arc<AtomicBool>,
    thread_handle: Mutex<Option<thread::JoinHandle<()>>>,
    update_interval: Duration,
}

impl ChemicalModulator {
    pub fn new(registry: Arc<SpatialRegistry>, update_interval: Duration) -> Self {
        Self {
            registry,
            inner: RwLock::new(ChemicalInner::default()),
            running: Arc::new(AtomicBool::new(false)),
            thread_handle: Mutex::new(None),
            update_interval,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Spawns the background maintenance thread, which periodically
    /// evicts stale release records. Errs if already started.
    pub fn start(self: &Arc<Self>) -> Result<()> {
        if self.running.swap(true, Ordering::AcqRel) {
            return Err(ChemicalError::AlreadyStarted);
        }
        info!("starting chemical modulator maintenance thread");
        let modulator = Arc::clone(self);
        let running = Arc::clone(&self.running);
        let interval = self.update_interval;
        let handle = thread::spawn(move || {
            while running.load(Ordering::Relaxed) {
                thread::sleep(interval);
                if !running.load(Ordering::Relaxed) {
                    break;
                }
                modulator.force_decay_update();
            }
        });
        *self.thread_handle.lock() = Some(handle);
        Ok(())
    }

    /// Signals and joins the maintenance thread. Errs if not running.
    pub fn stop(&self) -> Result<()> {
        if !self.running.swap(false, Ordering::AcqRel) {
            return Err(ChemicalError::NotStarted);
        }
        info!("stopping chemical modulator maintenance thread");
        if let Some(handle) = self.thread_handle.lock().take() {
            let _ = handle.join();
        }
        Ok(())
    }

    /// Registers a binding target for chemical delivery.
    pub fn register_binding_target(&self, target: Arc<dyn BindingTarget>) -> Result<()> {
        if target.id().is_empty() {
            return Err(ChemicalError::EmptyTargetId);
        }
        self.inner.write().targets.insert(target.id().to_string(), target);
        Ok(())
    }

    pub fn unregister_binding_target(&self, id: &str) {
        self.inner.write().targets.remove(id);
    }

    /// Releases `concentration` units of `kind` from `source_id`.
    ///
    /// Per-source, per-kind rate limiting is enforced against the kind's
    /// configured `min_release_interval`. If `source_id` is unknown to
    /// the registry, the release is still recorded but without a spatial
    /// anchor, so it can never satisfy a distance-based delivery — it
    /// contributes to no target's concentration until the source
    /// registers a position.
    pub fn release_ligand(&self, kind: LigandKind, source_id: &str, concentration: f64) -> Result<()> {
        if source_id.is_empty() {
            return Err(ChemicalError::EmptyId);
        }
        if !concentration.is_finite() || concentration < 0.0 {
            return Err(ChemicalError::InvalidConcentration(concentration));
        }

        let kinetics = kind.default_kinetics();
        let now = Instant::now();
        let mut inner = self.inner.write();
        let log = inner.logs.get_mut(&kind).expect("every ligand kind has a log");

        if let Some(retry_after) = log.rate_limit_remaining(source_id, kinetics.min_release_interval, now) {
            return Err(ChemicalError::RateLimited {
                source: source_id.to_string(),
                kind,
                retry_after_ms: retry_after.as_millis() as u64,
            });
        }

        let position = self.registry.get(source_id).map(|c| c.position);
        trace!(?kind, source_id, concentration, has_position = position.is_some(), "releasing ligand");
        log.push(source_id.to_string(), position, concentration, now);

        let Some(position) = position else {
            debug!(source_id, "release recorded without spatial anchor, skipping delivery");
            return Ok(());
        };

        for target in inner.targets.values() {
            if !target.receptors().contains(&kind) {
                continue;
            }
            let distance = distance_between(&position, &target.position());
            let c = contribution(concentration, Duration::ZERO, distance, &kinetics);
            if c >= kinetics.binding_threshold {
                target.bind(kind, source_id, c);
            }
        }
        Ok(())
    }

    /// Sum of all active releases' contributions to `kind`'s
    /// concentration at `position`.
    pub fn concentration_at(&self, kind: LigandKind, position: substrate_types::Position) -> f64 {
        let kinetics = kind.default_kinetics();
        let now = Instant::now();
        let inner = self.inner.read();
        let Some(log) = inner.logs.get(&kind) else { return 0.0 };
        log.active()
            .filter_map(|record| {
                let source_position = record.position?;
                let elapsed = now.saturating_duration_since(record.at);
                let distance = distance_between(&position, &source_position);
                Some(contribution(record.concentration, elapsed, distance, &kinetics))
            })
            .sum()
    }

    /// Forces an immediate maintenance tick (eviction of stale release
    /// records), independent of the background thread's cadence. Used by
    /// tests that want deterministic control over when cleanup runs.
    pub fn force_decay_update(&self) {
        let now = Instant::now();
        let mut inner = self.inner.write();
        for log in inner.logs.values_mut() {
            log.evict_stale(now);
        }
    }

    pub fn reset_rate_limits(&self) {
        let mut inner = self.inner.write();
        for log in inner.logs.values_mut() {
            log.reset_rate_limits();
        }
    }
}

impl Drop for ChemicalModulator {
    fn drop(&mut self) {
        if self.is_running() {
            warn!("ChemicalModulator dropped while running, stopping maintenance thread");
            self.running.store(false, Ordering::Release);
            if let Some(handle) = self.thread_handle.lock().take() {
                let _ = handle.join();
            }
        }
    }
}
