// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! Per-ligand-kind release bookkeeping: a bounded recent-release ring
//! used by the concentration model, plus per-source rate-limit windows.

use std::collections::HashMap;
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use substrate_types::Position;

/// Releases older than this relative to the newest are dropped eagerly;
/// also caps the ring so a pathological release rate cannot grow memory
/// unboundedly. Chosen generously relative to the slowest ligand's
/// half-life (Dopamine, 500ms) so `ForceDecayUpdate` and concentration
/// queries still see contributions that matter.
const RING_CAPACITY: usize = 4096;
const MAX_RELEASE_AGE: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct ReleaseRecord {
    pub source_id: String,
    pub position: Option<Position>,
    pub concentration: f64,
    pub at: Instant,
}

#[derive(Default)]
pub struct ReleaseLog {
    ring: VecDeque<ReleaseRecord>,
    last_release: HashMap<String, Instant>,
}

impl ReleaseLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the remaining cooldown if `source_id` released within
    /// `min_interval`, else `None`.
    pub fn rate_limit_remaining(&self, source_id: &str, min_interval: Duration, now: Instant) -> Option<Duration> {
        let last = *self.last_release.get(source_id)?;
        let elapsed = now.saturating_duration_since(last);
        if elapsed < min_interval {
            Some(min_interval - elapsed)
        } else {
            None
        }
    }

    pub fn push(&mut self, source_id: String, position: Option<Position>, concentration: f64, at: Instant) {
        self.last_release.insert(source_id.clone(), at);
        self.ring.push_back(ReleaseRecord { source_id, position, concentration, at });
        while self.ring.len() > RING_CAPACITY {
            self.ring.pop_front();
        }
    }

    /// Drops releases older than [`MAX_RELEASE_AGE`] relative to `now`.
    pub fn evict_stale(&mut self, now: Instant) {
        while let Some(front) = self.ring.front() {
            if now.saturating_duration_since(front.at) > MAX_RELEASE_AGE {
                self.ring.pop_front();
            } else {
                break;
            }
        }
    }

    pub fn active(&self) -> impl Iterator<Item = &ReleaseRecord> {
        self.ring.iter()
    }

    pub fn reset_rate_limits(&mut self) {
        self.last_release.clear();
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.ring.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_blocks_within_window() {
        let mut log = ReleaseLog::new();
        let t0 = Instant::now();
        log.push("s1".into(), None, 1.0, t0);
        assert!(log.rate_limit_remaining("s1", Duration::from_millis(10), t0).is_some());
        assert!(log
            .rate_limit_remaining("s1", Duration::from_millis(10), t0 + Duration::from_millis(20))
            .is_none());
    }

    #[test]
    fn reset_clears_windows() {
        let mut log = ReleaseLog::new();
        let t0 = Instant::now();
        log.push("s1".into(), None, 1.0, t0);
        log.reset_rate_limits();
        assert!(log.rate_limit_remaining("s1", Duration::from_secs(1), t0).is_none());
    }

    #[test]
    fn ring_is_bounded() {
        let mut log = ReleaseLog::new();
        let t0 = Instant::now();
        for i in 0..(RING_CAPACITY + 10) {
            log.push(format!("s{i}"), None, 1.0, t0);
        }
        assert_eq!(log.len(), RING_CAPACITY);
    }
}
