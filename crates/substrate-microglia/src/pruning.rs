// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! The pruning candidate queue.

use std::collections::HashMap;
use substrate_config::LifecycleProfile;
use substrate_types::Timestamp;

#[derive(Debug, Clone, PartialEq)]
pub struct PruningCandidate {
    pub synapse_id: String,
    pub presynaptic_id: String,
    pub postsynaptic_id: String,
    pub activity: f64,
    pub marked_at: Timestamp,
    pub score: f64,
}

/// Normalizes `activity` to `[0, 1]` against a reference scale past which
/// any additional activity no longer reduces pruning pressure.
const ACTIVITY_SCALE: f64 = 10.0;
/// Age, in milliseconds, past which a candidate's age contributes its
/// full weight to the score.
const AGE_SCALE_MS: f64 = 60_000.0;
/// Weight of the age term relative to the activity-deficit term.
const AGE_WEIGHT: f64 = 0.3;

/// `score = clamp01(aggressiveness * (1 - activity_norm) + age_factor)`,
/// strictly decreasing in `activity` and strictly increasing in age.
fn score(activity: f64, age_ms: f64, aggressiveness: f64) -> f64 {
    let activity_norm = (activity / ACTIVITY_SCALE).min(1.0).max(0.0);
    let age_factor = (age_ms / AGE_SCALE_MS).min(1.0).max(0.0) * AGE_WEIGHT;
    (aggressiveness * (1.0 - activity_norm) + age_factor).clamp(0.0, 1.0)
}

#[derive(Default)]
pub struct PruningQueue {
    candidates: HashMap<String, PruningCandidate>,
}

impl PruningQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, synapse_id: &str, pre: &str, post: &str, activity: f64, profile: &LifecycleProfile) {
        let now = Timestamp::now();
        let marked_at = self.candidates.get(synapse_id).map(|c| c.marked_at).unwrap_or(now);
        let age_ms = now.elapsed_ms_since(marked_at) as f64;
        let computed_score = score(activity, age_ms, profile.pruning_aggressiveness);
        self.candidates.insert(
            synapse_id.to_string(),
            PruningCandidate {
                synapse_id: synapse_id.to_string(),
                presynaptic_id: pre.to_string(),
                postsynaptic_id: post.to_string(),
                activity,
                marked_at,
                score: computed_score,
            },
        );
    }

    pub fn candidates(&self) -> Vec<PruningCandidate> {
        self.candidates.values().cloned().collect()
    }

    /// Removes and returns every candidate at or above `threshold`.
    pub fn execute(&mut self, threshold: f64) -> Vec<PruningCandidate> {
        let ids: Vec<String> = self
            .candidates
            .values()
            .filter(|c| c.score >= threshold)
            .map(|c| c.synapse_id.clone())
            .collect();
        ids.into_iter().filter_map(|id| self.candidates.remove(&id)).collect()
    }

    pub fn purge_component(&mut self, component_id: &str) {
        self.candidates
            .retain(|_, c| c.presynaptic_id != component_id && c.postsynaptic_id != component_id && c.synapse_id != component_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_activity_produces_higher_score_than_high_activity() {
        let low = score(0.0, 0.0, 0.5);
        let high = score(10.0, 0.0, 0.5);
        assert!(low > high);
    }

    #[test]
    fn older_candidates_score_higher() {
        let young = score(1.0, 0.0, 0.5);
        let old = score(1.0, AGE_SCALE_MS, 0.5);
        assert!(old > young);
    }

    #[test]
    fn score_is_bounded() {
        assert!(score(-5.0, 1_000_000.0, 10.0) <= 1.0);
        assert!(score(1000.0, 0.0, 0.0) >= 0.0);
    }

    #[test]
    fn aggressive_profile_yields_strictly_more_candidates() {
        let default_profile = LifecycleProfile::default_profile();
        let aggressive_profile = LifecycleProfile::aggressive();

        let mut default_queue = PruningQueue::new();
        let mut aggressive_queue = PruningQueue::new();
        for i in 0..20 {
            let activity = i as f64 * 0.5;
            default_queue.mark(&format!("syn{i}"), "a", "b", activity, &default_profile);
            aggressive_queue.mark(&format!("syn{i}"), "a", "b", activity, &aggressive_profile);
        }

        let default_count = default_queue
            .candidates()
            .iter()
            .filter(|c| c.score >= default_profile.pruning_execution_threshold)
            .count();
        let aggressive_count = aggressive_queue
            .candidates()
            .iter()
            .filter(|c| c.score >= aggressive_profile.pruning_execution_threshold)
            .count();

        assert!(aggressive_count > default_count);
    }

    #[test]
    fn execute_removes_candidates_at_or_above_threshold() {
        let profile = LifecycleProfile::default_profile();
        let mut queue = PruningQueue::new();
        queue.mark("syn1", "a", "b", 0.0, &profile);
        let removed = queue.execute(profile.pruning_aggressiveness);
        assert_eq!(removed.len(), 1);
        assert!(queue.candidates().is_empty());
    }

    #[test]
    fn purge_component_drops_touching_candidates() {
        let profile = LifecycleProfile::default_profile();
        let mut queue = PruningQueue::new();
        queue.mark("syn1", "a", "b", 0.0, &profile);
        queue.purge_component("a");
        assert!(queue.candidates().is_empty());
    }
}
