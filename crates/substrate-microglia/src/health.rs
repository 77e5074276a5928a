// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! Rolling health scoring for registered components.

use substrate_config::LifecycleProfile;
use substrate_types::Timestamp;

#[derive(Debug, Clone, PartialEq)]
pub struct HealthRecord {
    pub component_id: String,
    pub score: f64,
    pub issues: Vec<String>,
    pub activity: f64,
    pub connections: u32,
    pub last_check: Timestamp,
}

impl HealthRecord {
    fn new(component_id: &str) -> Self {
        Self {
            component_id: component_id.to_string(),
            score: 1.0,
            issues: Vec::new(),
            activity: 0.0,
            connections: 0,
            last_check: Timestamp::now(),
        }
    }

    /// Rolls the score toward an instantaneous assessment of `activity`
    /// and `connections` by `profile.health_decay_rate`, and refreshes
    /// the issue tags.
    fn apply(&mut self, activity: f64, connections: u32, profile: &LifecycleProfile) {
        let (instant, issues) = instant_assessment(activity, connections, profile);
        self.score = clamp01(self.score * (1.0 - profile.health_decay_rate) + instant * profile.health_decay_rate);
        self.issues = issues;
        self.activity = activity;
        self.connections = connections;
        self.last_check = Timestamp::now();
    }
}

fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// One-shot instantaneous health assessment, independent of history.
fn instant_assessment(activity: f64, connections: u32, profile: &LifecycleProfile) -> (f64, Vec<String>) {
    let mut issues = Vec::new();

    let activity_penalty = if activity < profile.target_activity_low {
        ((profile.target_activity_low - activity) / profile.target_activity_low.max(f64::EPSILON)).min(1.0)
    } else if activity > profile.target_activity_high {
        ((activity - profile.target_activity_high) / profile.target_activity_high.max(f64::EPSILON)).min(1.0)
    } else {
        0.0
    };
    if activity < profile.target_activity_low * 0.25 {
        issues.push("very_low_activity".to_string());
    }
    if activity > profile.target_activity_high * 1.5 {
        issues.push("hyperactive".to_string());
    }

    let low = f64::from(profile.expected_connections_low);
    let high = f64::from(profile.expected_connections_high);
    let conns = f64::from(connections);
    let connection_penalty = if conns < low {
        ((low - conns) / low.max(1.0)).min(1.0)
    } else if conns > high {
        ((conns - high) / high.max(1.0)).min(1.0)
    } else {
        0.0
    };
    if connections == 0 {
        issues.push("isolated".to_string());
    }
    if conns > high * 2.0 {
        issues.push("overconnected".to_string());
    }

    let instant = clamp01(1.0 - 0.5 * activity_penalty - 0.5 * connection_penalty);
    (instant, issues)
}

/// Health records keyed by component id, created lazily on first update.
#[derive(Default)]
pub struct HealthTable {
    records: std::collections::HashMap<String, HealthRecord>,
}

impl HealthTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, component_id: &str, activity: f64, connections: u32, profile: &LifecycleProfile) -> HealthRecord {
        let record = self.records.entry(component_id.to_string()).or_insert_with(|| HealthRecord::new(component_id));
        record.apply(activity, connections, profile);
        record.clone()
    }

    pub fn get(&self, component_id: &str) -> Option<HealthRecord> {
        self.records.get(component_id).cloned()
    }

    pub fn purge(&mut self, component_id: &str) {
        self.records.remove(component_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healthy_activity_and_connections_score_near_one() {
        let profile = LifecycleProfile::default_profile();
        let mut table = HealthTable::new();
        let record = table.update("n1", 0.4, 5, &profile);
        assert!(record.score > 0.8);
        assert!(record.issues.is_empty());
    }

    #[test]
    fn isolated_component_is_flagged() {
        let profile = LifecycleProfile::default_profile();
        let mut table = HealthTable::new();
        let record = table.update("n1", 0.4, 0, &profile);
        assert!(record.issues.contains(&"isolated".to_string()));
    }

    #[test]
    fn very_low_activity_is_flagged() {
        let profile = LifecycleProfile::default_profile();
        let mut table = HealthTable::new();
        let record = table.update("n1", 0.0, 5, &profile);
        assert!(record.issues.contains(&"very_low_activity".to_string()));
    }

    #[test]
    fn unknown_id_is_created_lazily() {
        let profile = LifecycleProfile::default_profile();
        let mut table = HealthTable::new();
        assert!(table.get("ghost").is_none());
        table.update("ghost", 0.4, 5, &profile);
        assert!(table.get("ghost").is_some());
    }

    #[test]
    fn score_stays_within_unit_interval() {
        let profile = LifecycleProfile::default_profile();
        let mut table = HealthTable::new();
        for _ in 0..20 {
            let record = table.update("n1", 10.0, 1000, &profile);
            assert!(record.score >= 0.0 && record.score <= 1.0);
        }
    }
}
