// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! Bounded ring of recently-sent events, for inspection.

use crate::kind::SignalKind;
use std::collections::VecDeque;
use substrate_types::{Metadata, Timestamp};

pub const DEFAULT_HISTORY_CAPACITY: usize = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct SignalEvent {
    pub kind: SignalKind,
    pub source_id: String,
    pub data: Metadata,
    pub at: Timestamp,
}

pub struct History {
    capacity: usize,
    ring: VecDeque<SignalEvent>,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self { capacity: capacity.max(1), ring: VecDeque::new() }
    }

    pub fn push(&mut self, event: SignalEvent) {
        self.ring.push_back(event);
        while self.ring.len() > self.capacity {
            self.ring.pop_front();
        }
    }

    /// Most recent events first, capped at `limit` (or all retained
    /// events when `limit` is `None`).
    pub fn recent(&self, limit: Option<usize>) -> Vec<SignalEvent> {
        let take = limit.unwrap_or(self.ring.len());
        self.ring.iter().rev().take(take).cloned().collect()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
