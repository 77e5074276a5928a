// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! Prioritized component birth intake.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use substrate_types::{ComponentInfo, Priority, Timestamp};

#[derive(Debug, Clone, PartialEq)]
pub struct BirthRequest {
    pub info: ComponentInfo,
    pub priority: Priority,
    /// Why this component should be born, for audit and patrol review.
    pub justification: String,
    /// Id of the caller that raised this request.
    pub requester_id: String,
}

struct QueueEntry {
    request: BirthRequest,
    enqueued_at: Timestamp,
    sequence: u64,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.request.priority == other.request.priority && self.sequence == other.sequence
    }
}
impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    /// Higher priority sorts greater (popped first by `BinaryHeap`); for
    /// equal priority, the earlier-enqueued entry sorts greater so it is
    /// popped first (FIFO within a priority band).
    fn cmp(&self, other: &Self) -> Ordering {
        self.request
            .priority
            .cmp(&other.request.priority)
            .then_with(|| other.enqueued_at.cmp(&self.enqueued_at))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

#[derive(Default)]
pub struct BirthQueue {
    heap: BinaryHeap<QueueEntry>,
    next_sequence: u64,
}

impl BirthQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, request: BirthRequest) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(QueueEntry { request, enqueued_at: Timestamp::now(), sequence });
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Removes and returns up to `limit` requests, highest priority
    /// (then earliest enqueue time) first.
    pub fn dequeue_batch(&mut self, limit: usize) -> Vec<BirthRequest> {
        let mut out = Vec::with_capacity(limit.min(self.heap.len()));
        while out.len() < limit {
            let Some(entry) = self.heap.pop() else { break };
            out.push(entry.request);
        }
        out
    }

    /// Puts `request` back in its priority band, behind anything else
    /// already waiting at that priority — used when a dequeued request
    /// fails validation or capacity and must remain queued rather than
    /// be dropped, without starving other requests at the same priority.
    pub fn requeue_front(&mut self, request: BirthRequest) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(QueueEntry { request, enqueued_at: Timestamp::now(), sequence });
    }
}
