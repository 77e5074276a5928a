// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! Priority ordering shared by the birth request queue.

use serde::{Deserialize, Serialize};

/// Priority of a birth request. Ordered `Low < Medium < High < Emergency`
/// so a `BinaryHeap` (max-heap) naturally pops `Emergency` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Emergency,
}
