// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! Monotonic-enough wall clock helpers shared by every subsystem.
//!
//! All timestamps in this workspace are milliseconds since the Unix epoch.
//! A dedicated newtype keeps call sites from accidentally mixing a
//! timestamp with a plain duration or counter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;
        Timestamp(millis)
    }

    pub fn elapsed_ms_since(&self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}ms", self.0)
    }
}
