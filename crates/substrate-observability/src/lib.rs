// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! # substrate-observability
//!
//! This crate does not own the host application's logging configuration;
//! every subsystem crate instruments itself with `tracing` directly. What
//! belongs here is a console-only subscriber a test or example can
//! install, with no file rotation or persistence (see DESIGN.md).

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install a console `tracing` subscriber once per process, honoring
/// `RUST_LOG` if set and otherwise defaulting to `info`. Safe to call
/// from every test that wants log output — subsequent calls are no-ops.
pub fn init_test_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_test_tracing();
        init_test_tracing();
    }
}
