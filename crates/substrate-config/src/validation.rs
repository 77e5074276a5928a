// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation.
//!
//! Collects every violation before failing, rather than stopping at the
//! first bad field, so a caller fixing their config sees the whole list
//! in one round trip.

use crate::types::{LifecycleProfile, LigandKinetics, MatrixConfig};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    NegativeMaxComponents(i64),
    ZeroUpdateInterval,
    OutOfRange { field: &'static str, value: f64, low: f64, high: f64 },
    InvalidConnectionBand { low: u32, high: u32 },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeMaxComponents(v) => {
                write!(f, "max_components must be >= 0, got {v}")
            }
            Self::ZeroUpdateInterval => {
                write!(f, "update_interval must be non-zero")
            }
            Self::OutOfRange { field, value, low, high } => {
                write!(f, "{field} = {value} is outside valid range [{low}, {high}]")
            }
            Self::InvalidConnectionBand { low, high } => {
                write!(f, "expected_connections_low ({low}) must be <= expected_connections_high ({high})")
            }
        }
    }
}

/// Validate a [`MatrixConfig`], collecting every violation.
///
/// `max_components < 0` always fails. A zero `update_interval` is
/// rejected as well, because it can never let the chemical decay ticker
/// make progress.
pub fn validate_matrix_config(config: &MatrixConfig) -> Result<(), Vec<ConfigValidationError>> {
    let mut errors = Vec::new();

    if config.max_components < 0 {
        errors.push(ConfigValidationError::NegativeMaxComponents(config.max_components));
    }
    if config.update_interval.is_zero() {
        errors.push(ConfigValidationError::ZeroUpdateInterval);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_ligand_kinetics(k: &LigandKinetics) -> Result<(), Vec<ConfigValidationError>> {
    let mut errors = Vec::new();
    if k.peak_concentration < 0.0 || !k.peak_concentration.is_finite() {
        errors.push(ConfigValidationError::OutOfRange {
            field: "peak_concentration",
            value: k.peak_concentration,
            low: 0.0,
            high: f64::INFINITY,
        });
    }
    if k.diffusion_radius_um <= 0.0 || !k.diffusion_radius_um.is_finite() {
        errors.push(ConfigValidationError::OutOfRange {
            field: "diffusion_radius_um",
            value: k.diffusion_radius_um,
            low: 0.0,
            high: f64::INFINITY,
        });
    }
    if k.binding_threshold < 0.0 || !k.binding_threshold.is_finite() {
        errors.push(ConfigValidationError::OutOfRange {
            field: "binding_threshold",
            value: k.binding_threshold,
            low: 0.0,
            high: f64::INFINITY,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_lifecycle_profile(p: &LifecycleProfile) -> Result<(), Vec<ConfigValidationError>> {
    let mut errors = Vec::new();

    for (field, value) in [
        ("pruning_aggressiveness", p.pruning_aggressiveness),
        ("pruning_execution_threshold", p.pruning_execution_threshold),
        ("health_decay_rate", p.health_decay_rate),
        ("target_activity_low", p.target_activity_low),
        ("target_activity_high", p.target_activity_high),
    ] {
        if !(0.0..=1.0).contains(&value) {
            errors.push(ConfigValidationError::OutOfRange { field, value, low: 0.0, high: 1.0 });
        }
    }

    if p.expected_connections_low > p.expected_connections_high {
        errors.push(ConfigValidationError::InvalidConnectionBand {
            low: p.expected_connections_low,
            high: p.expected_connections_high,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
