// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! The concentration model: exponential time decay times a Gaussian
//! spatial falloff, summed over active releases of a single ligand kind.

use std::time::Duration;
use substrate_config::LigandKinetics;
use substrate_types::Position;

/// `f(d) = exp(-(d/sigma)^2)`, with `sigma` chosen so that
/// `f(diffusion_radius) == 0.05` — i.e. the kind's configured diffusion
/// radius is the point at which concentration has fallen to 5% of the
/// value at the source. Strictly decreasing in `d`, `f(0) == 1`.
fn spatial_falloff(distance: f64, diffusion_radius_um: f64) -> f64 {
    if diffusion_radius_um <= 0.0 {
        return if distance == 0.0 { 1.0 } else { 0.0 };
    }
    let sigma = diffusion_radius_um / (1.0_f64 / 0.05).ln().sqrt();
    (-(distance / sigma).powi(2)).exp()
}

/// `exp(-ln(2) * elapsed / half_life)`: true half-life decay, so
/// `elapsed == half_life` halves the concentration exactly.
fn time_decay(elapsed: Duration, half_life: Duration) -> f64 {
    if half_life.is_zero() {
        return if elapsed.is_zero() { 1.0 } else { 0.0 };
    }
    let ratio = elapsed.as_secs_f64() / half_life.as_secs_f64();
    (-std::f64::consts::LN_2 * ratio).exp()
}

/// Concentration contributed by one release, `elapsed` after it fired, at
/// `distance` away, scaled by the release's own emitted amount.
pub fn contribution(emitted: f64, elapsed: Duration, distance: f64, kinetics: &LigandKinetics) -> f64 {
    emitted * time_decay(elapsed, kinetics.half_life) * spatial_falloff(distance, kinetics.diffusion_radius_um)
}

pub fn distance_between(a: &Position, b: &Position) -> f64 {
    a.distance(b)
}
