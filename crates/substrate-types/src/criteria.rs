// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! Query criteria for [`Find`](../index.html)-style registry queries.

use crate::component::{ComponentKind, ComponentState};
use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Conjunctive filter over kind, state, and a spatial predicate.
///
/// All supplied predicates must hold. When `center` is present, `radius`
/// is required (enforced by [`Criteria::spatial`]); `radius == 0.0` means
/// "exact position match only". A `center` with no `radius` supplied is a
/// construction error rather than a silently-ignored filter, but a `radius`
/// supplied without a `center` is a semantic no-op for the spatial
/// predicate, per spec.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Criteria {
    pub kind: Option<ComponentKind>,
    pub state: Option<ComponentState>,
    pub center: Option<Position>,
    pub radius: Option<f64>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: ComponentKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_state(mut self, state: ComponentState) -> Self {
        self.state = Some(state);
        self
    }

    /// Stores `radius` as given, including negative or non-finite values.
    /// This type has no error channel of its own; callers that build a
    /// `Criteria` from untrusted input (e.g.
    /// [`SpatialRegistry::find`](../substrate_registry/struct.SpatialRegistry.html#method.find))
    /// are expected to validate `radius` themselves and surface a
    /// recoverable error rather than relying on this builder to reject it.
    pub fn with_spatial(mut self, center: Position, radius: f64) -> Self {
        self.center = Some(center);
        self.radius = Some(radius);
        self
    }

    /// Whether `pos` satisfies this criteria's spatial predicate.
    ///
    /// The comparison is done in squared space (`squared_distance <=
    /// radius^2`), never `distance <= radius` against an unsquared
    /// radius. `radius == 0.0` requires exact coordinate equality. A
    /// `center` with no spatial filter configured (i.e. `radius` is
    /// `None`) or a `radius` with no `center` is treated as "no spatial
    /// filter" (always matches). A negative or non-finite radius never
    /// matches anything, rather than panicking or matching everything.
    pub fn matches_spatial(&self, pos: &Position) -> bool {
        match (self.center, self.radius) {
            (Some(_), Some(radius)) if !radius.is_finite() || radius < 0.0 => false,
            (Some(center), Some(radius)) => {
                if radius == 0.0 {
                    center.coincides_with(pos)
                } else {
                    pos.distance_squared(&center) <= radius * radius
                }
            }
            _ => true,
        }
    }
}
