// src/observation.rs
//
// Observation schema for policy input.
//
// The observation is a flat 4-vector (x, y, vx, vy) with declared box
// bounds. It is serializable for logging and replay, and the canonical
// JSON bytes back the determinism tests.

use serde::{Deserialize, Serialize};

use crate::state::SimState;
use crate::types::{X_BOUNDS, Y_BOUNDS};

/// Observation vector dimension.
pub const OBS_DIM: usize = 4;

/// Declared bound on velocity components.
///
/// Deliberately looser than the dynamics clamp; the box describes the
/// observation space, it does not enforce it.
pub const OBS_VEL_BOUND: f64 = 5.0;

/// Per-dimension lower bounds of the observation box.
pub const OBS_LOW: [f64; OBS_DIM] = [X_BOUNDS.0, Y_BOUNDS.0, -OBS_VEL_BOUND, -OBS_VEL_BOUND];
/// Per-dimension upper bounds of the observation box.
pub const OBS_HIGH: [f64; OBS_DIM] = [X_BOUNDS.1, Y_BOUNDS.1, OBS_VEL_BOUND, OBS_VEL_BOUND];

/// State snapshot passed to policies.
///
/// Field order is the canonical vector order: position, then velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Drone x coordinate.
    pub x: f64,
    /// Drone y coordinate.
    pub y: f64,
    /// Velocity along x.
    pub vx: f64,
    /// Velocity along y.
    pub vy: f64,
}

impl Observation {
    /// Build an observation from the current state.
    pub fn from_state(state: &SimState) -> Self {
        Self {
            x: state.position.0,
            y: state.position.1,
            vx: state.velocity.0,
            vy: state.velocity.1,
        }
    }

    /// Flat vector in canonical order.
    pub fn to_array(&self) -> [f64; OBS_DIM] {
        [self.x, self.y, self.vx, self.vy]
    }

    /// Canonical JSON bytes for byte-stable comparisons.
    pub fn to_canonical_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        // serde_json preserves struct field order
        serde_json::to_vec(self)
    }
}
