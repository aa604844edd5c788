// src/state.rs
//
// Simulation state for the DroneWind engine.

use serde::{Deserialize, Serialize};

use crate::types::GOAL;

/// Full simulation state of a single episode.
///
/// The engine maintains the invariants: position inside the arena and
/// velocity components within ±MAX_SPEED after every step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    /// Drone coordinates.
    pub position: (f64, f64),
    /// Per-axis velocity.
    pub velocity: (f64, f64),
    /// Current wind disturbance vector.
    pub wind: (f64, f64),
    /// Steps taken since the last reset.
    pub step_count: u64,
}

impl SimState {
    /// Fresh state at the given start position with the given wind.
    pub fn at_start(start_position: (f64, f64), wind: (f64, f64)) -> Self {
        Self {
            position: start_position,
            velocity: (0.0, 0.0),
            wind,
            step_count: 0,
        }
    }

    /// Euclidean distance from the drone to the goal.
    pub fn distance_to_goal(&self) -> f64 {
        let dx = self.position.0 - GOAL.0;
        let dy = self.position.1 - GOAL.1;
        (dx * dx + dy * dy).sqrt()
    }
}
