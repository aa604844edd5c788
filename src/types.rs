// src/types.rs
//
// Shared types and fixed parameters for the DroneWind engine.

use serde::{Deserialize, Serialize};

/// Arena bounds on the x axis (min, max).
pub const X_BOUNDS: (f64, f64) = (-10.0, 10.0);
/// Arena bounds on the y axis (min, max).
pub const Y_BOUNDS: (f64, f64) = (-10.0, 10.0);
/// Goal position inside the arena.
pub const GOAL: (f64, f64) = (5.0, 5.0);
/// The episode terminates once the drone is closer to the goal than this.
pub const GOAL_RADIUS: f64 = 0.5;
/// Per-axis speed limit.
pub const MAX_SPEED: f64 = 2.0;
/// Velocity integration gain applied to thrust + wind.
pub const THRUST_GAIN: f64 = 0.1;
/// Position integration gain applied to velocity.
pub const STEP_SIZE: f64 = 0.5;
/// Wind components are sampled uniformly from ±WIND_RANGE before scaling.
pub const WIND_RANGE: f64 = 0.2;
/// Reward paid on the step that reaches the goal radius.
pub const GOAL_REWARD: f64 = 100.0;
/// Reward for every other step.
pub const STEP_PENALTY: f64 = -1.0;
/// Number of discrete actions.
pub const NUM_ACTIONS: u32 = 4;

/// Discrete thrust command for the drone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// All actions in id order.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// Decode a raw action id.
    ///
    /// This is the single decoding boundary: anything outside the id set is
    /// rejected here, before any physics runs.
    pub fn from_id(id: u32) -> Result<Self, EnvError> {
        match id {
            0 => Ok(Action::Up),
            1 => Ok(Action::Down),
            2 => Ok(Action::Left),
            3 => Ok(Action::Right),
            other => Err(EnvError::InvalidAction { action: other }),
        }
    }

    /// The raw id for this action.
    pub fn id(self) -> u32 {
        match self {
            Action::Up => 0,
            Action::Down => 1,
            Action::Left => 2,
            Action::Right => 3,
        }
    }

    /// Unit thrust vector for this action.
    pub fn thrust(self) -> (f64, f64) {
        match self {
            Action::Up => (0.0, 1.0),
            Action::Down => (0.0, -1.0),
            Action::Left => (-1.0, 0.0),
            Action::Right => (1.0, 0.0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
        }
    }
}

/// Errors surfaced by the environment, its configuration and the registry.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvError {
    /// The action id is outside the discrete action set.
    InvalidAction { action: u32 },
    /// A configuration field failed validation at construction time.
    InvalidConfig {
        field: &'static str,
        message: String,
    },
    /// The registry has no entry for the requested environment id.
    UnknownEnv { id: String },
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvError::InvalidAction { action } => {
                write!(f, "Invalid action id {}: expected 0..{}", action, NUM_ACTIONS)
            }
            EnvError::InvalidConfig { field, message } => {
                write!(f, "Invalid config field '{}': {}", field, message)
            }
            EnvError::UnknownEnv { id } => {
                write!(f, "Unknown environment id '{}'", id)
            }
        }
    }
}

impl std::error::Error for EnvError {}
