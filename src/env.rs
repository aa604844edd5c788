// src/env.rs
//
// Gym-style transition engine for the DroneWind environment.
//
// - DroneWindEnv: single environment (reset, step, render, close)
// - VecEnv: vectorised environments for parallel rollouts
// - Deterministic execution given seeds; the drifting wind is the only
//   randomness

use serde::{Deserialize, Serialize};

use crate::config::{EnvConfig, ResolvedConfig};
use crate::observation::Observation;
use crate::state::SimState;
use crate::types::{
    Action, EnvError, GOAL_RADIUS, GOAL_REWARD, MAX_SPEED, STEP_PENALTY, STEP_SIZE, THRUST_GAIN,
    X_BOUNDS, Y_BOUNDS,
};
use crate::wind::WindSampler;

/// Render surface selector.
///
/// Only the textual surface exists. The name form is parsed at the
/// registration boundary; anything else fails construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderMode {
    /// One text line per render call.
    Human,
}

impl RenderMode {
    /// Parse a render mode name from the registration surface.
    pub fn from_name(name: &str) -> Result<Self, EnvError> {
        match name {
            "human" => Ok(RenderMode::Human),
            other => Err(EnvError::InvalidConfig {
                field: "render_mode",
                message: format!("unsupported render mode '{}'", other),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RenderMode::Human => "human",
        }
    }
}

/// Result of a single environment step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepResult {
    /// The observation after taking the action.
    pub observation: Observation,
    /// The reward for this step.
    pub reward: f64,
    /// Whether the episode reached the goal.
    pub terminated: bool,
    /// Whether the episode was cut off externally. Always false here;
    /// horizon enforcement belongs to the training harness.
    pub truncated: bool,
    /// Auxiliary step information.
    pub info: StepInfo,
}

/// Auxiliary step information.
///
/// The step contract returns an empty record; the struct is kept as a
/// stable extension point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StepInfo {}

/// Gym-style drone environment.
///
/// A point drone moves in a fixed square arena under discrete thrust and a
/// randomly drifting wind:
/// - reset(seed) -> (observation, info)
/// - step(action_id) -> StepResult
///
/// All state transitions are deterministic given the seed.
#[derive(Debug)]
pub struct DroneWindEnv {
    /// Resolved configuration (validated at construction).
    config: ResolvedConfig,
    /// Render surface, if any.
    render_mode: Option<RenderMode>,
    /// Wind sampler; owns the only RNG.
    sampler: WindSampler,
    /// Current state.
    state: SimState,
    /// Current seed.
    seed: u64,
}

impl DroneWindEnv {
    /// Create a new environment.
    ///
    /// Resolves the optional partial config onto the defaults, validates it
    /// and performs an initial reset, so the environment is immediately
    /// steppable.
    pub fn new(
        render_mode: Option<RenderMode>,
        config: Option<&EnvConfig>,
    ) -> Result<Self, EnvError> {
        let resolved = ResolvedConfig::resolve(config)?;

        let mut env = Self {
            config: resolved,
            render_mode,
            sampler: WindSampler::new(resolved.wind_scale, 0),
            state: SimState::at_start(resolved.start_position, (0.0, 0.0)),
            seed: 0,
        };
        env.reset(None);
        Ok(env)
    }

    /// Reset the environment with an optional seed.
    ///
    /// `Some(seed)` reseeds the wind stream; `None` draws the next seed
    /// from the current stream, so unseeded episodes can still be replayed
    /// via `seed()`.
    ///
    /// Returns the initial observation and an empty info record.
    pub fn reset(&mut self, seed: Option<u64>) -> (Observation, StepInfo) {
        let seed = seed.unwrap_or_else(|| self.sampler.gen_seed());
        self.seed = seed;
        self.sampler.reseed(seed);

        let wind = self.sampler.sample();
        self.state = SimState::at_start(self.config.start_position, wind);

        (Observation::from_state(&self.state), StepInfo::default())
    }

    /// Take a step in the environment.
    ///
    /// The action id is decoded first; an out-of-range id fails with
    /// `InvalidAction` and leaves the state untouched.
    pub fn step(&mut self, action: u32) -> Result<StepResult, EnvError> {
        let action = Action::from_id(action)?;
        let (tx, ty) = action.thrust();
        let (wx, wy) = self.state.wind;

        // Velocity under thrust + wind, clamped per axis.
        let vx = (self.state.velocity.0 + THRUST_GAIN * (tx + wx)).clamp(-MAX_SPEED, MAX_SPEED);
        let vy = (self.state.velocity.1 + THRUST_GAIN * (ty + wy)).clamp(-MAX_SPEED, MAX_SPEED);
        self.state.velocity = (vx, vy);

        // Position, clamped to the arena per axis.
        let x = (self.state.position.0 + STEP_SIZE * vx).clamp(X_BOUNDS.0, X_BOUNDS.1);
        let y = (self.state.position.1 + STEP_SIZE * vy).clamp(Y_BOUNDS.0, Y_BOUNDS.1);
        self.state.position = (x, y);

        // Wind drifts on a fixed cadence and nowhere else.
        self.state.step_count += 1;
        if self.state.step_count % self.config.wind_update_interval == 0 {
            self.state.wind = self.sampler.sample();
        }

        let terminated = self.state.distance_to_goal() < GOAL_RADIUS;
        let reward = if terminated { GOAL_REWARD } else { STEP_PENALTY };

        Ok(StepResult {
            observation: Observation::from_state(&self.state),
            reward,
            terminated,
            truncated: false,
            info: StepInfo::default(),
        })
    }

    /// Render the current state as a single text line.
    ///
    /// Pure: no state mutation. The caller decides whether to print, based
    /// on the render mode.
    pub fn render(&self) -> String {
        format!(
            "pos=({:.3}, {:.3}) vel=({:.3}, {:.3}) wind=({:.3}, {:.3}) steps={}",
            self.state.position.0,
            self.state.position.1,
            self.state.velocity.0,
            self.state.velocity.1,
            self.state.wind.0,
            self.state.wind.1,
            self.state.step_count,
        )
    }

    /// Release resources. Nothing to release here; present for lifecycle
    /// compliance.
    pub fn close(&mut self) {}

    /// Get current state (for testing and harnesses).
    pub fn state(&self) -> &SimState {
        &self.state
    }

    /// Get current seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the render mode.
    pub fn render_mode(&self) -> Option<RenderMode> {
        self.render_mode
    }

    /// Resolved start position.
    pub fn start_position(&self) -> (f64, f64) {
        self.config.start_position
    }

    /// Resolved wind scale.
    pub fn wind_scale(&self) -> f64 {
        self.config.wind_scale
    }

    /// Resolved wind update interval.
    pub fn wind_update_interval(&self) -> u64 {
        self.config.wind_update_interval
    }
}

/// Vectorised environment for parallel rollouts.
///
/// Manages N independent DroneWindEnv instances.
pub struct VecEnv {
    /// Individual environments.
    envs: Vec<DroneWindEnv>,
}

impl VecEnv {
    /// Create a vectorised environment with N copies sharing one config.
    pub fn new(n: usize, config: Option<&EnvConfig>) -> Result<Self, EnvError> {
        let mut envs = Vec::with_capacity(n);
        for _ in 0..n {
            envs.push(DroneWindEnv::new(None, config)?);
        }
        Ok(Self { envs })
    }

    /// Get the number of environments.
    pub fn num_envs(&self) -> usize {
        self.envs.len()
    }

    /// Reset all environments with optional per-environment seeds.
    ///
    /// If seeds is None, or has fewer elements than envs, the remaining
    /// environments draw their own seeds.
    pub fn reset_all(&mut self, seeds: Option<&[u64]>) -> Vec<Observation> {
        self.envs
            .iter_mut()
            .enumerate()
            .map(|(i, env)| {
                let seed = seeds.and_then(|s| s.get(i).copied());
                env.reset(seed).0
            })
            .collect()
    }

    /// Step all environments with the given action ids.
    ///
    /// Actions must have the same length as envs.
    pub fn step(&mut self, actions: &[u32]) -> Result<Vec<StepResult>, EnvError> {
        assert_eq!(
            actions.len(),
            self.envs.len(),
            "Actions length must match number of environments"
        );

        self.envs
            .iter_mut()
            .zip(actions.iter())
            .map(|(env, &action)| env.step(action))
            .collect()
    }

    /// Get all environment states (for testing).
    pub fn states(&self) -> Vec<&SimState> {
        self.envs.iter().map(|e| e.state()).collect()
    }

    /// Get all current seeds.
    pub fn seeds(&self) -> Vec<u64> {
        self.envs.iter().map(|e| e.seed()).collect()
    }
}
