//! DroneWind core library.
//!
//! A 2D drone navigation environment for reinforcement learning. The drone
//! applies discrete unit thrusts in a fixed square arena while a randomly
//! drifting wind pushes it around; episodes end when the drone reaches the
//! goal region. The binary (`src/main.rs`) is just a thin rollout harness
//! around these components.
//!
//! # Architecture
//!
//! - **Types** (`types`): Arena constants, the discrete action set, and the
//!   error type shared across the crate.
//!
//! - **Config** (`config`): Partial overrides (`EnvConfig`) resolved onto
//!   defaults and validated into a `ResolvedConfig`.
//!
//! - **Environment** (`env`): Gym-style `DroneWindEnv` (reset, step, render,
//!   close) plus `VecEnv` for parallel rollouts. Deterministic given seeds.
//!
//! - **Identity** (`identity`): Hash-derived per-identity configs, so every
//!   participant trains against a stable personal variant.
//!
//! - **Registry** (`registry`): Explicit id-to-factory registration; no
//!   process-global tables.
//!
//! - **Logging** (`logging`): JSONL step sinks for rollout inspection.

pub mod config;
pub mod env;
pub mod identity;
pub mod logging;
pub mod observation;
pub mod registry;
pub mod state;
pub mod types;
pub mod wind;

// --- Re-exports for ergonomic external use ---------------------------------

pub use config::{EnvConfig, ResolvedConfig};
pub use env::{DroneWindEnv, RenderMode, StepInfo, StepResult, VecEnv};
pub use identity::{derive_seed, generate_config};
pub use logging::{EventSink, FileSink, NoopSink, StepRecord};
pub use observation::{Observation, OBS_DIM};
pub use registry::{default_registry, EnvRegistry, EnvSpec, ENV_ID};
pub use state::SimState;
pub use types::{Action, EnvError};

// --- Cross-module smoke tests -----------------------------------------------
