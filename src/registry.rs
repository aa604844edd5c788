// src/registry.rs
//
// Environment registration.
//
// A registry maps environment ids to factory functions plus the static
// metadata a training harness needs (observation size, action count).
// Registration is explicit: callers build a registry and register specs
// into it; there is no process-global table.

use std::collections::BTreeMap;

use crate::config::EnvConfig;
use crate::env::{DroneWindEnv, RenderMode};
use crate::observation::OBS_DIM;
use crate::types::{EnvError, NUM_ACTIONS};

/// Canonical id of the drone environment.
pub const ENV_ID: &str = "DroneWind-v0";

/// Factory signature for registered environments.
///
/// Takes an optional render mode name and an optional partial config.
pub type EnvFactory = fn(Option<&str>, Option<&EnvConfig>) -> Result<DroneWindEnv, EnvError>;

/// Static description of a registered environment.
#[derive(Clone)]
pub struct EnvSpec {
    /// Environment id, e.g. "DroneWind-v0".
    pub id: &'static str,
    /// Observation vector length.
    pub obs_dim: usize,
    /// Number of discrete actions.
    pub num_actions: u32,
    /// Constructor for instances of this environment.
    pub factory: EnvFactory,
}

/// Registry of environment specs, keyed by id.
pub struct EnvRegistry {
    specs: BTreeMap<&'static str, EnvSpec>,
}

impl EnvRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            specs: BTreeMap::new(),
        }
    }

    /// Register a spec under its id. Re-registering an id replaces the
    /// previous spec.
    pub fn register(&mut self, spec: EnvSpec) {
        self.specs.insert(spec.id, spec);
    }

    /// Look up a spec by id.
    pub fn spec(&self, id: &str) -> Option<&EnvSpec> {
        self.specs.get(id)
    }

    /// All registered ids, in sorted order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.specs.keys().copied().collect()
    }

    /// Construct an environment by id.
    pub fn make(
        &self,
        id: &str,
        render_mode: Option<&str>,
        config: Option<&EnvConfig>,
    ) -> Result<DroneWindEnv, EnvError> {
        let spec = self.specs.get(id).ok_or_else(|| EnvError::UnknownEnv {
            id: id.to_string(),
        })?;
        (spec.factory)(render_mode, config)
    }
}

impl Default for EnvRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Factory for the drone environment.
fn make_drone_wind(
    render_mode: Option<&str>,
    config: Option<&EnvConfig>,
) -> Result<DroneWindEnv, EnvError> {
    let mode = match render_mode {
        Some(name) => Some(RenderMode::from_name(name)?),
        None => None,
    };
    DroneWindEnv::new(mode, config)
}

/// Spec for the drone environment.
pub fn drone_wind_spec() -> EnvSpec {
    EnvSpec {
        id: ENV_ID,
        obs_dim: OBS_DIM,
        num_actions: NUM_ACTIONS,
        factory: make_drone_wind,
    }
}

/// Registry with the drone environment pre-registered.
pub fn default_registry() -> EnvRegistry {
    let mut registry = EnvRegistry::new();
    registry.register(drone_wind_spec());
    registry
}
