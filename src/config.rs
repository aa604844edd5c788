// src/config.rs
//
// Environment configuration for the DroneWind engine.
//
// EnvConfig is a partial-override record: every field is optional and unset
// fields fall back to the defaults below when the engine resolves the record
// at construction time. Validation happens once, during resolution, so the
// engine can rely on the invariants afterwards.

use serde::{Deserialize, Serialize};

use crate::types::{EnvError, X_BOUNDS, Y_BOUNDS};

/// Default start position.
pub const DEFAULT_START_POSITION: (f64, f64) = (0.0, 0.0);
/// Default wind scale multiplier.
pub const DEFAULT_WIND_SCALE: f64 = 1.0;
/// Default number of steps between wind resamples.
pub const DEFAULT_WIND_UPDATE_INTERVAL: u64 = 10;

/// Partial environment configuration.
///
/// A serialized mapping with a subset of the keys deserializes into a valid
/// record; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// Spawn position after reset. Must lie inside the arena.
    pub start_position: Option<(f64, f64)>,
    /// Multiplier on the sampled wind vector. Must be finite and positive.
    pub wind_scale: Option<f64>,
    /// Steps between wind resamples. Must be at least 1.
    pub wind_update_interval: Option<u64>,
}

impl EnvConfig {
    pub fn with_start_position(mut self, position: (f64, f64)) -> Self {
        self.start_position = Some(position);
        self
    }

    pub fn with_wind_scale(mut self, scale: f64) -> Self {
        self.wind_scale = Some(scale);
        self
    }

    pub fn with_wind_update_interval(mut self, interval: u64) -> Self {
        self.wind_update_interval = Some(interval);
        self
    }
}

/// Fully resolved environment parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedConfig {
    pub start_position: (f64, f64),
    pub wind_scale: f64,
    pub wind_update_interval: u64,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            start_position: DEFAULT_START_POSITION,
            wind_scale: DEFAULT_WIND_SCALE,
            wind_update_interval: DEFAULT_WIND_UPDATE_INTERVAL,
        }
    }
}

impl ResolvedConfig {
    /// Merge an optional partial record onto the defaults, field by field,
    /// and validate the result.
    pub fn resolve(config: Option<&EnvConfig>) -> Result<Self, EnvError> {
        let mut resolved = Self::default();

        if let Some(cfg) = config {
            if let Some(position) = cfg.start_position {
                resolved.start_position = position;
            }
            if let Some(scale) = cfg.wind_scale {
                resolved.wind_scale = scale;
            }
            if let Some(interval) = cfg.wind_update_interval {
                resolved.wind_update_interval = interval;
            }
        }

        resolved.validate()?;
        Ok(resolved)
    }

    fn validate(&self) -> Result<(), EnvError> {
        let (x, y) = self.start_position;
        let x_ok = x.is_finite() && x >= X_BOUNDS.0 && x <= X_BOUNDS.1;
        let y_ok = y.is_finite() && y >= Y_BOUNDS.0 && y <= Y_BOUNDS.1;
        if !x_ok || !y_ok {
            return Err(EnvError::InvalidConfig {
                field: "start_position",
                message: format!("({}, {}) is outside the arena", x, y),
            });
        }

        if !self.wind_scale.is_finite() || self.wind_scale <= 0.0 {
            return Err(EnvError::InvalidConfig {
                field: "wind_scale",
                message: format!("{} is not a positive finite number", self.wind_scale),
            });
        }

        if self.wind_update_interval == 0 {
            return Err(EnvError::InvalidConfig {
                field: "wind_update_interval",
                message: "must be at least 1 step".to_string(),
            });
        }

        Ok(())
    }
}
