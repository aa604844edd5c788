// src/identity.rs
//
// Identity-derived environment configuration.
//
// Maps an arbitrary identity string (user name, email, run label) to a
// deterministic EnvConfig, so every identity gets its own stable variant
// of the environment without any shared state.

use sha2::{Digest, Sha256};

use crate::config::EnvConfig;

/// Wind update intervals selectable by identity.
pub const INTERVAL_OPTIONS: [u64; 4] = [5, 10, 15, 20];

/// Start x positions selectable by identity.
pub const START_X_OPTIONS: [f64; 3] = [0.0, 0.5, 1.0];

/// Derive a 32-bit seed from an identity string.
///
/// SHA-256 over the UTF-8 bytes, big-endian, low 32 bits. Stable across
/// runs and platforms.
pub fn derive_seed(identity: &str) -> u32 {
    let mut hasher = Sha256::new();
    hasher.update(identity.as_bytes());
    let digest = hasher.finalize();
    u32::from_be_bytes([digest[28], digest[29], digest[30], digest[31]])
}

/// Generate the environment config for an identity.
///
/// Different bit ranges of the seed drive independent parameters:
/// - wind_scale: 0.80..=1.80 in steps of 0.01
/// - wind_update_interval: one of INTERVAL_OPTIONS
/// - start x: one of START_X_OPTIONS (y is always 0)
pub fn generate_config(identity: &str) -> EnvConfig {
    let seed = derive_seed(identity);

    let wind_scale = 0.8 + (seed % 101) as f64 / 100.0;
    let interval = INTERVAL_OPTIONS[((seed >> 8) % 4) as usize];
    let start_x = START_X_OPTIONS[((seed >> 16) % 3) as usize];

    EnvConfig::default()
        .with_start_position((start_x, 0.0))
        .with_wind_scale(wind_scale)
        .with_wind_update_interval(interval)
}
