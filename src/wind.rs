// src/wind.rs
//
// Wind disturbance sampling.
//
// All environment randomness flows through WindSampler: a seeded ChaCha8
// stream producing per-axis uniform wind, scaled by the configured
// wind_scale. Identical seeds produce identical wind sequences on every
// platform.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::WIND_RANGE;

/// Deterministic wind vector sampler.
#[derive(Debug)]
pub struct WindSampler {
    scale: f64,
    rng: ChaCha8Rng,
}

impl WindSampler {
    /// Create a new sampler with the given scale and seed.
    pub fn new(scale: f64, seed: u64) -> Self {
        Self {
            scale,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Reseed the RNG stream.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Sample a wind vector: per-axis uniform in ±WIND_RANGE, scaled.
    ///
    /// The x component is drawn before the y component.
    pub fn sample(&mut self) -> (f64, f64) {
        let wx = self.scale * self.rng.gen_range(-WIND_RANGE..WIND_RANGE);
        let wy = self.scale * self.rng.gen_range(-WIND_RANGE..WIND_RANGE);
        (wx, wy)
    }

    /// Draw a fresh seed from the stream (used for unseeded resets).
    pub fn gen_seed(&mut self) -> u64 {
        self.rng.gen()
    }

    /// The configured wind scale.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wind_sampler_determinism() {
        let mut sampler1 = WindSampler::new(1.0, 42);
        let mut sampler2 = WindSampler::new(1.0, 42);

        for _ in 0..20 {
            assert_eq!(sampler1.sample(), sampler2.sample());
        }
    }

    #[test]
    fn test_wind_sampler_different_seeds() {
        let mut sampler1 = WindSampler::new(1.0, 42);
        let mut sampler2 = WindSampler::new(1.0, 43);

        // Different seeds should diverge immediately (with overwhelming
        // probability for a 2-draw f64 sample).
        assert_ne!(sampler1.sample(), sampler2.sample());
    }

    #[test]
    fn test_reseed_replays_the_stream() {
        let mut sampler = WindSampler::new(1.3, 7);
        let first: Vec<(f64, f64)> = (0..5).map(|_| sampler.sample()).collect();

        sampler.reseed(7);
        let replay: Vec<(f64, f64)> = (0..5).map(|_| sampler.sample()).collect();
        assert_eq!(first, replay);
    }

    #[test]
    fn test_samples_lie_within_scaled_range() {
        for scale in [0.8, 1.0, 1.8] {
            let mut sampler = WindSampler::new(scale, 12345);
            assert_eq!(sampler.scale(), scale);
            for _ in 0..100 {
                let (wx, wy) = sampler.sample();
                assert!(wx.abs() <= scale * WIND_RANGE + 1e-12);
                assert!(wy.abs() <= scale * WIND_RANGE + 1e-12);
            }
        }
    }
}
