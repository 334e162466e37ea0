//! Multi-octave (fBm) noise field generation
//!
//! Each pixel sums `octave_count` noise samples at growing frequency and
//! shrinking amplitude, applies a final gain, clamps to `[-1, 1]` and is
//! written as an opaque grayscale RGBA8 pixel.

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::buffer::{PixelBuffer, CHANNELS};
use crate::error::{NoiseError, Result};
use crate::kernel::PerlinNoise;

/// Parameters of a noise field. Defaults reproduce the reference texture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseFieldConfig {
    /// Side of the square grid in pixels
    pub grid_size: u32,
    pub octave_count: u32,
    pub base_frequency: f32,
    pub base_amplitude: f32,
    /// Amplitude multiplier per octave, in (0, 1]
    pub amplitude_decay: f32,
    /// Frequency multiplier per octave, >= 1
    pub frequency_growth: f32,
    /// Applied to the octave sum before clamping
    pub final_gain: f32,
}

impl Default for NoiseFieldConfig {
    fn default() -> Self {
        Self {
            grid_size: 500,
            octave_count: 3,
            base_frequency: 0.005,
            base_amplitude: 1.0,
            amplitude_decay: 0.5,
            frequency_growth: 2.0,
            final_gain: 1.2,
        }
    }
}

impl NoiseFieldConfig {
    /// Reject configurations that cannot produce a meaningful buffer
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(NoiseError::invalid("grid_size", "must be positive"));
        }
        let side = self.grid_size as usize;
        if side.checked_mul(side).and_then(|n| n.checked_mul(CHANNELS)).is_none() {
            return Err(NoiseError::invalid("grid_size", format!("{} is too large", self.grid_size)));
        }
        if self.octave_count == 0 {
            return Err(NoiseError::invalid("octave_count", "must be positive"));
        }
        if !self.base_frequency.is_finite() || self.base_frequency <= 0.0 {
            return Err(NoiseError::invalid("base_frequency", format!("must be finite and positive, got {}", self.base_frequency)));
        }
        if !self.base_amplitude.is_finite() || self.base_amplitude <= 0.0 {
            return Err(NoiseError::invalid("base_amplitude", format!("must be finite and positive, got {}", self.base_amplitude)));
        }
        if !(self.amplitude_decay > 0.0 && self.amplitude_decay <= 1.0) {
            return Err(NoiseError::invalid("amplitude_decay", format!("must be in (0, 1], got {}", self.amplitude_decay)));
        }
        if !self.frequency_growth.is_finite() || self.frequency_growth < 1.0 {
            return Err(NoiseError::invalid("frequency_growth", format!("must be finite and >= 1, got {}", self.frequency_growth)));
        }
        if !self.final_gain.is_finite() {
            return Err(NoiseError::invalid("final_gain", format!("must be finite, got {}", self.final_gain)));
        }

        // Highest octave frequency times the largest pixel coordinate must stay finite in f32
        let top_frequency = f64::from(self.base_frequency) * f64::from(self.frequency_growth).powf(f64::from(self.octave_count - 1));
        let max_coordinate = top_frequency * f64::from(self.grid_size - 1).max(1.0);
        if !(max_coordinate < f64::from(f32::MAX) / 2.0) {
            return Err(NoiseError::invalid(
                "octave_count",
                format!("{} octaves push the sample frequency past f32 range", self.octave_count),
            ));
        }
        let max_value = f64::from(self.base_amplitude) * f64::from(self.octave_count) * f64::from(self.final_gain.abs()).max(1.0);
        if !(max_value < f64::from(f32::MAX) / 2.0) {
            return Err(NoiseError::invalid("base_amplitude", format!("{} overflows the octave sum", self.base_amplitude)));
        }
        Ok(())
    }
}

/// Clamp a field value to `[-1, 1]` and map it to a byte, truncating.
#[inline]
pub fn to_color(value: f32) -> u8 {
    let v = value.clamp(-1.0, 1.0);
    ((v + 1.0) * 0.5 * 255.0) as u8
}

/// Validated config bound to a seeded noise source
#[derive(Debug, Clone)]
pub struct FractalNoise {
    noise: PerlinNoise,
    config: NoiseFieldConfig,
}

impl FractalNoise {
    pub fn new(config: NoiseFieldConfig, seed: i32) -> Result<Self> {
        config.validate()?;
        Ok(Self { noise: PerlinNoise::new(seed), config })
    }

    pub fn config(&self) -> &NoiseFieldConfig {
        &self.config
    }

    pub fn noise(&self) -> &PerlinNoise {
        &self.noise
    }

    /// Octave sum times the final gain at pixel `(px, py)`, before clamping.
    pub fn sample(&self, px: u32, py: u32) -> f32 {
        let x = px as f32;
        let y = py as f32;

        let mut value = 0.0f32;
        let mut frequency = self.config.base_frequency;
        let mut amplitude = self.config.base_amplitude;

        for _ in 0..self.config.octave_count {
            value += self.noise.noise(x * frequency, y * frequency) * amplitude;
            frequency *= self.config.frequency_growth;
            amplitude *= self.config.amplitude_decay;
        }

        value * self.config.final_gain
    }

    #[inline]
    pub fn color_at(&self, px: u32, py: u32) -> u8 {
        to_color(self.sample(px, py))
    }

    /// Fill one x-stripe (`grid_size` pixels along y) of the output
    fn fill_stripe(&self, px: u32, stripe: &mut [u8]) {
        for (py, out) in stripe.chunks_exact_mut(CHANNELS).enumerate() {
            let color = self.color_at(px, py as u32);
            out.copy_from_slice(&[color, color, color, 255]);
        }
    }

    /// Generate the whole field on the calling thread, x outer, y inner.
    pub fn generate(&self) -> PixelBuffer {
        let size = self.config.grid_size;
        let start = Instant::now();

        let mut data = vec![0u8; PixelBuffer::byte_len(size)];
        let stripe_len = size as usize * CHANNELS;
        for (px, stripe) in data.chunks_exact_mut(stripe_len).enumerate() {
            self.fill_stripe(px as u32, stripe);
        }

        tracing::debug!(grid_size = size, elapsed_ms = start.elapsed().as_millis() as u64, "generated noise field");
        PixelBuffer::from_raw(size, data)
    }

    /// Same bytes as [`FractalNoise::generate`], one rayon task per x-stripe.
    pub fn generate_parallel(&self) -> PixelBuffer {
        let size = self.config.grid_size;
        let start = Instant::now();

        let mut data = vec![0u8; PixelBuffer::byte_len(size)];
        let stripe_len = size as usize * CHANNELS;
        data.par_chunks_exact_mut(stripe_len)
            .enumerate()
            .for_each(|(px, stripe)| self.fill_stripe(px as u32, stripe));

        tracing::debug!(grid_size = size, elapsed_ms = start.elapsed().as_millis() as u64, "generated noise field in parallel");
        PixelBuffer::from_raw(size, data)
    }
}

/// Generate a field for `(config, seed)`. Fails before any work on a bad config.
pub fn generate_field(config: &NoiseFieldConfig, seed: i32) -> Result<PixelBuffer> {
    let fractal = FractalNoise::new(config.clone(), seed)?;
    tracing::info!(seed, grid_size = config.grid_size, octaves = config.octave_count, "generating noise field");
    Ok(fractal.generate())
}

/// Parallel variant of [`generate_field`] with identical output
pub fn generate_field_parallel(config: &NoiseFieldConfig, seed: i32) -> Result<PixelBuffer> {
    let fractal = FractalNoise::new(config.clone(), seed)?;
    tracing::info!(seed, grid_size = config.grid_size, octaves = config.octave_count, "generating noise field (parallel)");
    Ok(fractal.generate_parallel())
}
