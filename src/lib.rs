//! Perlin noise textures
//!
//! Builds a seeded permutation table, evaluates multi-octave Perlin noise
//! over a square grid and packs the result into an RGBA8 grayscale texture.

pub mod error;
pub mod config;
pub mod texture;
pub use perlin_noise as noise;

pub use error::{Error, Result};
pub use config::{GeneratorSettings, random_seed};
pub use texture::{NoiseTexture, GeneratedTexture, generate_texture};
pub use noise::{
    NoiseFieldConfig, PixelBuffer, PermutationTable, PerlinNoise, FractalNoise,
    generate_field, generate_field_parallel,
};
