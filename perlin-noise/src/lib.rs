//! Deterministic 2D Perlin noise
//!
//! Architecture (leaf first):
//! 1. `random` - Seeded xorshift stream driving the table shuffle
//! 2. `permutation` - 512-entry permutation table (256 shuffled values, mirrored)
//! 3. `gradient` - Four diagonal gradients and the corner dot product
//! 4. `kernel` - Single octave noise: fade curve + bilinear interpolation
//! 5. `fractal` - Octave summation, gain, clamp and byte conversion
//!
//! Also includes:
//! - `buffer` - RGBA8 pixel buffer produced by a generation run
//! - `error` - Configuration errors

mod random;
mod permutation;
mod gradient;
mod kernel;
mod fractal;
mod buffer;
pub mod error;

pub use random::XorShift32;
pub use permutation::{PermutationTable, TABLE_LEN, UNIQUE_LEN};
pub use gradient::{Gradient, constant_vector, corner_dot, dot_product};
pub use kernel::{PerlinNoise, fade, lerp};
pub use fractal::{FractalNoise, NoiseFieldConfig, generate_field, generate_field_parallel, to_color};
pub use buffer::{PixelBuffer, CHANNELS};
pub use error::{NoiseError, Result};
