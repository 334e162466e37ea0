//! Single octave 2D gradient noise

use crate::gradient::corner_dot;
use crate::permutation::PermutationTable;

/// Quintic smoothstep `6t^5 - 15t^4 + 10t^3`.
#[inline]
pub fn fade(t: f32) -> f32 {
    ((6.0 * t - 15.0) * t + 10.0) * t * t * t
}

/// Linear interpolation from `a1` (t = 0) to `a2` (t = 1). Not clamped.
#[inline]
pub fn lerp(t: f32, a1: f32, a2: f32) -> f32 {
    a1 + t * (a2 - a1)
}

/// Perlin noise over a seeded permutation table
#[derive(Debug, Clone)]
pub struct PerlinNoise {
    table: PermutationTable,
}

impl PerlinNoise {
    pub fn new(seed: i32) -> Self {
        Self::from_table(PermutationTable::new(seed))
    }

    pub fn from_table(table: PermutationTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &PermutationTable {
        &self.table
    }

    /// Noise value at `(x, y)`, in `[-1, 1]`.
    ///
    /// Corner offsets come from the fractional part in float, and lattice
    /// indices are reduced modulo 256 before any integer conversion, so
    /// coordinates beyond `i32` range stay bounded.
    ///
    /// Interpolates along x for the top and bottom corner pairs, then along y.
    pub fn noise(&self, x: f32, y: f32) -> f32 {
        let x0 = x.floor();
        let y0 = y.floor();
        let fx = x - x0;
        let fy = y - y0;
        let lx = lattice_index(x0);
        let ly = lattice_index(y0);
        let rx = lx + 1;
        let ry = ly + 1;

        let wx = fade(fx);
        let wy = fade(fy);

        let top = lerp(
            wx,
            corner_dot(&self.table, lx, ly, fx, fy),
            corner_dot(&self.table, rx, ly, fx - 1.0, fy),
        );
        let bottom = lerp(
            wx,
            corner_dot(&self.table, lx, ry, fx, fy - 1.0),
            corner_dot(&self.table, rx, ry, fx - 1.0, fy - 1.0),
        );

        lerp(wy, top, bottom)
    }
}

/// Floored lattice coordinate reduced to `0..=255`
#[inline]
fn lattice_index(floored: f32) -> i32 {
    floored.rem_euclid(256.0) as i32 & 0xFF
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_fixed_points() {
        assert_eq!(fade(0.0), 0.0);
        assert_eq!(fade(1.0), 1.0);
        assert_eq!(fade(0.5), 0.5);
    }

    #[test]
    fn test_fade_monotonic() {
        let mut prev = fade(0.0);
        for i in 1..=100 {
            let v = fade(i as f32 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 3.0, 7.0), 3.0);
        assert_eq!(lerp(1.0, 3.0, 7.0), 7.0);
        assert_eq!(lerp(0.5, 0.0, 10.0), 5.0);
        // Not clamped
        assert_eq!(lerp(2.0, 0.0, 1.0), 2.0);
    }

    #[test]
    fn test_zero_at_lattice_points() {
        let noise = PerlinNoise::new(42);
        for x in -4..4 {
            for y in -4..4 {
                assert_eq!(noise.noise(x as f32, y as f32), 0.0);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let a = PerlinNoise::new(1234);
        let b = PerlinNoise::new(1234);
        for i in 0..50 {
            let x = i as f32 * 0.37;
            let y = i as f32 * 1.13;
            assert_eq!(a.noise(x, y).to_bits(), b.noise(x, y).to_bits());
        }
    }

    #[test]
    fn test_single_octave_bounded() {
        let noise = PerlinNoise::new(42);
        for i in 0..200 {
            for j in 0..200 {
                let v = noise.noise(i as f32 * 0.071, j as f32 * 0.053);
                assert!(v.abs() <= 1.0 + 1e-6, "noise({i}, {j}) = {v}");
            }
        }
    }

    #[test]
    fn test_continuous_across_lattice_lines() {
        let noise = PerlinNoise::new(42);
        let eps = 1e-3;
        for k in 1..20 {
            let kx = k as f32;
            for y in [0.0f32, 0.25, 0.5, 1.0, 3.7] {
                let left = noise.noise(kx - eps, y);
                let right = noise.noise(kx + eps, y);
                assert!((left - right).abs() < 1e-2, "jump at x={kx}, y={y}: {left} vs {right}");

                let below = noise.noise(y, kx - eps);
                let above = noise.noise(y, kx + eps);
                assert!((below - above).abs() < 1e-2, "jump at y={kx}, x={y}: {below} vs {above}");
            }
        }
    }

    #[test]
    fn test_bounded_far_from_origin() {
        let noise = PerlinNoise::new(42);
        let coords = [1.0e10f32, -1.0e10, 2.5e9, 3.0e38, 1.0e6 + 0.25, 16_777_000.5, -4_194_303.75];
        for &x in &coords {
            for &y in &coords {
                let v = noise.noise(x, y);
                assert!(v.is_finite() && v.abs() <= 1.0 + 1e-6, "noise({x}, {y}) = {v}");
            }
        }
    }

    #[test]
    fn test_periodic_every_256_cells() {
        let noise = PerlinNoise::new(17);
        for (x, y) in [(3.25f32, 0.5f32), (0.75, 7.125), (100.5, 42.25)] {
            let v = noise.noise(x, y);
            assert_eq!(noise.noise(x + 256.0, y), v);
            assert_eq!(noise.noise(x - 256.0, y), v);
            assert_eq!(noise.noise(x, y + 512.0), v);
            assert_eq!(noise.noise(x - 1024.0, y - 256.0), v);
        }
    }

    #[test]
    fn test_spatial_variation() {
        let noise = PerlinNoise::new(0);
        let values: Vec<f32> = (0..40).map(|i| noise.noise(i as f32 * 0.5 + 0.1, i as f32 * 0.3 + 0.2)).collect();
        let min = values.iter().copied().fold(f32::INFINITY, f32::min);
        let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        assert!(max - min > 0.01, "noise should vary across space");
    }
}
