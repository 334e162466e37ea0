//! Gradient selection and corner dot products

use crate::permutation::PermutationTable;

/// One of the four diagonal gradients, indexed by the low two bits of a table value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gradient {
    /// (1, 1)
    PosPos,
    /// (-1, 1)
    NegPos,
    /// (-1, -1)
    NegNeg,
    /// (1, -1)
    PosNeg,
}

impl Gradient {
    const ALL: [Gradient; 4] = [Gradient::PosPos, Gradient::NegPos, Gradient::NegNeg, Gradient::PosNeg];

    #[inline]
    pub fn from_hash(v: u8) -> Self {
        Self::ALL[(v & 3) as usize]
    }

    #[inline]
    pub const fn vector(self) -> (f32, f32) {
        match self {
            Gradient::PosPos => (1.0, 1.0),
            Gradient::NegPos => (-1.0, 1.0),
            Gradient::NegNeg => (-1.0, -1.0),
            Gradient::PosNeg => (1.0, -1.0),
        }
    }

    #[inline]
    pub fn dot(self, dx: f32, dy: f32) -> f32 {
        let (gx, gy) = self.vector();
        gx * dx + gy * dy
    }
}

/// Gradient vector for a permutation table value
#[inline]
pub fn constant_vector(v: u8) -> (f32, f32) {
    Gradient::from_hash(v).vector()
}

/// Dot product between the gradient at lattice point `(ix, iy)` and the
/// distance vector from that point to `(x, y)`.
#[inline]
pub fn dot_product(table: &PermutationTable, ix: i32, iy: i32, x: f32, y: f32) -> f32 {
    corner_dot(table, ix, iy, x - ix as f32, y - iy as f32)
}

/// Dot product with the gradient at `(ix, iy)` for an already computed
/// offset `(dx, dy)` from that corner.
#[inline]
pub fn corner_dot(table: &PermutationTable, ix: i32, iy: i32, dx: f32, dy: f32) -> f32 {
    Gradient::from_hash(table.hash(ix, iy)).dot(dx, dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_vector_order() {
        assert_eq!(constant_vector(0), (1.0, 1.0));
        assert_eq!(constant_vector(1), (-1.0, 1.0));
        assert_eq!(constant_vector(2), (-1.0, -1.0));
        assert_eq!(constant_vector(3), (1.0, -1.0));
    }

    #[test]
    fn test_constant_vector_uses_low_bits() {
        for v in 0..=255u8 {
            assert_eq!(constant_vector(v), constant_vector(v & 3));
        }
        assert_eq!(Gradient::from_hash(0b1111_1110), Gradient::NegNeg);
    }

    #[test]
    fn test_dot_product_center_of_cell() {
        // seed=42: the dot with (0.5, 0.5) can only be +-1 or 0
        let table = PermutationTable::new(42);
        let d = dot_product(&table, 0, 0, 0.5, 0.5);
        assert!(d == 1.0 || d == 0.0 || d == -1.0, "unexpected dot {d}");

        let expected = Gradient::from_hash(table.hash(0, 0)).dot(0.5, 0.5);
        assert_eq!(d, expected);
    }

    #[test]
    fn test_dot_product_at_lattice_point_is_zero() {
        let table = PermutationTable::new(9);
        for ix in -3..3 {
            for iy in -3..3 {
                assert_eq!(dot_product(&table, ix, iy, ix as f32, iy as f32), 0.0);
            }
        }
    }

    #[test]
    fn test_dot_product_large_coordinates() {
        let table = PermutationTable::new(1);
        let d = dot_product(&table, 100_000, 70_000, 100_000.25, 70_000.75);
        assert!(d.abs() <= 1.0 + 1e-3);
    }
}
