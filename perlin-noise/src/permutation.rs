//! Seeded permutation table
//!
//! 256 shuffled values mirrored into a 512-entry array so that
//! `p[p[x] + y]` never needs to wrap for `x, y` in `0..=255`.

use crate::random::XorShift32;

/// Number of distinct values in the table
pub const UNIQUE_LEN: usize = 256;
/// Total table length (unique values followed by their copy)
pub const TABLE_LEN: usize = UNIQUE_LEN * 2;

/// Immutable lookup table driving gradient selection.
///
/// Built once per seed and only read afterwards, so it can be shared by
/// reference across worker threads.
#[derive(Clone, PartialEq, Eq)]
pub struct PermutationTable {
    p: [u8; TABLE_LEN],
}

impl PermutationTable {
    /// Fisher-Yates shuffle of `0..=255` driven by [`XorShift32`], then mirrored.
    pub fn new(seed: i32) -> Self {
        let mut p = [0u8; TABLE_LEN];
        for (i, val) in p.iter_mut().enumerate().take(UNIQUE_LEN) {
            *val = i as u8;
        }

        let mut rng = XorShift32::new(seed);
        for z in (1..UNIQUE_LEN).rev() {
            let j = rng.next_inclusive(z as u32) as usize;
            p.swap(z, j);
        }

        let (head, tail) = p.split_at_mut(UNIQUE_LEN);
        tail.copy_from_slice(head);

        tracing::debug!(seed, "built permutation table");
        Self { p }
    }

    /// Table entry at `index`; valid indices are `0..TABLE_LEN`.
    #[inline]
    pub fn lookup(&self, index: usize) -> u8 {
        debug_assert!(index < TABLE_LEN, "permutation index {index} out of range");
        self.p[index]
    }

    /// Hash of a lattice point: `p[p[ix] + iy]` with both coordinates masked to `0..=255`.
    #[inline]
    pub fn hash(&self, ix: i32, iy: i32) -> u8 {
        let x = (ix & 0xFF) as usize;
        let y = (iy & 0xFF) as usize;
        self.lookup(self.lookup(x) as usize + y)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.p
    }
}

impl std::fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermutationTable")
            .field("head", &&self.p[..8])
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_half_is_permutation() {
        for seed in [0, 1, 42, -1, i32::MIN, i32::MAX, 123_456] {
            let table = PermutationTable::new(seed);
            let mut head = table.as_slice()[..UNIQUE_LEN].to_vec();
            head.sort_unstable();
            let expected: Vec<u8> = (0..=255).collect();
            assert_eq!(head, expected, "seed {seed}");
        }
    }

    #[test]
    fn test_second_half_mirrors_first() {
        let table = PermutationTable::new(42);
        let p = table.as_slice();
        assert_eq!(p.len(), TABLE_LEN);
        assert_eq!(&p[..UNIQUE_LEN], &p[UNIQUE_LEN..]);
    }

    #[test]
    fn test_same_seed_same_table() {
        assert_eq!(PermutationTable::new(42), PermutationTable::new(42));
        assert_ne!(PermutationTable::new(42), PermutationTable::new(43));
    }

    #[test]
    fn test_table_is_shuffled() {
        let table = PermutationTable::new(42);
        let fixed_points = table.as_slice()[..UNIQUE_LEN]
            .iter()
            .enumerate()
            .filter(|&(i, &v)| i == v as usize)
            .count();
        assert!(fixed_points < 32, "too many fixed points: {fixed_points}");
    }

    #[test]
    fn test_hash_wraps_lattice_coordinates() {
        let table = PermutationTable::new(7);
        assert_eq!(table.hash(3, 5), table.hash(3 + 256, 5));
        assert_eq!(table.hash(3, 5), table.hash(3, 5 - 512));
        assert_eq!(table.hash(-1, -1), table.hash(255, 255));

        let p = table.as_slice();
        assert_eq!(table.hash(10, 20), p[p[10] as usize + 20]);
    }
}
