//! RNG module - index-addressable piece stream
//!
//! The piece at a given position of a timeline is a pure function of
//! `(index, seed)`: an FNV-1a hash of both values reduced modulo the catalog
//! size. There is no generator state to advance, so replaying, editing or
//! reordering a timeline never changes which piece appears at an absolute
//! index.
//!
//! Also provides a simple LCG for deriving seed sequences in tests and hosts.

use std::hash::Hasher;

use crate::types::PieceKind;

/// FNV-1a 64-bit hasher
#[derive(Debug, Clone)]
pub struct Fnv1aHasher {
    state: u64,
}

impl Fnv1aHasher {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    pub fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }
}

impl Default for Fnv1aHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }
}

/// Hash of a stream position. Fixed-width little-endian encoding keeps the
/// value identical across platforms.
pub fn stream_hash(index: usize, seed: u32) -> u64 {
    let mut hasher = Fnv1aHasher::new();
    hasher.write(&(index as u64).to_le_bytes());
    hasher.write(&seed.to_le_bytes());
    let h = hasher.finish();
    // Fold the high half in; FNV's low bits alone are weakly mixed.
    h ^ (h >> 32)
}

/// The piece at position `index` of the stream for `seed`.
pub fn piece_at(index: usize, seed: u32) -> PieceKind {
    let slot = (stream_hash(index, seed) % PieceKind::ALL.len() as u64) as usize;
    PieceKind::ALL[slot]
}

/// `count` consecutive stream pieces starting at `start`.
pub fn pieces_from(start: usize, count: usize, seed: u32) -> impl Iterator<Item = PieceKind> {
    (start..start + count).map(move |i| piece_at(i, seed))
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn fnv1a_matches_reference_vectors() {
        let mut empty = Fnv1aHasher::new();
        empty.write(b"");
        assert_eq!(empty.finish(), 0xcbf29ce484222325);

        let mut a = Fnv1aHasher::new();
        a.write(b"a");
        assert_eq!(a.finish(), 0xaf63dc4c8601ec8c);
    }

    #[test]
    fn piece_at_is_pure() {
        for seed in [0u32, 1, 42, u32::MAX] {
            for i in 0..200 {
                assert_eq!(piece_at(i, seed), piece_at(i, seed));
            }
        }
    }

    #[test]
    fn stream_covers_whole_catalog() {
        let mut seen = [false; 7];
        for kind in pieces_from(0, 500, 7) {
            seen[kind.index()] = true;
        }
        assert!(seen.iter().all(|s| *s), "catalog coverage: {:?}", seen);
    }

    #[test]
    fn pieces_from_matches_piece_at() {
        let run: Vec<_> = pieces_from(10, 5, 99).collect();
        let expected: Vec<_> = (10..15).map(|i| piece_at(i, 99)).collect();
        assert_eq!(run, expected);
    }

    #[test]
    fn seeds_produce_different_streams() {
        let a: Vec<_> = pieces_from(0, 32, 1).collect();
        let b: Vec<_> = pieces_from(0, 32, 2).collect();
        assert_ne!(a, b);
    }
}
