//! Seed sources for RESTART.
//!
//! The engine never reads a clock itself; the host injects a source and the
//! drawn seed is written into the logged action.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::SimpleRng;

pub trait SeedSource {
    fn next_seed(&mut self) -> u32;
}

/// Seeds from wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClockSeed;

impl SeedSource for SystemClockSeed {
    fn next_seed(&mut self) -> u32 {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        (nanos ^ (nanos >> 32)) as u32
    }
}

/// Always the same seed.
#[derive(Debug, Clone, Copy)]
pub struct FixedSeed(pub u32);

impl SeedSource for FixedSeed {
    fn next_seed(&mut self) -> u32 {
        self.0
    }
}

/// Reproducible seed sequence from an LCG.
#[derive(Debug, Clone)]
pub struct LcgSeeds {
    rng: SimpleRng,
}

impl LcgSeeds {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl SeedSource for LcgSeeds {
    fn next_seed(&mut self) -> u32 {
        self.rng.next_u32()
    }
}
