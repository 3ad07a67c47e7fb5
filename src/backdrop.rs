//! Playfield backdrop selection
//!
//! Purely cosmetic: the picker owns its own RNG and nothing here feeds back
//! into the simulation, so gameplay stays deterministic and testable.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Available backdrop images, served from the site root
pub const BACKDROPS: &[&str] = &[
    "/background.jpg",
    "/pumpkin_hill.jpg",
    "/windy_valley.png",
    "/radical_highway.jpg",
];

/// Picks a backdrop for each run
pub struct BackdropPicker {
    rng: Pcg32,
}

impl BackdropPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Choose the backdrop for the next run
    pub fn pick(&mut self) -> &'static str {
        BACKDROPS[self.rng.random_range(0..BACKDROPS.len())]
    }
}
