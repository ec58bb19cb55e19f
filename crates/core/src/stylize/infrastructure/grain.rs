use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of per-pixel grain offsets for the painted-canvas texture.
pub trait GrainSource: Send {
    /// Next offset in `[-amplitude, amplitude)`.
    fn next_offset(&mut self, amplitude: f32) -> f32;
}

/// Uniformly distributed grain from a seedable RNG.
///
/// Seeding makes renders reproducible; the default draws entropy from
/// the OS.
pub struct RandomGrain {
    rng: StdRng,
}

impl RandomGrain {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomGrain {
    fn default() -> Self {
        Self::new()
    }
}

impl GrainSource for RandomGrain {
    fn next_offset(&mut self, amplitude: f32) -> f32 {
        self.rng.gen_range(-amplitude..amplitude)
    }
}
