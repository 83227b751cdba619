use std::time::{SystemTime, UNIX_EPOCH};

/// Source of uniform random integers for placement and filling
pub trait RandomSource {
    /// Return an integer in `[0, bound)`. A zero bound yields 0.
    fn next(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next(&mut self, bound: usize) -> usize {
        (**self).next(bound)
    }
}

/// Small PCG-style generator; reproducible when built from a seed
#[derive(Debug, Clone)]
pub struct PcgRandom {
    state: u64,
}

impl Default for PcgRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl PcgRandom {
    /// Seed from OS entropy, falling back to the wall clock
    pub fn new() -> Self {
        let mut seed_bytes = [0u8; 8];
        let seed = match getrandom::getrandom(&mut seed_bytes) {
            Ok(()) => u64::from_le_bytes(seed_bytes),
            Err(err) => {
                log::debug!("getrandom unavailable ({err}), seeding from clock");
                SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_nanos() as u64)
                    .unwrap_or(1)
            }
        };
        Self::with_seed(seed)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        (xorshifted.rotate_right(rot)) as u64
    }
}

impl RandomSource for PcgRandom {
    fn next(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        (self.next_u64() as usize) % bound
    }
}
