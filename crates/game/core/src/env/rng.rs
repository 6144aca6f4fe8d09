//! Seedable random source for hit rolls, escapes and treasure drops.
//!
//! Randomness is always injected. Given the same seed a [`PcgRng`] produces
//! the same sequence, so battles replay exactly in tests.

/// Random number source consumed by battle resolution and loss sampling.
pub trait RandomSource {
    /// Generate the next random u32 value.
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0)
    }

    /// Uniform value in `[0, bound)`. Returns 0 when `bound` is 0.
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.next_u32() % bound
    }

    /// Returns true with the given probability.
    ///
    /// Probability 0 never succeeds and probability 1 always does.
    fn chance(&mut self, probability: f64) -> bool {
        self.next_unit() < probability
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR variant: 32-bit output from 64-bit state.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator from a seed.
    pub fn seeded(seed: u64) -> Self {
        let mut rng = Self { state: 0 };
        rng.state = Self::pcg_step(rng.state.wrapping_add(seed));
        rng
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl Default for PcgRng {
    fn default() -> Self {
        Self::seeded(0)
    }
}

impl RandomSource for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}
