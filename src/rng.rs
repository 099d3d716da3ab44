//! Seeded pseudo-random generation.
//!
//! Every diagram in the zoo is built from a hardcoded seed, so the scene a
//! reader sees is the same on every load and on every platform. The
//! generator owns its own state and is passed explicitly to the sampler;
//! there is no process-wide singleton.

/// Park-Miller linear congruential generator.
///
/// Recurrence: `state = (state * 16807) mod 2147483647`, output
/// `(state - 1) / 2147483646`, giving uniforms in `[0, 1)`. The stream is
/// bit-reproducible for a given seed and call order.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

const MODULUS: u64 = 2_147_483_647;
const MULTIPLIER: u64 = 16_807;

impl Lcg {
    /// Create a generator from an integer seed.
    ///
    /// A seed congruent to zero would make the stream constant, so it is
    /// mapped to 1.
    pub fn new(seed: u32) -> Self {
        let s = u64::from(seed) % MODULUS;
        Lcg {
            state: if s == 0 { 1 } else { s },
        }
    }

    /// Next uniform draw in `[0, 1)`.
    pub fn next_uniform(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER) % MODULUS;
        (self.state - 1) as f64 / 2_147_483_646.0
    }

    /// Next standard-normal draw via the Box-Muller transform:
    /// `sqrt(-2 ln u) * cos(2 pi v)`.
    ///
    /// `u` must be strictly positive before `ln` is taken; a zero draw is
    /// resampled. None of the shipped seeds ever produce one, but a future
    /// reseed must not be able to trigger a domain error.
    pub fn next_gaussian(&mut self) -> f64 {
        let mut u = self.next_uniform();
        while u <= 0.0 {
            u = self.next_uniform();
        }
        let v = self.next_uniform();
        (-2.0 * u.ln()).sqrt() * (2.0 * std::f64::consts::PI * v).cos()
    }
}
