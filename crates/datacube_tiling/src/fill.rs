use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies scalar values for freshly allocated atomic units.
///
/// The tiler writes every value exactly once, so a source only needs to produce a stream; it never
/// has to revisit or overwrite.
pub trait ValueSource {
    fn next_value(&mut self) -> f32;

    /// Fills `values` from the stream, front to back.
    fn fill(&mut self, values: &mut [f32]) {
        for value in values.iter_mut() {
            *value = self.next_value();
        }
    }
}

/// Uniform-random values in `[0, 1)`, the default placeholder for real tensor data.
#[derive(Clone, Debug)]
pub struct UniformFill {
    rng: StdRng,
}

impl UniformFill {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A seeded source, for reproducible fills.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for UniformFill {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueSource for UniformFill {
    #[inline]
    fn next_value(&mut self) -> f32 {
        self.rng.gen()
    }
}

/// Repeats a single value. Deterministic fills for tests.
#[derive(Clone, Copy, Debug)]
pub struct ConstantFill(pub f32);

impl ValueSource for ConstantFill {
    #[inline]
    fn next_value(&mut self) -> f32 {
        self.0
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
