/// Source of uniform random values in `[0, 1)`.
///
/// Samplers never own one of these; callers pass it to every `sample` call so a compiled node can
/// be shared between threads while each caller keeps its own generator.
pub trait RandomSource {
    /// Draw the next value in `[0, 1)`.
    fn next_f32(&mut self) -> f32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f32(&mut self) -> f32 {
        (**self).next_f32()
    }
}

/// Small deterministic generator (SplitMix64).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Create a generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Derive an independent generator for stream `index` of `seed`.
    ///
    /// Used to give each batch chunk its own sequence regardless of which thread runs it.
    pub fn stream(seed: u64, index: u64) -> Self {
        let mut mixer = Self::new(seed ^ index.wrapping_mul(0xD6E8_FEB8_6659_FD93));
        Self::new(mixer.next_u64())
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

impl RandomSource for Rng64 {
    fn next_f32(&mut self) -> f32 {
        // 24 bits of precision, exactly representable in f32.
        let v = self.next_u64() >> 40;
        (v as f32) * (1.0 / (1u32 << 24) as f32)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
