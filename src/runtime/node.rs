use crate::foundation::rng::RandomSource;

/// A compiled evaluator: `t -> value`, scalar or four lanes at a time.
///
/// Nodes own no mutable state. Random draws come from the generator passed to each call, so a
/// node can be shared across threads while every caller keeps its own generator.
pub trait Sample {
    /// Evaluate at `t`.
    fn sample<R: RandomSource + ?Sized>(&self, t: f32, rng: &mut R) -> f32;

    /// Evaluate four independent lanes.
    ///
    /// For nodes without random draws this equals four calls to [`Sample::sample`]. Random leaves
    /// draw one value per lane, lane 0 first.
    fn sample4<R: RandomSource + ?Sized>(&self, t: [f32; 4], rng: &mut R) -> [f32; 4];
}

fn lanes(f: impl FnMut(usize) -> f32) -> [f32; 4] {
    std::array::from_fn(f)
}

/// `a0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantSampler {
    /// The constant.
    pub a0: f32,
}

impl Sample for ConstantSampler {
    fn sample<R: RandomSource + ?Sized>(&self, _t: f32, _rng: &mut R) -> f32 {
        self.a0
    }

    fn sample4<R: RandomSource + ?Sized>(&self, _t: [f32; 4], _rng: &mut R) -> [f32; 4] {
        [self.a0; 4]
    }
}

/// `a0 + a1·t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearSampler {
    /// Coefficients, lowest order first.
    pub a: [f32; 2],
}

impl LinearSampler {
    fn at(&self, t: f32) -> f32 {
        self.a[1] * t + self.a[0]
    }
}

impl Sample for LinearSampler {
    fn sample<R: RandomSource + ?Sized>(&self, t: f32, _rng: &mut R) -> f32 {
        self.at(t)
    }

    fn sample4<R: RandomSource + ?Sized>(&self, t: [f32; 4], _rng: &mut R) -> [f32; 4] {
        t.map(|t| self.at(t))
    }
}

/// `a0 + a1·t + a2·t²`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadraticSampler {
    /// Coefficients, lowest order first.
    pub a: [f32; 3],
}

impl QuadraticSampler {
    fn at(&self, t: f32) -> f32 {
        (self.a[2] * t + self.a[1]) * t + self.a[0]
    }
}

impl Sample for QuadraticSampler {
    fn sample<R: RandomSource + ?Sized>(&self, t: f32, _rng: &mut R) -> f32 {
        self.at(t)
    }

    fn sample4<R: RandomSource + ?Sized>(&self, t: [f32; 4], _rng: &mut R) -> [f32; 4] {
        t.map(|t| self.at(t))
    }
}

/// `a0 + a1·t + a2·t² + a3·t³`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSampler {
    /// Coefficients, lowest order first.
    pub a: [f32; 4],
}

impl CubicSampler {
    fn at(&self, t: f32) -> f32 {
        ((self.a[3] * t + self.a[2]) * t + self.a[1]) * t + self.a[0]
    }
}

impl Sample for CubicSampler {
    fn sample<R: RandomSource + ?Sized>(&self, t: f32, _rng: &mut R) -> f32 {
        self.at(t)
    }

    fn sample4<R: RandomSource + ?Sized>(&self, t: [f32; 4], _rng: &mut R) -> [f32; 4] {
        t.map(|t| self.at(t))
    }
}

/// A fresh uniform draw in `[0, 1)` per evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RandomSampler;

impl Sample for RandomSampler {
    fn sample<R: RandomSource + ?Sized>(&self, _t: f32, rng: &mut R) -> f32 {
        rng.next_f32()
    }

    fn sample4<R: RandomSource + ?Sized>(&self, _t: [f32; 4], rng: &mut R) -> [f32; 4] {
        lanes(|_| rng.next_f32())
    }
}

/// `left + right`.
#[derive(Clone, Debug, PartialEq)]
pub struct AddSampler<A, B> {
    /// Evaluated first.
    pub left: A,
    /// Evaluated second.
    pub right: B,
}

impl<A: Sample, B: Sample> Sample for AddSampler<A, B> {
    fn sample<R: RandomSource + ?Sized>(&self, t: f32, rng: &mut R) -> f32 {
        let a = self.left.sample(t, rng);
        a + self.right.sample(t, rng)
    }

    fn sample4<R: RandomSource + ?Sized>(&self, t: [f32; 4], rng: &mut R) -> [f32; 4] {
        let a = self.left.sample4(t, rng);
        let b = self.right.sample4(t, rng);
        lanes(|i| a[i] + b[i])
    }
}

/// `left * right`.
#[derive(Clone, Debug, PartialEq)]
pub struct MulSampler<A, B> {
    /// Evaluated first.
    pub left: A,
    /// Evaluated second.
    pub right: B,
}

impl<A: Sample, B: Sample> Sample for MulSampler<A, B> {
    fn sample<R: RandomSource + ?Sized>(&self, t: f32, rng: &mut R) -> f32 {
        let a = self.left.sample(t, rng);
        a * self.right.sample(t, rng)
    }

    fn sample4<R: RandomSource + ?Sized>(&self, t: [f32; 4], rng: &mut R) -> [f32; 4] {
        let a = self.left.sample4(t, rng);
        let b = self.right.sample4(t, rng);
        lanes(|i| a[i] * b[i])
    }
}

/// `(1 - s)·x + s·y`. The weight is evaluated before either endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct LerpSampler<X, Y, S> {
    /// Value at `s = 0`.
    pub x: X,
    /// Value at `s = 1`.
    pub y: Y,
    /// Weight.
    pub s: S,
}

impl<X: Sample, Y: Sample, S: Sample> Sample for LerpSampler<X, Y, S> {
    fn sample<R: RandomSource + ?Sized>(&self, t: f32, rng: &mut R) -> f32 {
        let s = self.s.sample(t, rng);
        let x = self.x.sample(t, rng);
        let y = self.y.sample(t, rng);
        (1.0 - s) * x + s * y
    }

    fn sample4<R: RandomSource + ?Sized>(&self, t: [f32; 4], rng: &mut R) -> [f32; 4] {
        let s = self.s.sample4(t, rng);
        let x = self.x.sample4(t, rng);
        let y = self.y.sample4(t, rng);
        lanes(|i| (1.0 - s[i]) * x[i] + s[i] * y[i])
    }
}

/// Evaluates `inner` at `t·scale + offset`.
#[derive(Clone, Debug, PartialEq)]
pub struct RetimeSampler<V> {
    /// Node evaluated on the remapped time.
    pub inner: V,
    /// Time multiplier.
    pub scale: f32,
    /// Added after scaling.
    pub offset: f32,
}

impl<V: Sample> Sample for RetimeSampler<V> {
    fn sample<R: RandomSource + ?Sized>(&self, t: f32, rng: &mut R) -> f32 {
        self.inner.sample(t * self.scale + self.offset, rng)
    }

    fn sample4<R: RandomSource + ?Sized>(&self, t: [f32; 4], rng: &mut R) -> [f32; 4] {
        self.inner
            .sample4(t.map(|t| t * self.scale + self.offset), rng)
    }
}

/// Constant node.
pub fn constant(a0: f32) -> ConstantSampler {
    ConstantSampler { a0 }
}

/// Linear node.
pub fn linear(a0: f32, a1: f32) -> LinearSampler {
    LinearSampler { a: [a0, a1] }
}

/// Quadratic node.
pub fn quadratic(a0: f32, a1: f32, a2: f32) -> QuadraticSampler {
    QuadraticSampler { a: [a0, a1, a2] }
}

/// Cubic node.
pub fn cubic(a0: f32, a1: f32, a2: f32, a3: f32) -> CubicSampler {
    CubicSampler {
        a: [a0, a1, a2, a3],
    }
}

/// Random node.
pub fn random() -> RandomSampler {
    RandomSampler
}

/// Sum node.
pub fn add<A: Sample, B: Sample>(left: A, right: B) -> AddSampler<A, B> {
    AddSampler { left, right }
}

/// Product node.
pub fn mul<A: Sample, B: Sample>(left: A, right: B) -> MulSampler<A, B> {
    MulSampler { left, right }
}

/// Interpolation node.
pub fn lerp<X: Sample, Y: Sample, S: Sample>(x: X, y: Y, s: S) -> LerpSampler<X, Y, S> {
    LerpSampler { x, y, s }
}

/// Time-remapping node.
pub fn retime<V: Sample>(inner: V, scale: f32, offset: f32) -> RetimeSampler<V> {
    RetimeSampler {
        inner,
        scale,
        offset,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/node.rs"]
mod tests;
