use crate::foundation::rng::RandomSource;
use crate::polynomial::ir::PolynomialNode;
use crate::polynomial::semantic::{self as poly_semantic, PolynomialSemantic};
use crate::runtime::node::{
    AddSampler, ConstantSampler, CubicSampler, LerpSampler, LinearSampler, MulSampler,
    QuadraticSampler, RandomSampler, RetimeSampler, Sample,
};
use crate::varying::ir::VaryingNode;
use crate::varying::semantic::{self as vary_semantic, VaryingSemantic};

/// Evaluator tree built from an IR tree.
///
/// The shape is only known at run time, so composites box their children instead of nesting
/// generic types. Leaves are the same structs hand-built trees use.
#[derive(Clone, Debug, PartialEq)]
pub enum SampleNode {
    /// Degree-0 leaf.
    Constant(ConstantSampler),
    /// Degree-1 leaf.
    Linear(LinearSampler),
    /// Degree-2 leaf.
    Quadratic(QuadraticSampler),
    /// Degree-3 leaf.
    Cubic(CubicSampler),
    /// Random leaf.
    Random(RandomSampler),
    /// Sum of two sub-evaluators.
    Add(Box<AddSampler<SampleNode, SampleNode>>),
    /// Product of two sub-evaluators.
    Mul(Box<MulSampler<SampleNode, SampleNode>>),
    /// Interpolation of two sub-evaluators by a third.
    Lerp(Box<LerpSampler<SampleNode, SampleNode, SampleNode>>),
    /// Sub-evaluator on remapped time.
    Retime(Box<RetimeSampler<SampleNode>>),
}

impl SampleNode {
    /// Wrap this node so it is evaluated at `t·scale + offset`.
    pub fn retimed(self, scale: f32, offset: f32) -> Self {
        Self::Retime(Box::new(RetimeSampler {
            inner: self,
            scale,
            offset,
        }))
    }
}

impl Sample for SampleNode {
    fn sample<R: RandomSource + ?Sized>(&self, t: f32, rng: &mut R) -> f32 {
        match self {
            Self::Constant(n) => n.sample(t, rng),
            Self::Linear(n) => n.sample(t, rng),
            Self::Quadratic(n) => n.sample(t, rng),
            Self::Cubic(n) => n.sample(t, rng),
            Self::Random(n) => n.sample(t, rng),
            Self::Add(n) => n.sample(t, rng),
            Self::Mul(n) => n.sample(t, rng),
            Self::Lerp(n) => n.sample(t, rng),
            Self::Retime(n) => n.sample(t, rng),
        }
    }

    fn sample4<R: RandomSource + ?Sized>(&self, t: [f32; 4], rng: &mut R) -> [f32; 4] {
        match self {
            Self::Constant(n) => n.sample4(t, rng),
            Self::Linear(n) => n.sample4(t, rng),
            Self::Quadratic(n) => n.sample4(t, rng),
            Self::Cubic(n) => n.sample4(t, rng),
            Self::Random(n) => n.sample4(t, rng),
            Self::Add(n) => n.sample4(t, rng),
            Self::Mul(n) => n.sample4(t, rng),
            Self::Lerp(n) => n.sample4(t, rng),
            Self::Retime(n) => n.sample4(t, rng),
        }
    }
}

fn sum(left: SampleNode, right: SampleNode) -> SampleNode {
    SampleNode::Add(Box::new(AddSampler { left, right }))
}

fn product(left: SampleNode, right: SampleNode) -> SampleNode {
    SampleNode::Mul(Box::new(MulSampler { left, right }))
}

struct VaryingCompiler;

impl VaryingSemantic for VaryingCompiler {
    type Output = SampleNode;

    fn symbol(&self, _node: &VaryingNode) -> SampleNode {
        SampleNode::Linear(LinearSampler { a: [0.0, 1.0] })
    }

    fn random(&self, _node: &VaryingNode) -> SampleNode {
        SampleNode::Random(RandomSampler)
    }

    fn literal(&self, _node: &VaryingNode, value: f32) -> SampleNode {
        SampleNode::Constant(ConstantSampler { a0: value })
    }

    fn add(&self, _node: &VaryingNode, left: SampleNode, right: SampleNode) -> SampleNode {
        sum(left, right)
    }

    fn multiply(&self, _node: &VaryingNode, left: SampleNode, right: SampleNode) -> SampleNode {
        product(left, right)
    }

    fn lerp(&self, _node: &VaryingNode, x: SampleNode, y: SampleNode, s: SampleNode) -> SampleNode {
        SampleNode::Lerp(Box::new(LerpSampler { x, y, s }))
    }
}

struct PolynomialCompiler;

impl PolynomialSemantic for PolynomialCompiler {
    type Output = SampleNode;

    fn degree0(&self, _node: &PolynomialNode, a0: f32) -> SampleNode {
        SampleNode::Constant(ConstantSampler { a0 })
    }

    fn degree1(&self, _node: &PolynomialNode, a: [f32; 2]) -> SampleNode {
        SampleNode::Linear(LinearSampler { a })
    }

    fn degree2(&self, _node: &PolynomialNode, a: [f32; 3]) -> SampleNode {
        SampleNode::Quadratic(QuadraticSampler { a })
    }

    fn degree3(&self, _node: &PolynomialNode, a: [f32; 4]) -> SampleNode {
        SampleNode::Cubic(CubicSampler { a })
    }

    fn random(&self, _node: &PolynomialNode) -> SampleNode {
        SampleNode::Random(RandomSampler)
    }

    fn add(&self, _node: &PolynomialNode, left: SampleNode, right: SampleNode) -> SampleNode {
        sum(left, right)
    }

    fn multiply(&self, _node: &PolynomialNode, left: SampleNode, right: SampleNode) -> SampleNode {
        product(left, right)
    }
}

/// Build an evaluator mirroring `node` one-to-one. `Symbol` becomes a linear leaf.
#[tracing::instrument(skip_all, fields(nodes = node.node_count()))]
pub fn compile_varying(node: &VaryingNode) -> SampleNode {
    vary_semantic::evaluate(node, &VaryingCompiler)
}

/// Build an evaluator for a polynomial tree; concrete nodes become Horner leaves.
#[tracing::instrument(skip_all, fields(shape = node.shape_name()))]
pub fn compile_polynomial(node: &PolynomialNode) -> SampleNode {
    poly_semantic::evaluate(node, &PolynomialCompiler)
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/compile.rs"]
mod tests;
