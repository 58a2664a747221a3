//! Conversions between the Varying IR and the Polynomial IR.

use crate::foundation::error::{VaryingError, VaryingResult};
use crate::polynomial::ir::{self as poly, PolynomialNode};
use crate::polynomial::optimize::optimize;
use crate::polynomial::semantic::{self as poly_semantic, PolynomialSemantic};
use crate::varying::ir::{self as vary, VaryingNode};
use crate::varying::lower::lower;
use crate::varying::semantic::{self as vary_semantic, VaryingSemantic};

/// Maps lerp-free Varying primitives onto Polynomial primitives without folding anything.
struct ToPolynomial;

impl VaryingSemantic for ToPolynomial {
    type Output = VaryingResult<PolynomialNode>;

    fn symbol(&self, _node: &VaryingNode) -> Self::Output {
        Ok(poly::degree1(0.0, 1.0))
    }

    fn random(&self, _node: &VaryingNode) -> Self::Output {
        Ok(poly::random())
    }

    fn literal(&self, _node: &VaryingNode, value: f32) -> Self::Output {
        Ok(poly::degree0(value))
    }

    fn add(&self, _node: &VaryingNode, left: Self::Output, right: Self::Output) -> Self::Output {
        Ok(poly::add(left?, right?))
    }

    fn multiply(
        &self,
        _node: &VaryingNode,
        left: Self::Output,
        right: Self::Output,
    ) -> Self::Output {
        Ok(poly::multiply(left?, right?))
    }

    fn lerp(
        &self,
        _node: &VaryingNode,
        _x: Self::Output,
        _y: Self::Output,
        _s: Self::Output,
    ) -> Self::Output {
        Err(VaryingError::invariant(
            "lerp reached polynomial conversion; lower the tree first",
        ))
    }
}

/// Lower `node` and map it onto the Polynomial IR. Sums and products stay generic until
/// [`optimize`] runs.
#[tracing::instrument(skip_all, fields(nodes = node.node_count()))]
pub fn to_polynomial(node: &VaryingNode) -> VaryingResult<PolynomialNode> {
    let lowered = lower(node);
    vary_semantic::evaluate(&lowered, &ToPolynomial)
}

fn expand1(a: [f32; 2]) -> VaryingNode {
    vary::add(
        vary::multiply(vary::literal(a[1]), vary::symbol()),
        vary::literal(a[0]),
    )
}

fn expand2(a: [f32; 3]) -> VaryingNode {
    vary::add(
        vary::multiply(
            vary::literal(a[2]),
            vary::multiply(vary::symbol(), vary::symbol()),
        ),
        expand1([a[0], a[1]]),
    )
}

fn expand3(a: [f32; 4]) -> VaryingNode {
    vary::add(
        vary::multiply(
            vary::literal(a[3]),
            vary::multiply(
                vary::symbol(),
                vary::multiply(vary::symbol(), vary::symbol()),
            ),
        ),
        expand2([a[0], a[1], a[2]]),
    )
}

/// Re-expands coefficients into `aₖ·tᵏ + … + a0` over symbols and literals.
struct ToVarying;

impl PolynomialSemantic for ToVarying {
    type Output = VaryingNode;

    fn degree0(&self, _node: &PolynomialNode, a0: f32) -> VaryingNode {
        vary::literal(a0)
    }

    fn degree1(&self, _node: &PolynomialNode, a: [f32; 2]) -> VaryingNode {
        expand1(a)
    }

    fn degree2(&self, _node: &PolynomialNode, a: [f32; 3]) -> VaryingNode {
        expand2(a)
    }

    fn degree3(&self, _node: &PolynomialNode, a: [f32; 4]) -> VaryingNode {
        expand3(a)
    }

    fn random(&self, _node: &PolynomialNode) -> VaryingNode {
        vary::random()
    }

    fn add(&self, _node: &PolynomialNode, left: VaryingNode, right: VaryingNode) -> VaryingNode {
        vary::add(left, right)
    }

    fn multiply(
        &self,
        _node: &PolynomialNode,
        left: VaryingNode,
        right: VaryingNode,
    ) -> VaryingNode {
        vary::multiply(left, right)
    }
}

/// Expand `node` back into the Varying IR.
pub fn to_varying(node: &PolynomialNode) -> VaryingNode {
    poly_semantic::evaluate(node, &ToVarying)
}

/// Lower, convert, optimize, and expand back: the minimal-degree Varying form of `node`.
pub fn simplify(node: &VaryingNode) -> VaryingResult<VaryingNode> {
    let optimized = optimize(&to_polynomial(node)?);
    Ok(to_varying(&optimized))
}

#[cfg(test)]
#[path = "../../tests/unit/polynomial/convert.rs"]
mod tests;
