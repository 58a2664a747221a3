use crate::polynomial::algebra::{try_add, try_multiply};
use crate::polynomial::ir::{self, PolynomialNode};
use crate::polynomial::semantic::{PolynomialSemantic, evaluate};

/// Partial evaluator: folds `Add`/`Multiply` whose optimized operands the algebra can combine.
///
/// Leaves are returned unchanged. Anything the algebra does not define (random operands, generic
/// operands, products above degree 3) is rebuilt over the optimized children.
#[derive(Clone, Copy, Debug, Default)]
pub struct Optimizer;

fn is_zero_constant(p: &PolynomialNode) -> bool {
    matches!(p, PolynomialNode::Degree0(a0) if *a0 == 0.0)
}

impl PolynomialSemantic for Optimizer {
    type Output = PolynomialNode;

    fn degree0(&self, node: &PolynomialNode, _a0: f32) -> PolynomialNode {
        node.clone()
    }

    fn degree1(&self, node: &PolynomialNode, _a: [f32; 2]) -> PolynomialNode {
        node.clone()
    }

    fn degree2(&self, node: &PolynomialNode, _a: [f32; 3]) -> PolynomialNode {
        node.clone()
    }

    fn degree3(&self, node: &PolynomialNode, _a: [f32; 4]) -> PolynomialNode {
        node.clone()
    }

    fn random(&self, node: &PolynomialNode) -> PolynomialNode {
        node.clone()
    }

    fn add(
        &self,
        _node: &PolynomialNode,
        left: PolynomialNode,
        right: PolynomialNode,
    ) -> PolynomialNode {
        if is_zero_constant(&left) {
            return right;
        }
        if is_zero_constant(&right) {
            return left;
        }
        match try_add(&left, &right) {
            Some(folded) => folded,
            None => {
                tracing::debug!(
                    left = left.shape_name(),
                    right = right.shape_name(),
                    "add left un-folded"
                );
                ir::add(left, right)
            }
        }
    }

    fn multiply(
        &self,
        _node: &PolynomialNode,
        left: PolynomialNode,
        right: PolynomialNode,
    ) -> PolynomialNode {
        match try_multiply(&left, &right) {
            Some(folded) => folded,
            None => {
                tracing::debug!(
                    left = left.shape_name(),
                    right = right.shape_name(),
                    "multiply left un-folded"
                );
                ir::multiply(left, right)
            }
        }
    }
}

/// Fold every combination of concrete operands in `node`. Idempotent.
#[tracing::instrument(skip_all)]
pub fn optimize(node: &PolynomialNode) -> PolynomialNode {
    evaluate(node, &Optimizer)
}

#[cfg(test)]
#[path = "../../tests/unit/polynomial/optimize.rs"]
mod tests;
