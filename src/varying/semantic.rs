//! One handler per [`VaryingNode`] kind, folded bottom-up by [`evaluate`].
//!
//! Every backend over the Varying IR (interpretation, substitution, lowering, code generation,
//! runtime compilation) is a `VaryingSemantic` implementation. Handlers receive the original node
//! next to the already-computed child results so they can inspect sub-node shape when needed.

use crate::varying::ir::{self, VaryingNode};

/// An interpretation strategy over the Varying IR.
pub trait VaryingSemantic {
    /// Result of folding one subtree.
    type Output;

    /// Handle the time parameter.
    fn symbol(&self, node: &VaryingNode) -> Self::Output;

    /// Handle a random draw.
    fn random(&self, node: &VaryingNode) -> Self::Output;

    /// Handle a constant.
    fn literal(&self, node: &VaryingNode, value: f32) -> Self::Output;

    /// Combine the folded operands of an addition.
    fn add(&self, node: &VaryingNode, left: Self::Output, right: Self::Output) -> Self::Output;

    /// Combine the folded operands of a multiplication.
    fn multiply(&self, node: &VaryingNode, left: Self::Output, right: Self::Output)
    -> Self::Output;

    /// Combine the folded operands of a lerp.
    fn lerp(
        &self,
        node: &VaryingNode,
        x: Self::Output,
        y: Self::Output,
        s: Self::Output,
    ) -> Self::Output;
}

/// Fold `node` with `semantic`, children before parents.
///
/// Each node is visited exactly once. Operands are folded left to right (`x`, `y`, `s` for lerp).
pub fn evaluate<S>(node: &VaryingNode, semantic: &S) -> S::Output
where
    S: VaryingSemantic + ?Sized,
{
    match node {
        VaryingNode::Symbol => semantic.symbol(node),
        VaryingNode::Random => semantic.random(node),
        VaryingNode::Literal(value) => semantic.literal(node, *value),
        VaryingNode::Add(l, r) => {
            let l = evaluate(l, semantic);
            let r = evaluate(r, semantic);
            semantic.add(node, l, r)
        }
        VaryingNode::Multiply(l, r) => {
            let l = evaluate(l, semantic);
            let r = evaluate(r, semantic);
            semantic.multiply(node, l, r)
        }
        VaryingNode::Lerp { x, y, s } => {
            let x = evaluate(x, semantic);
            let y = evaluate(y, semantic);
            let s = evaluate(s, semantic);
            semantic.lerp(node, x, y, s)
        }
    }
}

/// Identity semantic: rebuilds a structurally equal tree.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rebuild;

impl VaryingSemantic for Rebuild {
    type Output = VaryingNode;

    fn symbol(&self, _node: &VaryingNode) -> VaryingNode {
        ir::symbol()
    }

    fn random(&self, _node: &VaryingNode) -> VaryingNode {
        ir::random()
    }

    fn literal(&self, _node: &VaryingNode, value: f32) -> VaryingNode {
        ir::literal(value)
    }

    fn add(&self, _node: &VaryingNode, left: VaryingNode, right: VaryingNode) -> VaryingNode {
        ir::add(left, right)
    }

    fn multiply(&self, _node: &VaryingNode, left: VaryingNode, right: VaryingNode) -> VaryingNode {
        ir::multiply(left, right)
    }

    fn lerp(
        &self,
        _node: &VaryingNode,
        x: VaryingNode,
        y: VaryingNode,
        s: VaryingNode,
    ) -> VaryingNode {
        ir::lerp(x, y, s)
    }
}

/// Rebuild `node` through the fold; the result equals the input.
pub fn rebuild(node: &VaryingNode) -> VaryingNode {
    evaluate(node, &Rebuild)
}

#[cfg(test)]
#[path = "../../tests/unit/varying/semantic.rs"]
mod tests;
