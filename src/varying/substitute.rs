use crate::varying::ir::{self, VaryingNode};
use crate::varying::semantic::{VaryingSemantic, evaluate};

/// Replaces every `t` with a copy of `replacement`; all other nodes are recreated as-is.
#[derive(Clone, Debug)]
pub struct Substitute {
    /// Tree spliced in place of each symbol.
    pub replacement: VaryingNode,
}

impl VaryingSemantic for Substitute {
    type Output = VaryingNode;

    fn symbol(&self, _node: &VaryingNode) -> VaryingNode {
        self.replacement.clone()
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

/// Replace the time symbol of `node` with `replacement`.
pub fn substitute(node: &VaryingNode, replacement: VaryingNode) -> VaryingNode {
    evaluate(node, &Substitute { replacement })
}

/// `outer(inner(t))`.
pub fn compose(outer: &VaryingNode, inner: &VaryingNode) -> VaryingNode {
    substitute(outer, inner.clone())
}

/// `node(factor * t)`: speeds the varying up by `factor`.
pub fn scale(node: &VaryingNode, factor: f32) -> VaryingNode {
    substitute(node, ir::multiply(ir::literal(factor), ir::symbol()))
}

/// `node(delta + t)`: shifts the varying earlier by `delta`.
pub fn offset(node: &VaryingNode, delta: f32) -> VaryingNode {
    substitute(node, ir::add(ir::literal(delta), ir::symbol()))
}

#[cfg(test)]
#[path = "../../tests/unit/varying/substitute.rs"]
mod tests;
