use crate::varying::ir::{self, VaryingNode};
use crate::varying::semantic::{VaryingSemantic, evaluate};

/// Rewrites `lerp(x, y, s)` as `(1 + -1 * s) * x + s * y`; identity on everything else.
///
/// Operands are lowered before their parent, so one pass leaves no `Lerp` anywhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowerLerp;

impl VaryingSemantic for LowerLerp {
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
        let one_minus_s = ir::add(
            ir::literal(1.0),
            ir::multiply(ir::literal(-1.0), s.clone()),
        );
        ir::add(ir::multiply(one_minus_s, x), ir::multiply(s, y))
    }
}

/// Eliminate every `Lerp` from `node`.
pub fn lower(node: &VaryingNode) -> VaryingNode {
    let lowered = evaluate(node, &LowerLerp);
    debug_assert!(!contains_lerp(&lowered));
    lowered
}

struct FindLerp;

impl VaryingSemantic for FindLerp {
    type Output = bool;

    fn symbol(&self, _node: &VaryingNode) -> bool {
        false
    }

    fn random(&self, _node: &VaryingNode) -> bool {
        false
    }

    fn literal(&self, _node: &VaryingNode, _value: f32) -> bool {
        false
    }

    fn add(&self, _node: &VaryingNode, left: bool, right: bool) -> bool {
        left || right
    }

    fn multiply(&self, _node: &VaryingNode, left: bool, right: bool) -> bool {
        left || right
    }

    fn lerp(&self, _node: &VaryingNode, _x: bool, _y: bool, _s: bool) -> bool {
        true
    }
}

/// Return `true` when `node` still has a `Lerp` somewhere.
pub fn contains_lerp(node: &VaryingNode) -> bool {
    evaluate(node, &FindLerp)
}

#[cfg(test)]
#[path = "../../tests/unit/varying/lower.rs"]
mod tests;
