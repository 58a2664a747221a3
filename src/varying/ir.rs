use crate::varying::semantic::{VaryingSemantic, evaluate};

/// A scalar function of one time parameter, as an expression tree.
///
/// Every node exclusively owns its children, so trees are finite and acyclic by construction.
/// Build trees with the free functions in this module ([`symbol`], [`literal`], [`add`], ...) or the
/// `+`/`*` operator sugar.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum VaryingNode {
    /// The time parameter `t`.
    Symbol,
    /// A fresh uniform draw in `[0, 1)` on every evaluation.
    Random,
    /// A constant.
    Literal(f32),
    /// `left + right`.
    Add(Box<VaryingNode>, Box<VaryingNode>),
    /// `left * right`.
    Multiply(Box<VaryingNode>, Box<VaryingNode>),
    /// `(1 - s) * x + s * y`.
    Lerp {
        /// Value at `s = 0`.
        x: Box<VaryingNode>,
        /// Value at `s = 1`.
        y: Box<VaryingNode>,
        /// Interpolation weight.
        s: Box<VaryingNode>,
    },
}

impl VaryingNode {
    /// Fold this tree with `semantic`; see [`evaluate`].
    pub fn evaluate<S>(&self, semantic: &S) -> S::Output
    where
        S: VaryingSemantic + ?Sized,
    {
        evaluate(self, semantic)
    }

    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        match self {
            Self::Symbol | Self::Random | Self::Literal(_) => 1,
            Self::Add(l, r) | Self::Multiply(l, r) => 1 + l.node_count() + r.node_count(),
            Self::Lerp { x, y, s } => 1 + x.node_count() + y.node_count() + s.node_count(),
        }
    }

    /// Return `true` when any node draws randomness.
    pub fn contains_random(&self) -> bool {
        match self {
            Self::Random => true,
            Self::Symbol | Self::Literal(_) => false,
            Self::Add(l, r) | Self::Multiply(l, r) => l.contains_random() || r.contains_random(),
            Self::Lerp { x, y, s } => {
                x.contains_random() || y.contains_random() || s.contains_random()
            }
        }
    }
}

/// The time parameter `t`.
pub fn symbol() -> VaryingNode {
    VaryingNode::Symbol
}

/// A uniform draw in `[0, 1)`.
pub fn random() -> VaryingNode {
    VaryingNode::Random
}

/// A constant value.
pub fn literal(value: f32) -> VaryingNode {
    VaryingNode::Literal(value)
}

/// `left + right`.
pub fn add(left: VaryingNode, right: VaryingNode) -> VaryingNode {
    VaryingNode::Add(Box::new(left), Box::new(right))
}

/// `left * right`.
pub fn multiply(left: VaryingNode, right: VaryingNode) -> VaryingNode {
    VaryingNode::Multiply(Box::new(left), Box::new(right))
}

/// `(1 - s) * x + s * y`.
pub fn lerp(x: VaryingNode, y: VaryingNode, s: VaryingNode) -> VaryingNode {
    VaryingNode::Lerp {
        x: Box::new(x),
        y: Box::new(y),
        s: Box::new(s),
    }
}

/// `left - right`, expressed as `left + (-1 * right)`.
pub fn subtract(left: VaryingNode, right: VaryingNode) -> VaryingNode {
    add(left, multiply(literal(-1.0), right))
}

impl std::ops::Add for VaryingNode {
    type Output = VaryingNode;

    fn add(self, rhs: Self) -> Self::Output {
        add(self, rhs)
    }
}

impl std::ops::Mul for VaryingNode {
    type Output = VaryingNode;

    fn mul(self, rhs: Self) -> Self::Output {
        multiply(self, rhs)
    }
}

impl std::ops::Sub for VaryingNode {
    type Output = VaryingNode;

    fn sub(self, rhs: Self) -> Self::Output {
        subtract(self, rhs)
    }
}

impl From<f32> for VaryingNode {
    fn from(value: f32) -> Self {
        literal(value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/varying/ir.rs"]
mod tests;
