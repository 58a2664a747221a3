use crate::polynomial::ir::PolynomialNode;

/// An interpretation strategy over the Polynomial IR.
///
/// Same contract as [`crate::varying::semantic::VaryingSemantic`]: children are folded first and
/// handlers also receive the original node.
pub trait PolynomialSemantic {
    /// Result of folding one subtree.
    type Output;

    /// Handle `a0`.
    fn degree0(&self, node: &PolynomialNode, a0: f32) -> Self::Output;

    /// Handle `a0 + a1·t`.
    fn degree1(&self, node: &PolynomialNode, a: [f32; 2]) -> Self::Output;

    /// Handle a quadratic.
    fn degree2(&self, node: &PolynomialNode, a: [f32; 3]) -> Self::Output;

    /// Handle a cubic.
    fn degree3(&self, node: &PolynomialNode, a: [f32; 4]) -> Self::Output;

    /// Handle a random draw.
    fn random(&self, node: &PolynomialNode) -> Self::Output;

    /// Combine the folded operands of a generic sum.
    fn add(&self, node: &PolynomialNode, left: Self::Output, right: Self::Output) -> Self::Output;

    /// Combine the folded operands of a generic product.
    fn multiply(
        &self,
        node: &PolynomialNode,
        left: Self::Output,
        right: Self::Output,
    ) -> Self::Output;
}

/// Fold `node` with `semantic`, children before parents, left before right.
pub fn evaluate<S>(node: &PolynomialNode, semantic: &S) -> S::Output
where
    S: PolynomialSemantic + ?Sized,
{
    match node {
        PolynomialNode::Degree0(a0) => semantic.degree0(node, *a0),
        PolynomialNode::Degree1(a) => semantic.degree1(node, *a),
        PolynomialNode::Degree2(a) => semantic.degree2(node, *a),
        PolynomialNode::Degree3(a) => semantic.degree3(node, *a),
        PolynomialNode::Random => semantic.random(node),
        PolynomialNode::Add(l, r) => {
            let l = evaluate(l, semantic);
            let r = evaluate(r, semantic);
            semantic.add(node, l, r)
        }
        PolynomialNode::Multiply(l, r) => {
            let l = evaluate(l, semantic);
            let r = evaluate(r, semantic);
            semantic.multiply(node, l, r)
        }
    }
}
