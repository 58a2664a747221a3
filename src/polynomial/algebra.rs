//! Closed-form sums and products of concrete polynomials.
//!
//! The `try_*` functions are the dispatch table: they return `None` for any pair they do not
//! define (a product above degree 3, or an operand that is random or generic). The optimizer
//! treats `None` as "leave un-folded". Direct callers use the `combine_*` wrappers, which report
//! an undefined pair as [`VaryingError::Unsupported`].

use crate::foundation::error::{VaryingError, VaryingResult};
use crate::polynomial::ir::{Coefficients, PolynomialNode};

/// Sum of two concrete polynomials; degree is the larger of the two.
pub fn try_add(a: &PolynomialNode, b: &PolynomialNode) -> Option<PolynomialNode> {
    let ca = a.coefficients()?;
    let cb = b.coefficients()?;
    let n = ca.len().max(cb.len());
    let sum: Coefficients = (0..n)
        .map(|i| ca.get(i).copied().unwrap_or(0.0) + cb.get(i).copied().unwrap_or(0.0))
        .collect();
    PolynomialNode::from_coefficients(&sum)
}

/// Product of two concrete polynomials, defined while the degree sum stays ≤ 3.
pub fn try_multiply(a: &PolynomialNode, b: &PolynomialNode) -> Option<PolynomialNode> {
    use PolynomialNode::{Degree0, Degree1, Degree2, Degree3};

    match (a, b) {
        (Degree0(k), p) => scale(p, *k),
        (p, Degree0(k)) => scale(p, *k),
        (Degree1(x), Degree1(y)) => Some(Degree2(mul_1_1(x, y))),
        (Degree1(x), Degree2(y)) | (Degree2(y), Degree1(x)) => Some(Degree3(mul_1_2(x, y))),
        // 2×2, 1×3, 2×3, 3×3, and anything random or generic.
        _ => None,
    }
}

/// [`try_add`], with an undefined pair reported as an error.
pub fn combine_add(a: &PolynomialNode, b: &PolynomialNode) -> VaryingResult<PolynomialNode> {
    try_add(a, b).ok_or_else(|| undefined("add", a, b))
}

/// [`try_multiply`], with an undefined pair reported as an error.
pub fn combine_multiply(a: &PolynomialNode, b: &PolynomialNode) -> VaryingResult<PolynomialNode> {
    try_multiply(a, b).ok_or_else(|| undefined("multiply", a, b))
}

fn undefined(op: &str, a: &PolynomialNode, b: &PolynomialNode) -> VaryingError {
    VaryingError::unsupported(format!(
        "{op} is not defined for {} and {}",
        a.shape_name(),
        b.shape_name()
    ))
}

fn scale(p: &PolynomialNode, k: f32) -> Option<PolynomialNode> {
    use PolynomialNode::{Degree0, Degree1, Degree2, Degree3};

    match p {
        Degree0(a0) => Some(Degree0(a0 * k)),
        Degree1(a) => Some(Degree1(a.map(|c| c * k))),
        Degree2(a) => Some(Degree2(a.map(|c| c * k))),
        Degree3(a) => Some(Degree3(a.map(|c| c * k))),
        PolynomialNode::Random | PolynomialNode::Add(..) | PolynomialNode::Multiply(..) => None,
    }
}

fn mul_1_1(x: &[f32; 2], y: &[f32; 2]) -> [f32; 3] {
    [x[0] * y[0], x[0] * y[1] + x[1] * y[0], x[1] * y[1]]
}

fn mul_1_2(x: &[f32; 2], y: &[f32; 3]) -> [f32; 4] {
    [
        x[0] * y[0],
        x[0] * y[1] + x[1] * y[0],
        x[0] * y[2] + x[1] * y[1],
        x[1] * y[2],
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/polynomial/algebra.rs"]
mod tests;
