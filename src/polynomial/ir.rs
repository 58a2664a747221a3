use smallvec::SmallVec;

use crate::polynomial::semantic::{PolynomialSemantic, evaluate};

/// Coefficient vector, lowest order first. Never longer than four entries.
pub type Coefficients = SmallVec<[f32; 4]>;

/// A varying restricted to polynomials of degree ≤ 3, random draws, and their sums and products.
///
/// `DegreeN` nodes are *concrete*: their coefficients are known and the algebra in
/// [`crate::polynomial::algebra`] can combine them. `Add`/`Multiply` are generic, un-evaluated
/// combinations that the optimizer folds when it can.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum PolynomialNode {
    /// `a0`.
    Degree0(f32),
    /// `a0 + a1·t`.
    Degree1([f32; 2]),
    /// `a0 + a1·t + a2·t²`.
    Degree2([f32; 3]),
    /// `a0 + a1·t + a2·t² + a3·t³`.
    Degree3([f32; 4]),
    /// Uniform draw in `[0, 1)`; opaque to the algebra.
    Random,
    /// Un-evaluated sum.
    Add(Box<PolynomialNode>, Box<PolynomialNode>),
    /// Un-evaluated product.
    Multiply(Box<PolynomialNode>, Box<PolynomialNode>),
}

impl PolynomialNode {
    /// Fold this tree with `semantic`; see [`evaluate`].
    pub fn evaluate<S>(&self, semantic: &S) -> S::Output
    where
        S: PolynomialSemantic + ?Sized,
    {
        evaluate(self, semantic)
    }

    /// Degree of a concrete node, `None` otherwise.
    pub fn degree(&self) -> Option<usize> {
        match self {
            Self::Degree0(_) => Some(0),
            Self::Degree1(_) => Some(1),
            Self::Degree2(_) => Some(2),
            Self::Degree3(_) => Some(3),
            Self::Random | Self::Add(..) | Self::Multiply(..) => None,
        }
    }

    /// Return `true` for `Degree0..=Degree3`.
    pub fn is_concrete(&self) -> bool {
        self.degree().is_some()
    }

    /// Coefficients of a concrete node, lowest order first.
    pub fn coefficients(&self) -> Option<Coefficients> {
        match self {
            Self::Degree0(a0) => Some(SmallVec::from_slice(&[*a0])),
            Self::Degree1(a) => Some(SmallVec::from_slice(a)),
            Self::Degree2(a) => Some(SmallVec::from_slice(a)),
            Self::Degree3(a) => Some(SmallVec::from_slice(a)),
            Self::Random | Self::Add(..) | Self::Multiply(..) => None,
        }
    }

    /// Build the concrete node holding exactly `coefficients` (1 to 4 entries).
    pub fn from_coefficients(coefficients: &[f32]) -> Option<Self> {
        match *coefficients {
            [a0] => Some(Self::Degree0(a0)),
            [a0, a1] => Some(Self::Degree1([a0, a1])),
            [a0, a1, a2] => Some(Self::Degree2([a0, a1, a2])),
            [a0, a1, a2, a3] => Some(Self::Degree3([a0, a1, a2, a3])),
            _ => None,
        }
    }

    /// Value of a concrete node at `t`, `None` for random or generic nodes.
    pub fn value_at(&self, t: f32) -> Option<f32> {
        let c = self.coefficients()?;
        Some(c.iter().rev().fold(0.0, |acc, a| acc * t + a))
    }

    /// Compare two concrete nodes coefficient-wise within `eps`, zero-padding the shorter one.
    ///
    /// Non-concrete nodes compare by structural equality.
    pub fn approx_eq(&self, other: &Self, eps: f32) -> bool {
        match (self.coefficients(), other.coefficients()) {
            (Some(a), Some(b)) => {
                let n = a.len().max(b.len());
                (0..n).all(|i| {
                    let x = a.get(i).copied().unwrap_or(0.0);
                    let y = b.get(i).copied().unwrap_or(0.0);
                    (x - y).abs() <= eps
                })
            }
            _ => self == other,
        }
    }

    /// Short shape name used in diagnostics.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Self::Degree0(_) => "degree0",
            Self::Degree1(_) => "degree1",
            Self::Degree2(_) => "degree2",
            Self::Degree3(_) => "degree3",
            Self::Random => "random",
            Self::Add(..) => "add",
            Self::Multiply(..) => "multiply",
        }
    }
}

/// `a0`.
pub fn degree0(a0: f32) -> PolynomialNode {
    PolynomialNode::Degree0(a0)
}

/// `a0 + a1·t`.
pub fn degree1(a0: f32, a1: f32) -> PolynomialNode {
    PolynomialNode::Degree1([a0, a1])
}

/// `a0 + a1·t + a2·t²`.
pub fn degree2(a0: f32, a1: f32, a2: f32) -> PolynomialNode {
    PolynomialNode::Degree2([a0, a1, a2])
}

/// `a0 + a1·t + a2·t² + a3·t³`.
pub fn degree3(a0: f32, a1: f32, a2: f32, a3: f32) -> PolynomialNode {
    PolynomialNode::Degree3([a0, a1, a2, a3])
}

/// Uniform draw in `[0, 1)`.
pub fn random() -> PolynomialNode {
    PolynomialNode::Random
}

/// Un-evaluated `left + right`.
pub fn add(left: PolynomialNode, right: PolynomialNode) -> PolynomialNode {
    PolynomialNode::Add(Box::new(left), Box::new(right))
}

/// Un-evaluated `left * right`.
pub fn multiply(left: PolynomialNode, right: PolynomialNode) -> PolynomialNode {
    PolynomialNode::Multiply(Box::new(left), Box::new(right))
}

#[cfg(test)]
#[path = "../../tests/unit/polynomial/ir.rs"]
mod tests;
