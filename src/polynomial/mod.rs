//! The degree ≤ 3 Polynomial IR, its algebra, the optimizer, and conversions to and from the
//! Varying IR.

/// Closed-form sums and products.
pub mod algebra;
/// Varying ↔ Polynomial conversions.
pub mod convert;
/// Tree type and builder functions.
pub mod ir;
/// Partial evaluation.
pub mod optimize;
/// Semantic trait and the generic fold.
pub mod semantic;
