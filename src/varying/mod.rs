//! The general Varying IR and the backends that fold it.

/// Shading-language code generation.
pub mod codegen;
/// Direct interpretation to a callable.
pub mod interpret;
/// Tree type and builder functions.
pub mod ir;
/// `Lerp` elimination.
pub mod lower;
/// Semantic trait and the generic fold.
pub mod semantic;
/// Symbol substitution and time remapping.
pub mod substitute;
