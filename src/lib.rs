//! Time-varying scalar expressions with interchangeable interpretations.
//!
//! A varying is a tree over the time symbol `t`, random draws, literals, sums, products and
//! linear interpolation. The same tree can be:
//!
//! - interpreted directly ([`interpret`]),
//! - rendered as shader source ([`to_shader_code`]),
//! - lowered, converted to a degree ≤ 3 polynomial and optimized ([`to_polynomial`],
//!   [`optimize`], [`simplify`]),
//! - compiled into a thread-shareable sampler ([`compile_varying`], [`compile_polynomial`]) and
//!   evaluated one time or many at once ([`sample_batch`]).
//!
//! Random draws always come from a caller-supplied [`RandomSource`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Text syntax for varyings.
pub mod frontend;
/// Degree ≤ 3 polynomial IR.
pub mod polynomial;
/// Sampling runtime.
pub mod runtime;
/// The Varying IR and its backends.
pub mod varying;

pub use crate::foundation::error::{VaryingError, VaryingResult};
pub use crate::foundation::rng::{RandomSource, Rng64};

pub use crate::frontend::parse;
pub use crate::polynomial::algebra::{combine_add, combine_multiply};
pub use crate::polynomial::convert::{simplify, to_polynomial, to_varying};
pub use crate::polynomial::ir::PolynomialNode;
pub use crate::polynomial::optimize::optimize;
pub use crate::runtime::batch::{
    SampleBatchOpts, integrate_midpoint, linspace, sample_batch, sample_into,
};
pub use crate::runtime::compile::{SampleNode, compile_polynomial, compile_varying};
pub use crate::runtime::node::Sample;
pub use crate::varying::codegen::{
    ShaderCode, UNSUPPORTED_LITERAL, UNSUPPORTED_RANDOM, to_shader_code,
};
pub use crate::varying::interpret::{Interpreted, interpret};
pub use crate::varying::ir::VaryingNode;
pub use crate::varying::lower::lower;
pub use crate::varying::substitute::{compose, offset, scale, substitute};
