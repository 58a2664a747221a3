//! Sampling runtime: evaluator nodes, compilation from either IR, and batch sampling.

/// Chunked and parallel sampling over many times.
pub mod batch;
/// IR → evaluator compilation.
pub mod compile;
/// The [`node::Sample`] trait and statically composed evaluator nodes.
pub mod node;
