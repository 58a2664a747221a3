use rayon::prelude::*;

use crate::foundation::error::{VaryingError, VaryingResult};
use crate::foundation::rng::{RandomSource, Rng64};
use crate::runtime::node::Sample;

/// Batch sampling configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleBatchOpts {
    /// Run chunks on a dedicated rayon pool.
    pub parallel: bool,
    /// Samples per chunk; each chunk gets its own generator. `0` is treated as `1`.
    pub chunk_size: usize,
    /// Worker count for the pool; `None` lets rayon decide.
    pub threads: Option<usize>,
    /// Seed every chunk generator is derived from.
    pub seed: u64,
}

impl Default for SampleBatchOpts {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 256,
            threads: None,
            seed: 0,
        }
    }
}

/// Sample `node` at every entry of `times` into `out`, four lanes at a time.
///
/// Full groups of four go through [`Sample::sample4`]; the tail goes through [`Sample::sample`].
pub fn sample_into<S, R>(node: &S, times: &[f32], out: &mut [f32], rng: &mut R) -> VaryingResult<()>
where
    S: Sample,
    R: RandomSource + ?Sized,
{
    if times.len() != out.len() {
        return Err(VaryingError::validation(format!(
            "sample buffer length {} does not match {} sample times",
            out.len(),
            times.len()
        )));
    }

    let mut t4 = times.chunks_exact(4);
    let mut o4 = out.chunks_exact_mut(4);
    for (t, o) in (&mut t4).zip(&mut o4) {
        o.copy_from_slice(&node.sample4([t[0], t[1], t[2], t[3]], rng));
    }
    for (t, o) in t4.remainder().iter().zip(o4.into_remainder()) {
        *o = node.sample(*t, rng);
    }
    Ok(())
}

/// Sample `node` at every entry of `times`.
///
/// Chunk `i` always uses `Rng64::stream(opts.seed, i)`, so the result does not depend on
/// `parallel` or on the thread count.
#[tracing::instrument(skip(node, times), fields(len = times.len()))]
pub fn sample_batch<S>(node: &S, times: &[f32], opts: &SampleBatchOpts) -> VaryingResult<Vec<f32>>
where
    S: Sample + Sync,
{
    if opts.threads == Some(0) {
        return Err(VaryingError::validation(
            "batch sampling 'threads' must be >= 1 when set",
        ));
    }

    let chunk_size = normalized_chunk_size(opts.chunk_size);
    let mut out = vec![0.0; times.len()];
    tracing::debug!(
        chunks = times.len().div_ceil(chunk_size),
        chunk_size,
        "batch chunk plan"
    );

    if opts.parallel {
        let pool = build_thread_pool(opts.threads)?;
        pool.install(|| {
            times
                .par_chunks(chunk_size)
                .zip(out.par_chunks_mut(chunk_size))
                .enumerate()
                .try_for_each(|(idx, (t, o))| sample_chunk(node, t, o, opts.seed, idx))
        })?;
    } else {
        for (idx, (t, o)) in times
            .chunks(chunk_size)
            .zip(out.chunks_mut(chunk_size))
            .enumerate()
        {
            sample_chunk(node, t, o, opts.seed, idx)?;
        }
    }

    Ok(out)
}

fn sample_chunk<S: Sample>(
    node: &S,
    times: &[f32],
    out: &mut [f32],
    seed: u64,
    idx: usize,
) -> VaryingResult<()> {
    let mut rng = Rng64::stream(seed, idx as u64);
    sample_into(node, times, out, &mut rng)
}

/// `steps` evenly spaced times from `from` to `to`, both ends included.
pub fn linspace(from: f32, to: f32, steps: usize) -> VaryingResult<Vec<f32>> {
    if !from.is_finite() || !to.is_finite() {
        return Err(VaryingError::validation(format!(
            "sample range must be finite, got {from}..{to}"
        )));
    }
    match steps {
        0 => Err(VaryingError::validation("sample 'steps' must be >= 1")),
        1 => Ok(vec![from]),
        n => {
            let step = (to - from) / (n - 1) as f32;
            Ok((0..n)
                .map(|i| if i == n - 1 { to } else { from + step * i as f32 })
                .collect())
        }
    }
}

/// Single-point midpoint estimate of `∫ node dt` over `[t0, t1]`.
pub fn integrate_midpoint<S, R>(node: &S, t0: f32, t1: f32, rng: &mut R) -> f32
where
    S: Sample,
    R: RandomSource + ?Sized,
{
    node.sample(0.5 * (t0 + t1), rng) * (t1 - t0)
}

fn build_thread_pool(threads: Option<usize>) -> VaryingResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build rayon thread pool: {e}").into())
}

fn normalized_chunk_size(chunk_size: usize) -> usize {
    chunk_size.max(1)
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/batch.rs"]
mod tests;
