use super::*;
use crate::runtime::compile::compile_varying;
use crate::runtime::node::{add, linear, quadratic, random};
use crate::varying::ir as vary;

fn times(n: usize) -> Vec<f32> {
    (0..n).map(|i| i as f32 * 0.125 - 2.0).collect()
}

#[test]
fn sample_into_matches_scalar_for_every_tail_length() {
    let node = quadratic(1.0, -2.0, 0.5);
    for n in 0..11 {
        let ts = times(n);
        let mut out = vec![f32::NAN; n];
        sample_into(&node, &ts, &mut out, &mut Rng64::new(0)).unwrap();
        for (t, v) in ts.iter().zip(&out) {
            assert_eq!(*v, node.sample(*t, &mut Rng64::new(0)));
        }
    }
}

#[test]
fn sample_into_rejects_length_mismatch() {
    let mut out = vec![0.0; 3];
    let err = sample_into(&linear(0.0, 1.0), &times(4), &mut out, &mut Rng64::new(0)).unwrap_err();
    assert!(matches!(err, VaryingError::Validation(_)));
}

#[test]
fn parallel_equals_serial_chunked() {
    let node = compile_varying(&vary::add(
        vary::multiply(vary::random(), vary::symbol()),
        vary::lerp(vary::literal(1.0), vary::random(), vary::symbol()),
    ));
    let ts = times(1003);
    let serial = SampleBatchOpts {
        chunk_size: 64,
        seed: 9,
        ..SampleBatchOpts::default()
    };
    let expected = sample_batch(&node, &ts, &serial).unwrap();
    for threads in [Some(1), Some(3), None] {
        let opts = SampleBatchOpts {
            parallel: true,
            threads,
            ..serial.clone()
        };
        assert_eq!(sample_batch(&node, &ts, &opts).unwrap(), expected);
    }
}

#[test]
fn chunks_use_derived_streams() {
    let node = random();
    let ts = times(10);
    let opts = SampleBatchOpts {
        chunk_size: 4,
        seed: 5,
        ..SampleBatchOpts::default()
    };
    let got = sample_batch(&node, &ts, &opts).unwrap();

    let mut expected = vec![0.0; 10];
    for (idx, (t, o)) in ts.chunks(4).zip(expected.chunks_mut(4)).enumerate() {
        sample_into(&node, t, o, &mut Rng64::stream(5, idx as u64)).unwrap();
    }
    assert_eq!(got, expected);
    assert!(got.iter().all(|v| (0.0..1.0).contains(v)));
}

#[test]
fn zero_threads_and_zero_chunk_size() {
    let node = add(linear(0.0, 1.0), linear(1.0, 0.0));
    let bad = SampleBatchOpts {
        parallel: true,
        threads: Some(0),
        ..SampleBatchOpts::default()
    };
    assert!(matches!(
        sample_batch(&node, &times(4), &bad),
        Err(VaryingError::Validation(_))
    ));

    let tiny = SampleBatchOpts {
        chunk_size: 0,
        ..SampleBatchOpts::default()
    };
    assert_eq!(sample_batch(&node, &[1.0, 2.0], &tiny).unwrap(), vec![2.0, 3.0]);
}

#[test]
fn linspace_includes_both_ends() {
    assert_eq!(linspace(0.0, 1.0, 5).unwrap(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(linspace(2.0, 7.0, 1).unwrap(), vec![2.0]);
    assert!(linspace(0.0, 1.0, 0).is_err());
    assert!(linspace(0.0, f32::INFINITY, 3).is_err());
}

#[test]
fn midpoint_integral_is_exact_for_linear() {
    // ∫₀² (1 + 3t) dt = 2 + 6 = 8
    let v = integrate_midpoint(&linear(1.0, 3.0), 0.0, 2.0, &mut Rng64::new(0));
    assert_eq!(v, 8.0);
}
