use super::*;
use crate::foundation::rng::Rng64;

struct Counter(u32);

impl RandomSource for Counter {
    fn next_f32(&mut self) -> f32 {
        self.0 += 1;
        self.0 as f32 / 100.0
    }
}

#[test]
fn polynomial_leaves_use_horner() {
    let mut rng = Rng64::new(1);
    assert_eq!(constant(4.0).sample(10.0, &mut rng), 4.0);
    assert_eq!(linear(1.0, 2.0).sample(3.0, &mut rng), 7.0);
    assert_eq!(quadratic(1.0, 2.0, 1.0).sample(3.0, &mut rng), 16.0);
    assert_eq!(cubic(0.0, 0.0, 0.0, 1.0).sample(2.0, &mut rng), 8.0);
    assert_eq!(cubic(1.0, -1.0, 0.5, 2.0).sample(-2.0, &mut rng), 1.0 + 2.0 + 2.0 - 16.0);
}

#[test]
fn lanes_agree_with_scalar_for_deterministic_nodes() {
    let node = lerp(
        add(linear(1.0, 1.0), cubic(0.5, 0.0, -1.0, 0.25)),
        mul(quadratic(0.0, 1.0, 2.0), constant(3.0)),
        retime(linear(0.0, 0.5), 2.0, -1.0),
    );
    let mut rng = Rng64::new(0);
    let ts = [-1.5f32, 0.0, 0.25, 3.0];
    let lanes = node.sample4(ts, &mut rng);
    for (i, t) in ts.iter().enumerate() {
        assert_eq!(lanes[i], node.sample(*t, &mut rng));
    }
}

#[test]
fn random_draws_one_value_per_lane_in_order() {
    let mut rng = Counter(0);
    assert_eq!(random().sample4([0.0; 4], &mut rng), [0.01, 0.02, 0.03, 0.04]);
    assert_eq!(random().sample(0.0, &mut rng), 0.05);
}

#[test]
fn lerp_draws_weight_before_endpoints() {
    let node = lerp(random(), random(), random());
    let mut rng = Counter(0);
    // s = 0.01, x = 0.02, y = 0.03
    let v = node.sample(0.0, &mut rng);
    assert!((v - (0.99 * 0.02 + 0.01 * 0.03)).abs() < 1e-7);
}

#[test]
fn retime_remaps_before_inner_evaluation() {
    let node = retime(quadratic(0.0, 0.0, 1.0), 2.0, 1.0);
    let mut rng = Rng64::new(0);
    assert_eq!(node.sample(3.0, &mut rng), 49.0);
    assert_eq!(node.sample4([0.0, 1.0, 2.0, 3.0], &mut rng), [1.0, 9.0, 25.0, 49.0]);
}

#[test]
fn nodes_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}
    let node = add(random(), mul(linear(0.0, 1.0), constant(2.0)));
    assert_send_sync(&node);
}
