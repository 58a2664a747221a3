use super::*;
use crate::polynomial::ir::{add, degree0, degree1, degree2, degree3, multiply, random};

#[test]
fn zero_constant_is_additive_identity() {
    let p = add(degree0(0.0), degree1(3.0, 1.0));
    assert_eq!(optimize(&p), degree1(3.0, 1.0));

    let q = add(random(), degree0(0.0));
    assert_eq!(optimize(&q), random());
}

#[test]
fn folds_nested_concrete_operands() {
    let t = degree1(0.0, 1.0);
    let p = add(
        multiply(t.clone(), t.clone()),
        add(multiply(degree0(2.0), t), degree0(1.0)),
    );
    assert_eq!(optimize(&p), degree2(1.0, 2.0, 1.0));
}

#[test]
fn leaves_random_and_oversized_products_unfolded() {
    let q = degree2(0.0, 0.0, 1.0);
    let p = multiply(q.clone(), q.clone());
    assert_eq!(optimize(&p), p);

    let r = add(multiply(degree0(2.0), degree0(3.0)), random());
    assert_eq!(optimize(&r), add(degree0(6.0), random()));
}

#[test]
fn generic_children_are_still_optimized() {
    let inner = multiply(degree1(1.0, 1.0), degree1(-1.0, 1.0));
    let p = multiply(random(), inner);
    assert_eq!(
        optimize(&p),
        multiply(random(), degree2(-1.0, 0.0, 1.0))
    );
}

#[test]
fn optimize_is_idempotent() {
    let trees = vec![
        add(degree0(0.0), degree1(3.0, 1.0)),
        multiply(degree2(1.0, 0.0, 1.0), degree2(0.0, 1.0, 1.0)),
        add(random(), multiply(random(), degree0(0.0))),
        add(
            multiply(degree1(1.0, 2.0), degree2(0.5, 0.0, 1.0)),
            add(degree3(1.0, 1.0, 1.0, 1.0), random()),
        ),
        multiply(add(degree0(0.0), random()), degree0(2.0)),
    ];
    for tree in trees {
        let once = optimize(&tree);
        assert_eq!(optimize(&once), once);
    }
}
