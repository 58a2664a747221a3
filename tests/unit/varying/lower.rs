use super::*;
use crate::foundation::rng::Rng64;
use crate::varying::interpret::interpret;
use crate::varying::ir::{add, lerp, literal, multiply, random, symbol};

#[test]
fn lerp_becomes_add_multiply_form() {
    let lowered = lower(&lerp(literal(0.0), symbol(), symbol()));
    let expected = add(
        multiply(
            add(literal(1.0), multiply(literal(-1.0), symbol())),
            literal(0.0),
        ),
        multiply(symbol(), symbol()),
    );
    assert_eq!(lowered, expected);
}

#[test]
fn nested_lerps_are_all_removed() {
    let tree = lerp(
        lerp(symbol(), literal(1.0), symbol()),
        random(),
        lerp(literal(0.0), literal(1.0), symbol()),
    );
    assert!(contains_lerp(&tree));
    assert!(!contains_lerp(&lower(&tree)));
}

#[test]
fn lowering_preserves_value() {
    let tree = lerp(multiply(symbol(), literal(3.0)), literal(-2.0), symbol());
    let a = interpret(&tree);
    let b = interpret(&lower(&tree));
    let mut rng = Rng64::new(0);
    for i in 0..10 {
        let t = i as f32 * 0.3 - 1.0;
        assert!((a.call(t, &mut rng) - b.call(t, &mut rng)).abs() < 1e-5);
    }
}

#[test]
fn lerp_free_trees_are_unchanged() {
    let tree = add(multiply(random(), symbol()), literal(2.0));
    assert_eq!(lower(&tree), tree);
}
