use super::*;

#[test]
fn degree_and_coefficients_follow_shape() {
    let p = degree2(1.0, 2.0, 3.0);
    assert_eq!(p.degree(), Some(2));
    assert_eq!(p.coefficients().unwrap().as_slice(), &[1.0, 2.0, 3.0]);
    assert!(p.is_concrete());

    let g = add(random(), degree0(1.0));
    assert_eq!(g.degree(), None);
    assert!(g.coefficients().is_none());
    assert!(!random().is_concrete());
}

#[test]
fn from_coefficients_accepts_one_to_four() {
    assert_eq!(PolynomialNode::from_coefficients(&[5.0]), Some(degree0(5.0)));
    assert_eq!(
        PolynomialNode::from_coefficients(&[1.0, 2.0, 3.0, 4.0]),
        Some(degree3(1.0, 2.0, 3.0, 4.0))
    );
    assert_eq!(PolynomialNode::from_coefficients(&[]), None);
    assert_eq!(PolynomialNode::from_coefficients(&[0.0; 5]), None);
}

#[test]
fn value_at_uses_all_coefficients() {
    let p = degree3(1.0, -2.0, 0.5, 2.0);
    let t = 1.5f32;
    let expected = 1.0 - 2.0 * t + 0.5 * t * t + 2.0 * t * t * t;
    assert!((p.value_at(t).unwrap() - expected).abs() < 1e-5);
    assert_eq!(random().value_at(0.0), None);
}

#[test]
fn approx_eq_pads_shorter_operand() {
    assert!(degree1(3.0, 0.0).approx_eq(&degree0(3.0), 0.0));
    assert!(degree2(1.0, 2.0, 1.0).approx_eq(&degree2(1.0, 2.0 + 1e-7, 1.0), 1e-6));
    assert!(!degree1(3.0, 1.0).approx_eq(&degree0(3.0), 1e-3));
    assert!(random().approx_eq(&random(), 0.0));
}
