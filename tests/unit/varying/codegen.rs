use super::*;
use crate::varying::ir::{add, lerp, literal, multiply, random, symbol};

#[test]
fn renders_infix_with_parentheses() {
    let code = to_shader_code(&add(literal(1.0), multiply(literal(2.0), symbol())));
    assert_eq!(code.text, "(1 + (2 * t))");
    assert!(code.is_valid());
}

#[test]
fn renders_lerp_and_fractional_literals() {
    let code = to_shader_code(&lerp(literal(0.5), symbol(), literal(-1.25)));
    assert_eq!(code.to_string(), "lerp(0.5, t, -1.25)");
}

#[test]
fn random_yields_marker_without_aborting() {
    let code = to_shader_code(&add(random(), multiply(random(), symbol())));
    assert_eq!(
        code.text,
        format!("({UNSUPPORTED_RANDOM} + ({UNSUPPORTED_RANDOM} * t))")
    );
    assert_eq!(code.unsupported, 2);
    assert!(!code.is_valid());
}

#[test]
fn non_finite_literals_are_marked_unsupported() {
    let code = to_shader_code(&add(
        literal(f32::NAN),
        multiply(literal(f32::INFINITY), symbol()),
    ));
    assert_eq!(
        code.text,
        format!("({UNSUPPORTED_LITERAL} + ({UNSUPPORTED_LITERAL} * t))")
    );
    assert_eq!(code.unsupported, 2);
    assert!(!code.is_valid());
    assert!(!to_shader_code(&literal(f32::NEG_INFINITY)).is_valid());
}

#[test]
fn large_integral_literals_use_exponent_form() {
    let code = to_shader_code(&multiply(literal(1e20), symbol()));
    assert_eq!(code.text, "(1e20 * t)");
    assert!(code.is_valid());
    assert_eq!(to_shader_code(&literal(-3e9)).text, "-3e9");
    assert_eq!(to_shader_code(&literal(1234567.0)).text, "1234567");
    assert_eq!(to_shader_code(&literal(0.125)).text, "0.125");
}
