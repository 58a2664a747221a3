use super::*;

#[test]
fn builders_and_operators_agree() {
    let built = add(literal(1.0), multiply(literal(2.0), symbol()));
    let sugared = literal(1.0) + literal(2.0) * symbol();
    assert_eq!(built, sugared);
}

#[test]
fn subtract_is_add_of_negated_right() {
    let d = symbol() - literal(3.0);
    assert_eq!(d, add(symbol(), multiply(literal(-1.0), literal(3.0))));
}

#[test]
fn node_count_covers_all_operands() {
    let tree = lerp(literal(0.0), symbol(), symbol() * symbol());
    assert_eq!(tree.node_count(), 6);
}

#[test]
fn contains_random_looks_through_lerp() {
    assert!(!lerp(symbol(), literal(1.0), symbol()).contains_random());
    assert!(lerp(symbol(), literal(1.0), random()).contains_random());
}

#[test]
fn serializes_as_externally_tagged_json() {
    let tree = add(symbol(), literal(0.5));
    let json = serde_json::to_string(&tree).unwrap();
    assert_eq!(json, r#"{"Add":["Symbol",{"Literal":0.5}]}"#);
    let back: VaryingNode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree);
}
