use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        VaryingError::invariant("x")
            .to_string()
            .contains("invariant violation:")
    );
    assert!(
        VaryingError::unsupported("x")
            .to_string()
            .contains("unsupported combination:")
    );
    assert!(
        VaryingError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert_eq!(
        VaryingError::parse(3, "unexpected token").to_string(),
        "parse error at byte 3: unexpected token"
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = VaryingError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
