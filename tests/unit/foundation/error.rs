use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FrescoError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FrescoError::surface("x")
            .to_string()
            .contains("surface error:")
    );
    assert!(FrescoError::render("x").to_string().contains("render error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FrescoError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
