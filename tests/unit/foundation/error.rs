use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(GlintError::asset("x").to_string().contains("asset error:"));
    assert!(
        GlintError::dimension("x")
            .to_string()
            .contains("dimension mismatch:")
    );
    assert!(
        GlintError::timeline("x")
            .to_string()
            .contains("timeline error:")
    );
    assert!(GlintError::sink("x").to_string().contains("sink error:"));
    assert!(
        GlintError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GlintError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
