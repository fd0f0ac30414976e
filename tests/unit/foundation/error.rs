use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        AutoslideError::input("x")
            .to_string()
            .contains("input error:")
    );
    assert!(AutoslideError::tool("x").to_string().contains("tool error:"));
    assert!(
        AutoslideError::audio("x")
            .to_string()
            .contains("audio error:")
    );
    assert!(
        AutoslideError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        AutoslideError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = AutoslideError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn anyhow_context_converts_with_question_mark() {
    fn read_missing() -> AutoslideResult<String> {
        use anyhow::Context as _;
        let s = std::fs::read_to_string("/definitely/not/here.md")
            .context("read slides markdown")?;
        Ok(s)
    }

    let err = read_missing().unwrap_err();
    assert!(matches!(err, AutoslideError::Other(_)));
    assert!(err.to_string().contains("read slides markdown"));
}
