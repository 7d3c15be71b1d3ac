use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        KinemaError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        KinemaError::keyframe("x")
            .to_string()
            .contains("keyframe error:")
    );
    assert!(
        KinemaError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = KinemaError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
