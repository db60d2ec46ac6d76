use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ZombieError::invalid_grid("x")
            .to_string()
            .contains("invalid grid:")
    );
    assert!(ZombieError::source("x").to_string().contains("source error:"));
    assert!(ZombieError::render("x").to_string().contains("render error:"));
    assert!(
        ZombieError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ZombieError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
