use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CardsmithError::asset_not_found(AssetKind::Font, "x.ttf")
            .to_string()
            .contains("asset not found:")
    );
    assert!(
        CardsmithError::invalid_zoom("x")
            .to_string()
            .contains("invalid zoom:")
    );
    assert!(
        CardsmithError::UnsupportedLayout("x".to_string())
            .to_string()
            .contains("unsupported layout:")
    );
    assert!(
        CardsmithError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CardsmithError::render("x")
            .to_string()
            .contains("render error:")
    );
    let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
    assert!(
        CardsmithError::from(json_err)
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn asset_not_found_names_location_and_file() {
    let msg = CardsmithError::asset_not_found(AssetKind::BackPage, "back.png").to_string();
    assert!(msg.contains("back-pages"));
    assert!(msg.contains("back.png"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CardsmithError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
