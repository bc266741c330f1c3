use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "cardsmith_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn fixture_font() -> Vec<u8> {
    std::fs::read(
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/fonts/DejaVuSans.ttf"),
    )
    .unwrap()
}

#[test]
fn asset_kinds_map_to_fixed_dirs() {
    assert_eq!(AssetKind::Illustration.dir_name(), "illustrations");
    assert_eq!(AssetKind::Font.dir_name(), "fonts");
    assert_eq!(AssetKind::BackPage.dir_name(), "back-pages");
    assert_eq!(AssetKind::BackPage.to_string(), "back-pages");
}

#[test]
fn normalize_asset_name_rejects_paths() {
    assert_eq!(normalize_asset_name(" draw.png ").unwrap(), "draw.png");
    assert!(normalize_asset_name("").is_err());
    assert!(normalize_asset_name("../secret.png").is_err());
    assert!(normalize_asset_name("a\\b.png").is_err());
    assert!(normalize_asset_name("..").is_err());
}

#[test]
fn list_missing_dir_is_empty() {
    let lib = AssetLibrary::new(temp_dir("list_missing"));
    assert!(lib.list(AssetKind::Font).unwrap().is_empty());
}

#[test]
fn import_then_list_and_read() {
    let tmp = temp_dir("import_list");
    let lib = AssetLibrary::new(&tmp);

    lib.import(AssetKind::Illustration, "b.png", b"bbb").unwrap();
    lib.import(AssetKind::Illustration, "a.JPG", b"aaa").unwrap();

    assert_eq!(
        lib.list(AssetKind::Illustration).unwrap(),
        vec!["a.JPG".to_string(), "b.png".to_string()]
    );
    assert!(lib.contains(AssetKind::Illustration, "b.png"));
    assert!(!lib.contains(AssetKind::BackPage, "b.png"));
    assert_eq!(lib.read(AssetKind::Illustration, "a.JPG").unwrap(), b"aaa");

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn import_rejects_wrong_extension() {
    let tmp = temp_dir("import_ext");
    let lib = AssetLibrary::new(&tmp);
    let err = lib.import(AssetKind::Font, "font.png", b"x").unwrap_err();
    assert!(matches!(err, CardsmithError::Validation(_)));
    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn read_missing_is_asset_not_found() {
    let lib = AssetLibrary::new(temp_dir("read_missing"));
    let err = lib.read(AssetKind::Font, "nope.ttf").unwrap_err();
    match err {
        CardsmithError::AssetNotFound { kind, name } => {
            assert_eq!(kind, AssetKind::Font);
            assert_eq!(name, "nope.ttf");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn text_engine_detects_family_and_shapes() {
    let bytes = fixture_font();
    let mut engine = TextLayoutEngine::new();
    let family = engine.register_font(&bytes).unwrap();
    assert!(family.contains("DejaVu"));

    let layout = engine
        .layout_line("Cristina School", &bytes, 27.0, TextBrushRgba8::default())
        .unwrap();
    assert!(layout.width() > 0.0);
    assert!(layout.height() > 0.0);
}

#[test]
fn text_engine_rejects_bad_size_and_bytes() {
    let mut engine = TextLayoutEngine::new();
    assert!(
        engine
            .layout_line("x", &fixture_font(), 0.0, TextBrushRgba8::default())
            .is_err()
    );
    assert!(engine.register_font(b"not a font").is_err());
}

#[test]
fn text_engine_shapes_with_the_given_face_only() {
    let regular = fixture_font();
    let bold = std::fs::read(
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/fonts/DejaVuSans-Bold.ttf"),
    )
    .unwrap();
    let text = "Cristina School WWWWW";

    let mut fresh = TextLayoutEngine::new();
    let bold_alone = fresh
        .layout_line(text, &bold, 27.0, TextBrushRgba8::default())
        .unwrap()
        .width();

    let mut shared = TextLayoutEngine::new();
    let regular_width = shared
        .layout_line(text, &regular, 27.0, TextBrushRgba8::default())
        .unwrap()
        .width();
    let bold_after_regular = shared
        .layout_line(text, &bold, 27.0, TextBrushRgba8::default())
        .unwrap()
        .width();

    assert_eq!(bold_after_regular, bold_alone);
    assert!(bold_alone > regular_width);
}
