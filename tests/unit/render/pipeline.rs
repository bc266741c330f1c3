use super::*;
use crate::{
    assets::store::PreparedFont,
    foundation::core::{CANVAS_SIZE, Rgb8, SHEET_SIZE},
    foundation::error::CardsmithError,
    layout::geometry::ZoomInput,
};

use std::sync::Arc;

fn fixture_font(name: &str) -> PreparedFont {
    PreparedFont {
        name: name.to_string(),
        bytes: Arc::new(
            std::fs::read(
                std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
                    .join("tests/data/fonts/DejaVuSans.ttf"),
            )
            .unwrap(),
        ),
        family: "DejaVu Sans".to_string(),
    }
}

fn solid(w: u32, h: u32, rgb: [u8; 3]) -> image::RgbImage {
    image::RgbImage::from_pixel(w, h, image::Rgb(rgb))
}

fn assets() -> PreparedAssets {
    PreparedAssets::from_parts(
        solid(1200, 900, [40, 120, 60]),
        solid(500, 400, [200, 40, 40]),
        [fixture_font("t.ttf"), fixture_font("s.ttf")],
    )
}

fn config() -> RenderConfig {
    RenderConfig::new("front.png", "t.ttf", "s.ttf", "back.png")
}

#[test]
fn renders_four_images_at_fixed_sizes() {
    let out = render_postcard(&config(), &assets(), RenderOpts::default()).unwrap();
    assert_eq!(out.front.size(), CANVAS_SIZE);
    assert_eq!(out.back.size(), CANVAS_SIZE);
    assert_eq!(out.front_sheet.size(), SHEET_SIZE);
    assert_eq!(out.back_sheet.size(), SHEET_SIZE);
    assert_eq!(out.back.pixel(400, 300), Some(Rgb8::new(200, 40, 40)));
    assert_eq!(out.front.pixel(0, 0), Some(Rgb8::WHITE));
}

#[test]
fn parallel_matches_sequential() {
    let mut cfg = config();
    cfg.layout_name = "layout 2".to_string();
    cfg.zoom = ZoomInput::Label("1.5 px".to_string());
    let seq = render_postcard(&cfg, &assets(), RenderOpts::default()).unwrap();
    let par = render_postcard(
        &cfg,
        &assets(),
        RenderOpts {
            parallel: true,
            ..RenderOpts::default()
        },
    )
    .unwrap();
    assert_eq!(seq.front, par.front);
    assert_eq!(seq.back_sheet, par.back_sheet);
}

#[test]
fn filters_touch_front_only() {
    let mut cfg = config();
    cfg.invert = true;
    let out = render_postcard(&cfg, &assets(), RenderOpts::default()).unwrap();
    assert_eq!(out.front.pixel(0, 0), Some(Rgb8::BLACK));
    assert_eq!(out.back.pixel(0, 0), Some(Rgb8::new(200, 40, 40)));
    assert_eq!(out.front_sheet.canvas().pixel(877, 620), Some(Rgb8::BLACK));
}

#[test]
fn invalid_zoom_fails_before_compositing() {
    let mut cfg = config();
    cfg.zoom = ZoomInput::Number(0.0);
    let err = render_postcard(&cfg, &assets(), RenderOpts::default()).unwrap_err();
    assert!(matches!(err, CardsmithError::InvalidZoom(_)));
}

#[test]
fn unknown_layout_is_unsupported() {
    let mut cfg = config();
    cfg.layout_name = "layout 9".to_string();
    let err = render_postcard(&cfg, &assets(), RenderOpts::default()).unwrap_err();
    assert!(matches!(err, CardsmithError::UnsupportedLayout(_)));
}

#[test]
fn encode_names_outputs_in_order() {
    let opts = RenderOpts {
        encoding: ImageEncoding::Png,
        ..RenderOpts::default()
    };
    let out = render_postcard(&config(), &assets(), opts).unwrap();
    assert_eq!(out.encoding, ImageEncoding::Png);
    let names: Vec<_> = out
        .encode()
        .unwrap()
        .into_iter()
        .map(|im| im.name)
        .collect();
    assert_eq!(
        names,
        [
            "frontpage.png",
            "backpage.png",
            "frontpage_A4.png",
            "backpage_A4.png"
        ]
    );
}

#[test]
fn write_to_in_memory_sink_reports_no_paths() {
    let out = render_postcard(&config(), &assets(), RenderOpts::default()).unwrap();
    let mut sink = crate::encode::sink::InMemorySink::new();
    let paths = out.write_to(&mut sink).unwrap();
    assert!(paths.is_empty());
    assert_eq!(sink.images().len(), 4);
    let sheet = image::load_from_memory(&sink.get("backpage_A4.jpg").unwrap().bytes).unwrap();
    assert_eq!((sheet.width(), sheet.height()), (1754, 1240));
}
