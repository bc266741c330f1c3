use super::*;

#[test]
fn every_layout_leaves_a_margin() {
    for layout in layouts() {
        layout.validate().unwrap();
        assert!(layout.draw_area.width < CANVAS_SIZE.width, "{}", layout.name);
        assert!(layout.draw_area.height < CANVAS_SIZE.height, "{}", layout.name);
    }
}

#[test]
fn oversized_draw_area_fails_validation() {
    let mut bad = LAYOUTS[0];
    bad.draw_area = CANVAS_SIZE;
    assert!(bad.validate().is_err());
}

#[test]
fn lookup_by_name() {
    assert_eq!(layout_by_name("layout 1").unwrap().draw_area, Size::new(797, 507));
    assert_eq!(layout_by_name("layout 2").unwrap().draw_area, Size::new(772, 555));
    assert!(matches!(
        layout_by_name("layout 9"),
        Err(CardsmithError::UnsupportedLayout(_))
    ));
}

#[test]
fn positioned_anchors_match_caption_rows() {
    let LayoutKind::Positioned { title, subtitle } = layout_by_name("layout 1").unwrap().kind
    else {
        panic!("layout 1 should be positioned");
    };
    assert_eq!(title.font_size, 27.0);
    assert_eq!(title.anchor(SlotPosition::Center), Point::new(438.5, 573.0));
    assert_eq!(title.anchor(SlotPosition::Left), Point::new(127.0, 573.0));
    assert_eq!(title.anchor(SlotPosition::Right), Point::new(750.0, 573.0));
    assert_eq!(subtitle.font_size, 20.0);
    assert_eq!(subtitle.anchor(SlotPosition::Left), Point::new(97.0, 600.0));
    assert_eq!(subtitle.anchor(SlotPosition::Right), Point::new(780.0, 600.0));
}

#[test]
fn banner_label_geometry() {
    let LayoutKind::Banner {
        title,
        subtitle,
        subtitle2,
    } = layout_by_name("layout 2").unwrap().kind
    else {
        panic!("layout 2 should be a banner");
    };
    assert_eq!(title.font_size, 31.0);
    assert_eq!(title.surface, Size::new(300, 45));
    assert_eq!(title.paste_at, (830, 157));
    assert_eq!(subtitle.anchor, Point::new(728.0, 595.0));
    assert_eq!(subtitle2.anchor, Point::new(135.0, 595.0));
}

#[test]
fn slot_position_serde_is_lowercase() {
    let p: SlotPosition = serde_json::from_str("\"right\"").unwrap();
    assert_eq!(p, SlotPosition::Right);
    assert_eq!(SlotPosition::default().name(), "center");
    assert!(serde_json::from_str::<SlotPosition>("\"top\"").is_err());
}

#[test]
fn describe_slots_lists_positions() {
    let l1 = layout_by_name("layout 1").unwrap().describe_slots();
    assert_eq!(
        l1,
        "title 27px (center|left|right), subtitle 20px (center|left|right)"
    );
    let l2 = layout_by_name("layout 2").unwrap().describe_slots();
    assert!(l2.starts_with("rotated title 31px"));
}
