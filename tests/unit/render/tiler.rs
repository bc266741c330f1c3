use super::*;
use crate::foundation::core::CANVAS_SIZE;

fn patterned(size: Size) -> Canvas {
    Canvas::from_image(image::RgbImage::from_fn(size.width, size.height, |x, y| {
        image::Rgb([(x % 251) as u8, (y % 241) as u8, ((x + y) % 13) as u8])
    }))
}

#[test]
fn sheet_is_twice_each_dimension() {
    for size in [Size::new(1, 1), Size::new(3, 7), CANVAS_SIZE] {
        let sheet = tile_to_sheet(&patterned(size)).unwrap();
        assert_eq!(sheet.size(), Size::new(size.width * 2, size.height * 2));
    }
}

#[test]
fn every_quadrant_matches_source() {
    let src = patterned(Size::new(9, 5));
    let sheet = tile_to_sheet(&src).unwrap();
    for qy in 0..2 {
        for qx in 0..2 {
            for y in 0..5 {
                for x in 0..9 {
                    assert_eq!(
                        sheet.canvas().pixel(qx * 9 + x, qy * 5 + y),
                        src.pixel(x, y),
                        "quadrant ({qx},{qy}) pixel ({x},{y})"
                    );
                }
            }
        }
    }
}

#[test]
fn quarter_sheet_reference_scenario() {
    let src = patterned(CANVAS_SIZE);
    let sheet = tile_to_sheet(&src).unwrap();
    assert_eq!(sheet.size(), Size::new(1754, 1240));
    let origin = src.pixel(0, 0);
    for (x, y) in [(0, 0), (877, 0), (0, 620), (877, 620)] {
        assert_eq!(sheet.canvas().pixel(x, y), origin);
    }
}

#[test]
fn unequal_heights_are_centered() {
    let tall = Canvas::new(Size::new(2, 6), Rgb8::BLACK).unwrap();
    let short = Canvas::new(Size::new(3, 3), Rgb8::new(9, 9, 9)).unwrap();
    let out = append_images(
        &[&tall, &short],
        Direction::Horizontal,
        Alignment::Center,
        Rgb8::WHITE,
    )
    .unwrap();
    assert_eq!(out.size(), Size::new(5, 6));
    // (6 - 3) // 2 = 1
    assert_eq!(out.pixel(2, 0), Some(Rgb8::WHITE));
    assert_eq!(out.pixel(2, 1), Some(Rgb8::new(9, 9, 9)));
    assert_eq!(out.pixel(4, 3), Some(Rgb8::new(9, 9, 9)));
    assert_eq!(out.pixel(4, 4), Some(Rgb8::WHITE));
}

#[test]
fn unequal_widths_align_start_and_end() {
    let wide = Canvas::new(Size::new(4, 1), Rgb8::BLACK).unwrap();
    let narrow = Canvas::new(Size::new(2, 1), Rgb8::new(5, 5, 5)).unwrap();
    let start = append_images(
        &[&wide, &narrow],
        Direction::Vertical,
        Alignment::Start,
        Rgb8::WHITE,
    )
    .unwrap();
    assert_eq!(start.pixel(0, 1), Some(Rgb8::new(5, 5, 5)));
    assert_eq!(start.pixel(3, 1), Some(Rgb8::WHITE));

    let end = append_images(
        &[&wide, &narrow],
        Direction::Vertical,
        Alignment::End,
        Rgb8::WHITE,
    )
    .unwrap();
    assert_eq!(end.pixel(0, 1), Some(Rgb8::WHITE));
    assert_eq!(end.pixel(3, 1), Some(Rgb8::new(5, 5, 5)));
}

#[test]
fn append_rejects_empty_input() {
    assert!(append_images(&[], Direction::Horizontal, Alignment::Center, Rgb8::WHITE).is_err());
}
