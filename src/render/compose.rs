use crate::{
    assets::store::TextLayoutEngine,
    foundation::core::{CANVAS_SIZE, Rgb8, Size},
    foundation::error::{CardsmithError, CardsmithResult},
    layout::geometry::{ZoomFactor, crop_box_px, resolve_crop, resolve_draw_box},
    layout::registry::{LayoutKind, LayoutSpec},
    render::canvas::Canvas,
    render::text::{TextAnchor, TextSlot, draw_text},
};

use image::imageops::FilterType;

/// Resampling filter for every resize in the pipeline (bicubic).
pub const RESIZE_FILTER: FilterType = FilterType::CatmullRom;

/// Text slots resolved for the front page, shaped to match a [`LayoutKind`].
#[derive(Clone, Debug)]
pub struct FrontSlots {
    /// Title; drawn centered, or on the rotated label for banner layouts.
    pub title: TextSlot,
    /// Subtitles in layout order, each drawn centered on its anchor.
    pub subtitles: Vec<TextSlot>,
}

/// Resize to `draw_area` ignoring aspect ratio, then crop around the center by `zoom` and
/// scale the crop back up. The result is always exactly `draw_area` pixels.
pub fn zoom_in_place(
    illustration: &image::RgbImage,
    draw_area: Size,
    zoom: ZoomFactor,
) -> CardsmithResult<image::RgbImage> {
    if draw_area.is_empty() {
        return Err(CardsmithError::render("draw area must have non-zero area"));
    }
    let resized = resize_exact(illustration, draw_area);
    if zoom.is_identity() {
        return Ok(resized);
    }

    let crop = resolve_crop(draw_area, zoom.value())?;
    let px = crop_box_px(crop, draw_area);
    tracing::debug!(
        zoom = zoom.value(),
        x = px.x,
        y = px.y,
        w = px.width,
        h = px.height,
        "zoom crop"
    );
    if px.covers(draw_area) {
        return Ok(resized);
    }
    let cropped = image::imageops::crop_imm(&resized, px.x, px.y, px.width, px.height).to_image();
    Ok(resize_exact(&cropped, draw_area))
}

/// Compose the front page: zoomed art centered on a `margin` canvas plus the layout's text.
#[tracing::instrument(skip_all, fields(layout = layout.name, zoom = zoom.value()))]
pub fn compose_front(
    illustration: &image::RgbImage,
    layout: &LayoutSpec,
    zoom: ZoomFactor,
    margin: Rgb8,
    slots: &FrontSlots,
) -> CardsmithResult<Canvas> {
    layout.validate()?;

    let art = zoom_in_place(illustration, layout.draw_area, zoom)?;
    let mut canvas = Canvas::new(CANVAS_SIZE, margin)?;
    let (x, y) = resolve_draw_box(CANVAS_SIZE, layout.draw_area, layout.draw_offset);
    tracing::debug!(x, y, "draw box");
    canvas.paste(&art, x, y);

    let mut engine = TextLayoutEngine::new();
    match &layout.kind {
        LayoutKind::Positioned { .. } => {
            draw_text(&mut canvas, &mut engine, &slots.title, TextAnchor::Middle)?;
        }
        LayoutKind::Banner { title, .. } => {
            let mut label = Canvas::new(title.surface, margin)?;
            draw_text(&mut label, &mut engine, &slots.title, TextAnchor::TopLeft)?;
            let rotated = label.rotated_ccw();
            canvas.paste(rotated.as_image(), title.paste_at.0, title.paste_at.1);
        }
    }
    for subtitle in &slots.subtitles {
        draw_text(&mut canvas, &mut engine, subtitle, TextAnchor::Middle)?;
    }

    Ok(canvas)
}

/// Compose the back page: a plain resize of `back` to the canvas size.
#[tracing::instrument(skip_all)]
pub fn compose_back(back: &image::RgbImage) -> CardsmithResult<Canvas> {
    if back.width() == 0 || back.height() == 0 {
        return Err(CardsmithError::render("back page image has zero area"));
    }
    Ok(Canvas::from_image(resize_exact(back, CANVAS_SIZE)))
}

fn resize_exact(src: &image::RgbImage, size: Size) -> image::RgbImage {
    if src.dimensions() == (size.width, size.height) {
        return src.clone();
    }
    image::imageops::resize(src, size.width, size.height, RESIZE_FILTER)
}

#[cfg(test)]
#[path = "../../tests/unit/render/compose.rs"]
mod tests;
