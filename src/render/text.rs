use std::sync::Arc;

use crate::{
    assets::store::{PreparedFont, TextBrushRgba8, TextLayoutEngine},
    foundation::core::{Point, Rgb8},
    foundation::error::{CardsmithError, CardsmithResult},
    render::canvas::Canvas,
};

/// A text slot resolved for one render: what to draw, how, and where.
#[derive(Clone, Debug)]
pub struct TextSlot {
    pub text: String,
    pub color: Rgb8,
    pub font: Arc<PreparedFont>,
    pub font_size: f32,
    /// Interpreted according to the [`TextAnchor`] used when drawing.
    pub anchor: Point,
}

/// How a slot's anchor point relates to the shaped text box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// Anchor is the horizontal and vertical center of the text box.
    Middle,
    /// Anchor is the top-left corner of the text box.
    TopLeft,
}

/// Top-left origin of a `width x height` text box placed at `anchor`.
pub fn text_origin(anchor: TextAnchor, point: Point, width: f64, height: f64) -> Point {
    match anchor {
        TextAnchor::Middle => Point::new(point.x - width / 2.0, point.y - height / 2.0),
        TextAnchor::TopLeft => point,
    }
}

/// Shape `slot` and composite it onto `canvas`. Empty text draws nothing.
pub fn draw_text(
    canvas: &mut Canvas,
    engine: &mut TextLayoutEngine,
    slot: &TextSlot,
    anchor: TextAnchor,
) -> CardsmithResult<()> {
    if slot.text.is_empty() {
        return Ok(());
    }

    let brush = TextBrushRgba8 {
        r: slot.color.r,
        g: slot.color.g,
        b: slot.color.b,
        a: 255,
    };
    let layout = engine.layout_line(&slot.text, &slot.font.bytes, slot.font_size, brush)?;
    let origin = text_origin(
        anchor,
        slot.anchor,
        f64::from(layout.width()),
        f64::from(layout.height()),
    );
    tracing::trace!(
        text = %slot.text,
        font = %slot.font.name,
        x = origin.x,
        y = origin.y,
        "draw text"
    );

    let layer = rasterize_layout(&layout, canvas.width(), canvas.height(), origin)?;
    canvas.blend_premul_layer(&layer)
}

/// Render glyphs of `layout` into a transparent premultiplied RGBA8 buffer.
///
/// Each run is drawn with the face it was shaped with.
fn rasterize_layout(
    layout: &parley::Layout<TextBrushRgba8>,
    width: u32,
    height: u32,
    origin: Point,
) -> CardsmithResult<Vec<u8>> {
    let w: u16 = width
        .try_into()
        .map_err(|_| CardsmithError::render("text surface width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| CardsmithError::render("text surface height exceeds u16"))?;

    let mut ctx = vello_cpu::RenderContext::new(w, h);
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };

            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));

            let mut x = run.offset();
            let y = run.baseline();
            let glyphs = run.glyphs().map(|g| {
                let glyph = vello_cpu::Glyph {
                    id: g.id,
                    x: x + g.x,
                    y: y - g.y,
                };
                x += g.advance;
                glyph
            });
            ctx.glyph_run(run.run().font())
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }

    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);
    Ok(pixmap.data_as_u8_slice().to_vec())
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
