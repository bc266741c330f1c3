use crate::render::canvas::Canvas;

/// Channel values at or above this are inverted by [`solarize`].
pub const SOLARIZE_THRESHOLD: u8 = 128;

/// Optional global tone transforms, applied invert-then-solarize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ToneFilters {
    pub invert: bool,
    pub solarize: bool,
}

impl ToneFilters {
    pub fn is_noop(self) -> bool {
        !self.invert && !self.solarize
    }
}

/// Apply `filters` to `canvas`. The input is consumed; no copy of it is retained.
#[tracing::instrument(skip(canvas))]
pub fn apply_filters(canvas: Canvas, filters: ToneFilters) -> Canvas {
    if filters.is_noop() {
        return canvas;
    }
    let mut out = canvas;
    if filters.invert {
        out = invert(out);
    }
    if filters.solarize {
        out = solarize(out, SOLARIZE_THRESHOLD);
    }
    out
}

/// `255 - v` on every channel. Self-inverse.
pub fn invert(canvas: Canvas) -> Canvas {
    let mut canvas = canvas;
    image::imageops::invert(canvas.as_image_mut());
    canvas
}

/// Invert every channel value `>= threshold`; lower values pass through. Not self-inverse.
pub fn solarize(canvas: Canvas, threshold: u8) -> Canvas {
    let mut canvas = canvas;
    for px in canvas.as_image_mut().pixels_mut() {
        for c in px.0.iter_mut() {
            if *c >= threshold {
                *c = 255 - *c;
            }
        }
    }
    canvas
}

#[cfg(test)]
#[path = "../../tests/unit/effects/tone.rs"]
mod tests;
