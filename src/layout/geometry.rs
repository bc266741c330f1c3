use crate::{
    foundation::core::{Rect, Size},
    foundation::error::{CardsmithError, CardsmithResult},
    foundation::math::half_floor,
};

/// Supported zoom steps as offered to the user, label first.
pub const ZOOM_STEPS: [(&str, f64); 8] = [
    ("1 px", 1.0),
    ("1.1 px", 1.1),
    ("1.2 px", 1.2),
    ("1.3 px", 1.3),
    ("1.4 px", 1.4),
    ("1.5 px", 1.5),
    ("1.75 px", 1.75),
    ("2 px", 2.0),
];

/// Zoom multiplier restricted to [`ZOOM_STEPS`]. `1.0` is the identity crop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomFactor(f64);

impl ZoomFactor {
    pub const IDENTITY: ZoomFactor = ZoomFactor(1.0);

    /// Accept `value` only if it is one of the supported steps.
    pub fn new(value: f64) -> CardsmithResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(CardsmithError::invalid_zoom(format!(
                "zoom must be finite and > 0, got {value}"
            )));
        }
        ZOOM_STEPS
            .iter()
            .find(|(_, v)| (v - value).abs() < 1e-9)
            .map(|&(_, v)| Self(v))
            .ok_or_else(|| {
                CardsmithError::invalid_zoom(format!("{value} is not a supported zoom step"))
            })
    }

    /// Parse a UI label such as `"1.5 px"`; a bare number is accepted too.
    pub fn from_label(label: &str) -> CardsmithResult<Self> {
        let label = label.trim();
        if let Some(&(_, v)) = ZOOM_STEPS.iter().find(|(l, _)| *l == label) {
            return Ok(Self(v));
        }
        let number = label.strip_suffix("px").unwrap_or(label).trim();
        let value: f64 = number
            .parse()
            .map_err(|_| CardsmithError::invalid_zoom(format!("unrecognized zoom '{label}'")))?;
        Self::new(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn label(self) -> &'static str {
        ZOOM_STEPS
            .iter()
            .find(|(_, v)| *v == self.0)
            .map(|(l, _)| *l)
            .unwrap_or("1 px")
    }

    pub fn is_identity(self) -> bool {
        self.0 == 1.0
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Zoom as written in configuration: a UI label (`"1.5 px"`) or a bare number.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ZoomInput {
    Number(f64),
    Label(String),
}

impl ZoomInput {
    /// Validate against the supported steps.
    pub fn resolve(&self) -> CardsmithResult<ZoomFactor> {
        match self {
            ZoomInput::Number(v) => ZoomFactor::new(*v),
            ZoomInput::Label(s) => ZoomFactor::from_label(s),
        }
    }
}

impl Default for ZoomInput {
    fn default() -> Self {
        ZoomInput::Label(ZoomFactor::IDENTITY.label().to_string())
    }
}

impl From<ZoomFactor> for ZoomInput {
    fn from(z: ZoomFactor) -> Self {
        ZoomInput::Label(z.label().to_string())
    }
}

/// Centered crop rectangle of size `(w/zoom, h/zoom)` inside an image of `source` size.
pub fn resolve_crop(source: Size, zoom: f64) -> CardsmithResult<Rect> {
    if !zoom.is_finite() || zoom <= 0.0 {
        return Err(CardsmithError::invalid_zoom(format!(
            "zoom must be finite and > 0, got {zoom}"
        )));
    }
    let (w, h) = (f64::from(source.width), f64::from(source.height));
    let (cx, cy) = (w / 2.0, h / 2.0);
    let (hw, hh) = (w / (2.0 * zoom), h / (2.0 * zoom));
    Ok(Rect::new(cx - hw, cy - hh, cx + hw, cy + hh))
}

/// Integer crop box in source pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelBox {
    pub fn covers(self, size: Size) -> bool {
        self.x == 0 && self.y == 0 && self.width == size.width && self.height == size.height
    }
}

/// Snap a crop rectangle to whole pixels: each edge rounds half to even, then clamps to
/// `source`. The result is never empty.
pub fn crop_box_px(rect: Rect, source: Size) -> PixelBox {
    let snap = |v: f64, max: u32| -> u32 { v.round_ties_even().clamp(0.0, f64::from(max)) as u32 };
    let x0 = snap(rect.x0, source.width.saturating_sub(1));
    let y0 = snap(rect.y0, source.height.saturating_sub(1));
    let x1 = snap(rect.x1, source.width).max(x0 + 1);
    let y1 = snap(rect.y1, source.height).max(y0 + 1);
    PixelBox {
        x: x0,
        y: y0,
        width: x1 - x0,
        height: y1 - y0,
    }
}

/// Top-left position centering `draw` inside `canvas`, shifted by `correction`.
///
/// Each axis is `(canvas - draw) // 2` with floor division, so odd remainders land on the
/// top-left side.
pub fn resolve_draw_box(canvas: Size, draw: Size, correction: (i64, i64)) -> (i64, i64) {
    let x = half_floor(i64::from(canvas.width) - i64::from(draw.width)) + correction.0;
    let y = half_floor(i64::from(canvas.height) - i64::from(draw.height)) + correction.1;
    (x, y)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/geometry.rs"]
mod tests;
