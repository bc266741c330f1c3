use crate::{
    foundation::core::{CANVAS_SIZE, Point, Size},
    foundation::error::{CardsmithError, CardsmithResult},
};

/// Horizontal placement choice for a positioned text slot.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SlotPosition {
    /// Left of the caption row.
    Left,
    /// Horizontally centered on the canvas.
    #[default]
    Center,
    /// Right of the caption row.
    Right,
}

impl SlotPosition {
    /// All positions in UI order.
    pub const ALL: [SlotPosition; 3] = [
        SlotPosition::Center,
        SlotPosition::Left,
        SlotPosition::Right,
    ];

    /// Lowercase name as used in configuration.
    pub fn name(self) -> &'static str {
        match self {
            SlotPosition::Left => "left",
            SlotPosition::Center => "center",
            SlotPosition::Right => "right",
        }
    }
}

/// Text slot whose anchor is picked by the user among named positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionedSlot {
    /// Font size in pixels.
    pub font_size: f32,
    /// Left, center and right anchors (text centers).
    pub anchors: [(SlotPosition, Point); 3],
}

impl PositionedSlot {
    /// Anchor point for `position`.
    pub fn anchor(&self, position: SlotPosition) -> Point {
        self.anchors
            .iter()
            .find(|(p, _)| *p == position)
            .map(|(_, pt)| *pt)
            .unwrap_or(self.anchors[0].1)
    }
}

/// Text slot with a single hard-coded anchor (text center).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedSlot {
    /// Font size in pixels.
    pub font_size: f32,
    /// Text center on the canvas.
    pub anchor: Point,
}

/// Vertical label rendered on its own surface, rotated 90 degrees counter-clockwise, then pasted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotatedLabel {
    /// Font size in pixels.
    pub font_size: f32,
    /// Unrotated label surface size; filled with the margin color.
    pub surface: Size,
    /// Top-left of the text box on the unrotated surface.
    pub text_origin: Point,
    /// Canvas position of the rotated surface's top-left corner.
    pub paste_at: (i64, i64),
}

/// Per-variant text geometry. Each variant carries only the fields it uses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayoutKind {
    /// Title and subtitle below the art, each at a user-selected position.
    Positioned {
        /// Title slot.
        title: PositionedSlot,
        /// Subtitle slot.
        subtitle: PositionedSlot,
    },
    /// Rotated title label on the right margin plus two fixed captions along the bottom.
    Banner {
        /// Rotated title label.
        title: RotatedLabel,
        /// First caption (right side).
        subtitle: FixedSlot,
        /// Second caption (left side).
        subtitle2: FixedSlot,
    },
}

/// Named layout variant: margin geometry plus text slots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutSpec {
    /// Registry key, e.g. `"layout 1"`.
    pub name: &'static str,
    /// Illustration size on the canvas; strictly smaller than the canvas.
    pub draw_area: Size,
    /// Correction applied after centering the draw area.
    pub draw_offset: (i64, i64),
    /// Text slot geometry.
    pub kind: LayoutKind,
}

impl LayoutSpec {
    /// Check that the draw area leaves a margin on every axis.
    pub fn validate(&self) -> CardsmithResult<()> {
        if self.draw_area.is_empty() {
            return Err(CardsmithError::validation(format!(
                "layout '{}' has an empty draw area",
                self.name
            )));
        }
        if !self.draw_area.fits_strictly_inside(CANVAS_SIZE) {
            return Err(CardsmithError::validation(format!(
                "layout '{}' draw area {}x{} does not leave a margin inside {}x{}",
                self.name,
                self.draw_area.width,
                self.draw_area.height,
                CANVAS_SIZE.width,
                CANVAS_SIZE.height
            )));
        }
        Ok(())
    }

    /// Short human description of the text slots.
    pub fn describe_slots(&self) -> String {
        match &self.kind {
            LayoutKind::Positioned { title, subtitle } => {
                let positions = SlotPosition::ALL.map(SlotPosition::name).join("|");
                format!(
                    "title {}px ({positions}), subtitle {}px ({positions})",
                    title.font_size, subtitle.font_size
                )
            }
            LayoutKind::Banner {
                title,
                subtitle,
                subtitle2,
            } => format!(
                "rotated title {}px, subtitle {}px, subtitle2 {}px",
                title.font_size, subtitle.font_size, subtitle2.font_size
            ),
        }
    }
}

const HALF_W: f64 = CANVAS_SIZE.width as f64 / 2.0;
const HALF_H: f64 = CANVAS_SIZE.height as f64 / 2.0;

const LAYOUT_1_DRAW: Size = Size::new(CANVAS_SIZE.width - 80, CANVAS_SIZE.height - 113);
const LAYOUT_2_DRAW: Size = Size::new(CANVAS_SIZE.width - 105, CANVAS_SIZE.height - 65);

/// Every layout known to the process, immutable for its lifetime.
pub static LAYOUTS: [LayoutSpec; 2] = [
    LayoutSpec {
        name: "layout 1",
        draw_area: LAYOUT_1_DRAW,
        draw_offset: (0, -9),
        kind: LayoutKind::Positioned {
            title: PositionedSlot {
                font_size: 27.0,
                anchors: [
                    (SlotPosition::Center, Point::new(HALF_W, HALF_H + 263.0)),
                    (SlotPosition::Left, Point::new(127.0, HALF_H + 263.0)),
                    (SlotPosition::Right, Point::new(750.0, HALF_H + 263.0)),
                ],
            },
            subtitle: PositionedSlot {
                font_size: 20.0,
                anchors: [
                    (SlotPosition::Center, Point::new(HALF_W, HALF_H + 290.0)),
                    (SlotPosition::Left, Point::new(97.0, HALF_H + 290.0)),
                    (SlotPosition::Right, Point::new(780.0, HALF_H + 290.0)),
                ],
            },
        },
    },
    LayoutSpec {
        name: "layout 2",
        draw_area: LAYOUT_2_DRAW,
        draw_offset: (0, -9),
        kind: LayoutKind::Banner {
            title: RotatedLabel {
                font_size: 31.0,
                surface: Size::new(300, 45),
                text_origin: Point::new(45.0, 1.0),
                paste_at: (830, LAYOUT_2_DRAW.height as i64 / 2 - 120),
            },
            subtitle: FixedSlot {
                font_size: 18.0,
                anchor: Point::new(728.0, 595.0),
            },
            subtitle2: FixedSlot {
                font_size: 18.0,
                anchor: Point::new(135.0, 595.0),
            },
        },
    },
];

/// All registered layouts in UI order.
pub fn layouts() -> &'static [LayoutSpec] {
    &LAYOUTS
}

/// Select a layout by name.
pub fn layout_by_name(name: &str) -> CardsmithResult<&'static LayoutSpec> {
    LAYOUTS
        .iter()
        .find(|l| l.name == name.trim())
        .ok_or_else(|| CardsmithError::UnsupportedLayout(name.to_string()))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/registry.rs"]
mod tests;
