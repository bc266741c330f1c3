use crate::foundation::error::{CardsmithError, CardsmithResult};

pub use kurbo::{Point, Rect};

/// Full print sheet width in pixels (A4 landscape at 300 dpi).
pub const A4_WIDTH: u32 = 3508;
/// Full print sheet height in pixels (A4 landscape at 300 dpi).
pub const A4_HEIGHT: u32 = 2480;

/// Quarter-sheet canvas every postcard side is rendered onto.
pub const CANVAS_SIZE: Size = Size::new(A4_WIDTH / 4, A4_HEIGHT / 4);
/// Print sheet assembled from a 2x2 tile of canvases.
pub const SHEET_SIZE: Size = Size::new(CANVAS_SIZE.width * 2, CANVAS_SIZE.height * 2);

/// Integer pixel dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// True when both axes are strictly smaller than `other`.
    pub fn fits_strictly_inside(self, other: Size) -> bool {
        self.width < other.width && self.height < other.height
    }
}

/// Opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (case-insensitive, `#` optional).
    pub fn from_hex(s: &str) -> CardsmithResult<Self> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(CardsmithError::validation(format!(
                "color \"{s}\" must be #RRGGBB"
            )));
        }

        let byte = |pair: &str| {
            u8::from_str_radix(pair, 16)
                .map_err(|_| CardsmithError::validation(format!("invalid hex byte \"{pair}\"")))
        };
        Ok(Self {
            r: byte(&digits[0..2])?,
            g: byte(&digits[2..4])?,
            b: byte(&digits[4..6])?,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_pixel(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }
}

impl std::str::FromStr for Rgb8 {
    type Err = CardsmithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl serde::Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
