use std::path::Path;

use anyhow::Context;

use crate::{
    assets::store::PreparedAssets,
    effects::tone::ToneFilters,
    foundation::core::Rgb8,
    foundation::error::{CardsmithError, CardsmithResult},
    layout::geometry::{ZoomFactor, ZoomInput},
    layout::registry::{self, LayoutKind, LayoutSpec, SlotPosition},
    render::compose::FrontSlots,
    render::text::TextSlot,
};

/// Flat set of user choices for one render, as collected by the control surface.
///
/// Text fields left out fall back to the defaults of the selected layout variant.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_layout_name")]
    pub layout_name: String,
    pub illustration: String,
    #[serde(default)]
    pub zoom: ZoomInput,
    #[serde(default = "default_margin_color")]
    pub margin_color: Rgb8,

    #[serde(default = "default_title_text")]
    pub title_text: String,
    #[serde(default = "default_title_color")]
    pub title_color: Rgb8,
    pub title_font: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_position: Option<SlotPosition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle_color: Option<Rgb8>,
    pub subtitle_font: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle_position: Option<SlotPosition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle2_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle2_color: Option<Rgb8>,
    /// Falls back to `subtitle_font` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle2_font: Option<String>,

    #[serde(default)]
    pub invert: bool,
    #[serde(default)]
    pub solarize: bool,

    pub back_illustration: String,
}

fn default_layout_name() -> String {
    registry::LAYOUTS[0].name.to_string()
}

fn default_margin_color() -> Rgb8 {
    Rgb8::WHITE
}

fn default_title_text() -> String {
    "Cristina School".to_string()
}

fn default_title_color() -> Rgb8 {
    Rgb8::new(0xdb, 0xc7, 0x59)
}

impl RenderConfig {
    /// Minimal config with every optional field at its default.
    pub fn new(
        illustration: impl Into<String>,
        title_font: impl Into<String>,
        subtitle_font: impl Into<String>,
        back_illustration: impl Into<String>,
    ) -> Self {
        Self {
            layout_name: default_layout_name(),
            illustration: illustration.into(),
            zoom: ZoomInput::default(),
            margin_color: default_margin_color(),
            title_text: default_title_text(),
            title_color: default_title_color(),
            title_font: title_font.into(),
            title_position: None,
            subtitle_text: None,
            subtitle_color: None,
            subtitle_font: subtitle_font.into(),
            subtitle_position: None,
            subtitle2_text: None,
            subtitle2_color: None,
            subtitle2_font: None,
            invert: false,
            solarize: false,
            back_illustration: back_illustration.into(),
        }
    }

    /// Parse a JSON document.
    pub fn from_json_str(s: &str) -> CardsmithResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read and parse a JSON file.
    pub fn from_json_file(path: &Path) -> CardsmithResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read render config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// The registry entry named by `layout_name`.
    pub fn layout(&self) -> CardsmithResult<&'static LayoutSpec> {
        registry::layout_by_name(&self.layout_name)
    }

    /// Zoom validated against the supported steps.
    pub fn zoom_factor(&self) -> CardsmithResult<ZoomFactor> {
        self.zoom.resolve()
    }

    pub fn filters(&self) -> ToneFilters {
        ToneFilters {
            invert: self.invert,
            solarize: self.solarize,
        }
    }

    /// Font asset names `layout` needs, in slot order.
    pub fn font_refs(&self, layout: &LayoutSpec) -> Vec<&str> {
        let mut out = vec![self.title_font.as_str(), self.subtitle_font.as_str()];
        if let LayoutKind::Banner { .. } = layout.kind {
            out.push(self.subtitle2_font.as_deref().unwrap_or(&self.subtitle_font));
        }
        out
    }

    /// Resolve text slots for `layout` against prepared fonts.
    pub fn front_slots(
        &self,
        layout: &LayoutSpec,
        assets: &PreparedAssets,
    ) -> CardsmithResult<FrontSlots> {
        match &layout.kind {
            LayoutKind::Positioned { title, subtitle } => {
                self.warn_unused(
                    layout,
                    "subtitle2",
                    self.subtitle2_text.is_some()
                        || self.subtitle2_color.is_some()
                        || self.subtitle2_font.is_some(),
                );
                Ok(FrontSlots {
                    title: TextSlot {
                        text: self.title_text.clone(),
                        color: self.title_color,
                        font: assets.font(&self.title_font)?,
                        font_size: title.font_size,
                        anchor: title.anchor(self.title_position.unwrap_or_default()),
                    },
                    subtitles: vec![TextSlot {
                        text: self
                            .subtitle_text
                            .clone()
                            .unwrap_or_else(|| "Prasat Bakong".to_string()),
                        color: self.subtitle_color.unwrap_or(Rgb8::BLACK),
                        font: assets.font(&self.subtitle_font)?,
                        font_size: subtitle.font_size,
                        anchor: subtitle.anchor(self.subtitle_position.unwrap_or_default()),
                    }],
                })
            }
            LayoutKind::Banner {
                title,
                subtitle,
                subtitle2,
            } => {
                self.warn_unused(
                    layout,
                    "title_position/subtitle_position",
                    self.title_position.is_some() || self.subtitle_position.is_some(),
                );
                let subtitle2_font = self
                    .subtitle2_font
                    .as_deref()
                    .unwrap_or(&self.subtitle_font);
                Ok(FrontSlots {
                    title: TextSlot {
                        text: self.title_text.clone(),
                        color: self.title_color,
                        font: assets.font(&self.title_font)?,
                        font_size: title.font_size,
                        anchor: title.text_origin,
                    },
                    subtitles: vec![
                        TextSlot {
                            text: self
                                .subtitle_text
                                .clone()
                                .unwrap_or_else(|| "www.wedreambig.com".to_string()),
                            color: self.subtitle_color.unwrap_or(default_title_color()),
                            font: assets.font(&self.subtitle_font)?,
                            font_size: subtitle.font_size,
                            anchor: subtitle.anchor,
                        },
                        TextSlot {
                            text: self
                                .subtitle2_text
                                .clone()
                                .unwrap_or_else(|| "Dream Big Cambodia".to_string()),
                            color: self.subtitle2_color.unwrap_or(Rgb8::BLACK),
                            font: assets.font(subtitle2_font)?,
                            font_size: subtitle2.font_size,
                            anchor: subtitle2.anchor,
                        },
                    ],
                })
            }
        }
    }

    fn warn_unused(&self, layout: &LayoutSpec, fields: &str, set: bool) {
        if set {
            tracing::warn!(layout = layout.name, fields, "ignoring fields unused by layout");
        }
    }
}

/// Output encoding for rendered images.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageEncoding {
    #[default]
    Jpeg,
    Png,
}

impl ImageEncoding {
    pub fn extension(self) -> &'static str {
        match self {
            ImageEncoding::Jpeg => "jpg",
            ImageEncoding::Png => "png",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ImageEncoding::Jpeg => "image/jpeg",
            ImageEncoding::Png => "image/png",
        }
    }
}

/// Pipeline options that are not user choices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOpts {
    pub encoding: ImageEncoding,
    /// Render the front and back branches on the rayon pool.
    pub parallel: bool,
}

impl std::str::FromStr for ImageEncoding {
    type Err = CardsmithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" => Ok(ImageEncoding::Jpeg),
            "png" => Ok(ImageEncoding::Png),
            other => Err(CardsmithError::validation(format!(
                "unknown image encoding '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
