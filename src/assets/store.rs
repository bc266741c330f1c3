use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;

use crate::{
    assets::decode as assets_decode,
    config::model::RenderConfig,
    foundation::error::{CardsmithError, CardsmithResult},
    layout::registry,
};

/// Fixed logical locations assets are addressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetKind {
    /// Front-page artwork.
    Illustration,
    /// Outline fonts used for text slots.
    Font,
    /// Back-page artwork.
    BackPage,
}

impl AssetKind {
    /// All kinds in listing order.
    pub const ALL: [AssetKind; 3] = [
        AssetKind::Illustration,
        AssetKind::Font,
        AssetKind::BackPage,
    ];

    /// Directory name under the library root.
    pub fn dir_name(self) -> &'static str {
        match self {
            AssetKind::Illustration => "illustrations",
            AssetKind::Font => "fonts",
            AssetKind::BackPage => "back-pages",
        }
    }

    /// File extensions accepted on import (lowercase).
    pub fn accepted_extensions(self) -> &'static [&'static str] {
        match self {
            AssetKind::Illustration | AssetKind::BackPage => &["png", "jpg", "jpeg"],
            AssetKind::Font => &["ttf", "otf", "ttc"],
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Directory-backed asset library with one sub-directory per [`AssetKind`].
#[derive(Clone, Debug)]
pub struct AssetLibrary {
    root: PathBuf,
}

impl AssetLibrary {
    /// Open a library rooted at `root`. The directory does not need to exist yet.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Return the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Sorted file names available for `kind`. A missing directory lists as empty.
    pub fn list(&self, kind: AssetKind) -> CardsmithResult<Vec<String>> {
        let dir = self.root.join(kind.dir_name());
        let rd = match std::fs::read_dir(&dir) {
            Ok(rd) => rd,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("list asset dir '{}'", dir.display()))
                    .into());
            }
        };

        let mut names = Vec::new();
        for entry in rd.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// True when `name` exists under `kind`.
    pub fn contains(&self, kind: AssetKind, name: &str) -> bool {
        normalize_asset_name(name)
            .map(|n| self.path_for(kind, &n).is_file())
            .unwrap_or(false)
    }

    /// Read raw asset bytes, or [`CardsmithError::AssetNotFound`].
    pub fn read(&self, kind: AssetKind, name: &str) -> CardsmithResult<Vec<u8>> {
        let name = normalize_asset_name(name)?;
        let path = self.path_for(kind, &name);
        if !path.is_file() {
            return Err(CardsmithError::asset_not_found(kind, name));
        }
        std::fs::read(&path)
            .with_context(|| format!("read asset bytes from '{}'", path.display()))
            .map_err(CardsmithError::from)
    }

    /// Store an uploaded asset, replacing any existing file of the same name.
    pub fn import(&self, kind: AssetKind, name: &str, bytes: &[u8]) -> CardsmithResult<PathBuf> {
        let name = normalize_asset_name(name)?;
        let ext = Path::new(&name)
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if !kind.accepted_extensions().contains(&ext.as_str()) {
            return Err(CardsmithError::validation(format!(
                "{kind} accept only {:?}, got '{name}'",
                kind.accepted_extensions()
            )));
        }

        let dir = self.root.join(kind.dir_name());
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("create asset dir '{}'", dir.display()))?;
        let replaced = self.contains(kind, &name);
        let path = dir.join(&name);
        std::fs::write(&path, bytes)
            .with_context(|| format!("write asset '{}'", path.display()))?;
        tracing::info!(
            kind = %kind,
            name = %name,
            bytes = bytes.len(),
            replaced,
            "imported asset"
        );
        Ok(path)
    }

    fn path_for(&self, kind: AssetKind, name: &str) -> PathBuf {
        self.root.join(kind.dir_name()).join(name)
    }
}

/// Validate an asset name: a bare file name without separators or dot segments.
pub fn normalize_asset_name(name: &str) -> CardsmithResult<String> {
    let s = name.trim();
    if s.is_empty() {
        return Err(CardsmithError::validation("asset name must be non-empty"));
    }
    if s.contains('/') || s.contains('\\') {
        return Err(CardsmithError::validation(format!(
            "asset name '{s}' must not contain path separators"
        )));
    }
    if s == "." || s == ".." {
        return Err(CardsmithError::validation(
            "asset name must contain a file name",
        ));
    }
    Ok(s.to_string())
}

/// Outline font bytes plus the family name detected from them.
#[derive(Clone)]
pub struct PreparedFont {
    /// Asset name inside the font directory.
    pub name: String,
    /// Original font bytes used to build glyph outlines.
    pub bytes: Arc<Vec<u8>>,
    /// Primary detected family name from font data.
    pub family: String,
}

impl std::fmt::Debug for PreparedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreparedFont")
            .field("name", &self.name)
            .field("bytes_len", &self.bytes.len())
            .field("family", &self.family)
            .finish()
    }
}

/// Everything one render needs, decoded up front so compositing stays IO-free.
#[derive(Clone, Debug)]
pub struct PreparedAssets {
    /// Decoded front illustration.
    pub illustration: image::RgbImage,
    /// Decoded back-page image.
    pub back_illustration: image::RgbImage,
    fonts: HashMap<String, Arc<PreparedFont>>,
}

impl PreparedAssets {
    /// Read and decode every asset `config` references from `library`.
    ///
    /// Missing files fail with [`CardsmithError::AssetNotFound`]; nothing is substituted.
    #[tracing::instrument(skip_all, fields(layout = %config.layout_name))]
    pub fn prepare(config: &RenderConfig, library: &AssetLibrary) -> CardsmithResult<Self> {
        let layout = registry::layout_by_name(&config.layout_name)?;

        let bytes = library.read(AssetKind::Illustration, &config.illustration)?;
        let illustration = assets_decode::decode_image(&bytes)
            .map_err(|e| annotate(e, AssetKind::Illustration, &config.illustration))?;

        let bytes = library.read(AssetKind::BackPage, &config.back_illustration)?;
        let back_illustration = assets_decode::decode_image(&bytes)
            .map_err(|e| annotate(e, AssetKind::BackPage, &config.back_illustration))?;

        let mut engine = TextLayoutEngine::new();
        let mut fonts = HashMap::new();
        for name in config.font_refs(layout) {
            if fonts.contains_key(name) {
                continue;
            }
            let bytes = library.read(AssetKind::Font, name)?;
            let family = engine.register_font(&bytes)?;
            tracing::debug!(font = %name, family = %family, "prepared font");
            fonts.insert(
                name.to_string(),
                Arc::new(PreparedFont {
                    name: name.to_string(),
                    bytes: Arc::new(bytes),
                    family,
                }),
            );
        }

        Ok(Self {
            illustration,
            back_illustration,
            fonts,
        })
    }

    /// Assemble prepared assets from already decoded parts.
    pub fn from_parts(
        illustration: image::RgbImage,
        back_illustration: image::RgbImage,
        fonts: impl IntoIterator<Item = PreparedFont>,
    ) -> Self {
        Self {
            illustration,
            back_illustration,
            fonts: fonts
                .into_iter()
                .map(|f| (f.name.clone(), Arc::new(f)))
                .collect(),
        }
    }

    /// Lookup a prepared font by asset name.
    pub fn font(&self, name: &str) -> CardsmithResult<Arc<PreparedFont>> {
        self.fonts
            .get(name)
            .cloned()
            .ok_or_else(|| CardsmithError::asset_not_found(AssetKind::Font, name))
    }

    /// Prepared fonts sorted by name.
    pub fn fonts(&self) -> Vec<Arc<PreparedFont>> {
        let mut out: Vec<_> = self.fonts.values().cloned().collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }
}

fn annotate(err: CardsmithError, kind: AssetKind, name: &str) -> CardsmithError {
    match err {
        CardsmithError::Other(e) => CardsmithError::Other(e.context(format!("{kind} '{name}'"))),
        CardsmithError::Validation(msg) => {
            CardsmithError::validation(format!("{kind} '{name}': {msg}"))
        }
        other => other,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

/// Stateful helper for building Parley text layouts from raw font bytes.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Register font bytes and return the primary family name they declare.
    pub fn register_font(&mut self, font_bytes: &[u8]) -> CardsmithResult<String> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            CardsmithError::validation("no font families registered from font bytes")
        })?;

        Ok(self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| CardsmithError::validation("registered font family has no name"))?
            .to_string())
    }

    /// Shape one unwrapped line of text with exactly the face in `font_bytes`.
    ///
    /// The font collection is rebuilt per call; faces registered earlier (including other faces
    /// of the same family) are not candidates.
    pub fn layout_line(
        &mut self,
        text: &str,
        font_bytes: &[u8],
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> CardsmithResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(CardsmithError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        self.font_ctx = parley::FontContext::default();
        let family_name = self.register_font(font_bytes)?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
