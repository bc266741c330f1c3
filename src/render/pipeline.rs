use std::path::PathBuf;

use crate::{
    assets::store::{AssetLibrary, PreparedAssets},
    config::model::{ImageEncoding, RenderConfig, RenderOpts},
    effects::tone::apply_filters,
    encode::codec::NamedImage,
    encode::sink::OutputSink,
    foundation::error::CardsmithResult,
    render::canvas::Canvas,
    render::compose::{compose_back, compose_front},
    render::tiler::{PrintSheet, tile_to_sheet},
};

/// Output stems, in the order [`RenderedPostcard::encode`] yields them.
pub const OUTPUT_STEMS: [&str; 4] = ["frontpage", "backpage", "frontpage_A4", "backpage_A4"];

/// The four images one render produces, plus the encoding requested for them.
#[derive(Clone, Debug)]
pub struct RenderedPostcard {
    pub front: Canvas,
    pub back: Canvas,
    pub front_sheet: PrintSheet,
    pub back_sheet: PrintSheet,
    pub encoding: ImageEncoding,
}

impl RenderedPostcard {
    /// Encode every image as its own named stream.
    pub fn encode(&self) -> CardsmithResult<Vec<NamedImage>> {
        let encoding = self.encoding;
        let images = [
            self.front.as_image(),
            self.back.as_image(),
            self.front_sheet.canvas().as_image(),
            self.back_sheet.canvas().as_image(),
        ];
        OUTPUT_STEMS
            .iter()
            .zip(images)
            .map(|(stem, pixels)| NamedImage::encode(stem, pixels, encoding))
            .collect()
    }

    /// Encode and hand every image to `sink`; returns the paths the sink reported.
    pub fn write_to(&self, sink: &mut dyn OutputSink) -> CardsmithResult<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for image in self.encode()? {
            if let Some(path) = sink.write(&image)? {
                paths.push(path);
            }
        }
        Ok(paths)
    }
}

/// Render both pages and their print sheets from prepared assets.
///
/// Pipeline:
/// 1. layout lookup and zoom validation
/// 2. front: [`compose_front`] then tone filters
/// 3. back: [`compose_back`]
/// 4. each page tiled 2x2 with [`tile_to_sheet`]
///
/// The front and back branches are independent; with `opts.parallel` they run on the rayon
/// pool.
#[tracing::instrument(
    skip_all,
    fields(layout = %config.layout_name, parallel = opts.parallel, encoding = ?opts.encoding)
)]
pub fn render_postcard(
    config: &RenderConfig,
    assets: &PreparedAssets,
    opts: RenderOpts,
) -> CardsmithResult<RenderedPostcard> {
    let layout = config.layout()?;
    let zoom = config.zoom_factor()?;
    let slots = config.front_slots(layout, assets)?;
    let filters = config.filters();

    let front_branch = || -> CardsmithResult<(Canvas, PrintSheet)> {
        let front = compose_front(
            &assets.illustration,
            layout,
            zoom,
            config.margin_color,
            &slots,
        )?;
        let front = apply_filters(front, filters);
        let sheet = tile_to_sheet(&front)?;
        Ok((front, sheet))
    };
    let back_branch = || -> CardsmithResult<(Canvas, PrintSheet)> {
        let back = compose_back(&assets.back_illustration)?;
        let sheet = tile_to_sheet(&back)?;
        Ok((back, sheet))
    };

    let (front, back) = if opts.parallel {
        rayon::join(front_branch, back_branch)
    } else {
        (front_branch(), back_branch())
    };
    let (front, front_sheet) = front?;
    let (back, back_sheet) = back?;

    tracing::info!(
        front_w = front.width(),
        front_h = front.height(),
        sheet_w = front_sheet.size().width,
        sheet_h = front_sheet.size().height,
        "rendered postcard"
    );
    Ok(RenderedPostcard {
        front,
        back,
        front_sheet,
        back_sheet,
        encoding: opts.encoding,
    })
}

/// Prepare assets from `library` and render.
pub fn render_from_library(
    config: &RenderConfig,
    library: &AssetLibrary,
    opts: RenderOpts,
) -> CardsmithResult<RenderedPostcard> {
    config.layout()?;
    config.zoom_factor()?;
    let assets = PreparedAssets::prepare(config, library)?;
    render_postcard(config, &assets, opts)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
