//! Cardsmith renders printable postcards from an illustration, a back-page image and a few
//! lines of text.
//!
//! # Pipeline overview
//!
//! 1. **Prepare**: read and decode every referenced asset into [`PreparedAssets`]
//! 2. **Compose**: zoomed art on a margin canvas plus layout text ([`compose_front`]), and a
//!    resized back page ([`compose_back`])
//! 3. **Filter**: optional invert then solarize on the front page
//! 4. **Tile**: each page repeated 2x2 into a print sheet ([`tile_to_sheet`])
//! 5. **Encode**: JPEG or PNG streams handed to an [`OutputSink`]
//!
//! Compositing does no IO; every file access happens in step 1.
#![forbid(unsafe_code)]

mod assets;
mod config;
mod effects;
mod encode;
mod foundation;
mod layout;
mod render;

pub use assets::decode::decode_image;
pub use assets::store::{
    AssetKind, AssetLibrary, PreparedAssets, PreparedFont, TextBrushRgba8, TextLayoutEngine,
    normalize_asset_name,
};
pub use config::model::{ImageEncoding, RenderConfig, RenderOpts};
pub use effects::tone::{SOLARIZE_THRESHOLD, ToneFilters, apply_filters, invert, solarize};
pub use encode::codec::{NamedImage, encode_image};
pub use encode::sink::{DirSink, InMemorySink, OutputSink};
pub use foundation::core::{A4_HEIGHT, A4_WIDTH, CANVAS_SIZE, Point, Rect, Rgb8, SHEET_SIZE, Size};
pub use foundation::error::{CardsmithError, CardsmithResult};
pub use layout::geometry::{
    PixelBox, ZOOM_STEPS, ZoomFactor, ZoomInput, crop_box_px, resolve_crop, resolve_draw_box,
};
pub use layout::registry::{
    FixedSlot, LAYOUTS, LayoutKind, LayoutSpec, PositionedSlot, RotatedLabel, SlotPosition,
    layout_by_name, layouts,
};
pub use render::canvas::Canvas;
pub use render::compose::{FrontSlots, RESIZE_FILTER, compose_back, compose_front, zoom_in_place};
pub use render::pipeline::{
    OUTPUT_STEMS, RenderedPostcard, render_from_library, render_postcard,
};
pub use render::text::{TextAnchor, TextSlot, draw_text, text_origin};
pub use render::tiler::{Alignment, Direction, PrintSheet, append_images, tile_to_sheet};
