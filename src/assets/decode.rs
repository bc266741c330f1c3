use anyhow::Context;

use crate::foundation::error::{CardsmithError, CardsmithResult};

/// Decode encoded image bytes (PNG/JPEG/...) into opaque RGB8.
///
/// Alpha is dropped rather than composited, matching a plain paste onto the margin.
pub fn decode_image(bytes: &[u8]) -> CardsmithResult<image::RgbImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgb = dyn_img.to_rgb8();
    if rgb.width() == 0 || rgb.height() == 0 {
        return Err(CardsmithError::validation("decoded image has zero area"));
    }
    Ok(rgb)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
