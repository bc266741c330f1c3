use std::io::Cursor;

use anyhow::Context;

use crate::{config::model::ImageEncoding, foundation::error::CardsmithResult};

/// Encode `pixels` in `encoding`. JPEG uses the `image` crate's default quality.
pub fn encode_image(
    pixels: &image::RgbImage,
    encoding: ImageEncoding,
) -> CardsmithResult<Vec<u8>> {
    let format = match encoding {
        ImageEncoding::Jpeg => image::ImageFormat::Jpeg,
        ImageEncoding::Png => image::ImageFormat::Png,
    };
    let mut out = Cursor::new(Vec::new());
    pixels.write_to(&mut out, format).with_context(|| {
        format!(
            "encode {}x{} image as {encoding:?}",
            pixels.width(),
            pixels.height()
        )
    })?;
    Ok(out.into_inner())
}

/// One encoded output stream, named without directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedImage {
    /// File name including extension, e.g. `frontpage_A4.jpg`.
    pub name: String,
    pub encoding: ImageEncoding,
    pub bytes: Vec<u8>,
}

impl NamedImage {
    /// Encode `pixels` and name the stream `{stem}.{ext}`.
    pub fn encode(
        stem: &str,
        pixels: &image::RgbImage,
        encoding: ImageEncoding,
    ) -> CardsmithResult<Self> {
        Ok(Self {
            name: format!("{stem}.{}", encoding.extension()),
            encoding,
            bytes: encode_image(pixels, encoding)?,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/codec.rs"]
mod tests;
