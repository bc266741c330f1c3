use crate::{
    foundation::core::{Rgb8, Size},
    foundation::math::over_opaque,
    foundation::error::{CardsmithError, CardsmithResult},
};

/// Opaque RGB8 pixel buffer owned by the render pass that allocated it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    pixels: image::RgbImage,
}

impl Canvas {
    /// Allocate a canvas filled with `background`.
    pub fn new(size: Size, background: Rgb8) -> CardsmithResult<Self> {
        if size.is_empty() {
            return Err(CardsmithError::render("canvas must have non-zero area"));
        }
        Ok(Self {
            pixels: image::RgbImage::from_pixel(size.width, size.height, background.to_pixel()),
        })
    }

    /// Wrap an existing image.
    pub fn from_image(pixels: image::RgbImage) -> Self {
        Self { pixels }
    }

    pub fn size(&self) -> Size {
        Size::new(self.pixels.width(), self.pixels.height())
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Pixel at `(x, y)`; `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb8> {
        self.pixels
            .get_pixel_checked(x, y)
            .map(|p| Rgb8::new(p.0[0], p.0[1], p.0[2]))
    }

    pub fn as_image(&self) -> &image::RgbImage {
        &self.pixels
    }

    pub(crate) fn as_image_mut(&mut self) -> &mut image::RgbImage {
        &mut self.pixels
    }

    /// Copy `src` with its top-left at `(x, y)`. Parts falling outside the canvas are clipped.
    pub fn paste(&mut self, src: &image::RgbImage, x: i64, y: i64) {
        image::imageops::replace(&mut self.pixels, src, x, y);
    }

    /// Source-over a premultiplied RGBA8 layer of identical size onto the canvas.
    pub fn blend_premul_layer(&mut self, layer: &[u8]) -> CardsmithResult<()> {
        let expected = self.pixels.as_raw().len() / 3 * 4;
        if layer.len() != expected {
            return Err(CardsmithError::render(format!(
                "layer has {} bytes, expected {expected}",
                layer.len()
            )));
        }
        for (dst, src) in self.pixels.pixels_mut().zip(layer.chunks_exact(4)) {
            dst.0 = over_opaque(dst.0, [src[0], src[1], src[2], src[3]]);
        }
        Ok(())
    }

    /// Rotate 90 degrees counter-clockwise.
    pub fn rotated_ccw(&self) -> Canvas {
        Canvas {
            pixels: image::imageops::rotate270(&self.pixels),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
