//! Decoding image files into 8-bit RGB pixel buffers.

use std::borrow::Cow;
use std::path::Path;

use image::{DynamicImage, Rgb, RgbImage};
use log::debug;

use crate::Error;

/// Every pixel of an image, row-major.
pub type PixelBuffer = Vec<Rgb<u8>>;

/// Decodes the image at `path` and converts it to 8-bit RGB.
pub fn open<P: AsRef<Path>>(path: P) -> Result<RgbImage, Error> {
    let path = path.as_ref();
    let image = image::open(path)?;
    debug!(
        "decoded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image.into_rgb8())
}

/// Borrows `image` when it already is 8-bit RGB, converts it otherwise, dropping alpha.
pub fn as_rgb(image: &DynamicImage) -> Cow<'_, RgbImage> {
    match image {
        DynamicImage::ImageRgb8(rgb) => Cow::Borrowed(rgb),
        other => Cow::Owned(other.to_rgb8()),
    }
}

/// Copies the pixels of `image` into a flat buffer.
pub fn flatten(image: &RgbImage) -> PixelBuffer {
    image.pixels().copied().collect()
}
