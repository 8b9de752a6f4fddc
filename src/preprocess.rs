//! Noise suppression applied before binning.

use image::{imageops, RgbImage};
use log::debug;

use crate::settings::BLUR_SIGMA;

/// Gaussian-blurs `image` when `enabled`, otherwise returns a copy.
///
/// Dimensions and color depth are preserved and `image` is left untouched.
pub fn smooth(image: &RgbImage, enabled: bool) -> RgbImage {
    if !enabled {
        return image.clone();
    }
    debug!(
        "blurring {}x{} image with sigma {}",
        image.width(),
        image.height(),
        BLUR_SIGMA
    );
    imageops::blur(image, BLUR_SIGMA)
}
