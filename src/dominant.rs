use std::fmt;
use std::path::Path;

use image::{DynamicImage, Rgb, RgbImage};

#[cfg(feature = "print-truecolor")]
use termion::color;

use crate::loader;
use crate::preprocess::smooth;
use crate::quantizer::{quantize, BinIndex};
use crate::refiner::refine_with_population;
use crate::selector::select;
use crate::settings::Settings;
use crate::Error;

/// Dominant color
///
/// Mean color of the most populated histogram bin, with the bin and the number of pixels in it.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub struct DominantColor {
    /// Mean color of the dominant bin
    pub color: Rgb<u8>,
    /// Dominant bin
    pub bin: BinIndex,
    /// Pixels in the dominant bin
    pub population: usize,
}

impl DominantColor {
    /// Find the dominant color of a decoded image
    pub fn new(image: &DynamicImage, settings: &Settings) -> Result<DominantColor, Error> {
        Self::from_rgb(&loader::as_rgb(image), settings)
    }

    /// Find the dominant color of an image file
    pub fn open<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<DominantColor, Error> {
        Self::from_rgb(&loader::open(path)?, settings)
    }

    /// Find the dominant color of an 8-bit RGB image
    pub fn from_rgb(image: &RgbImage, settings: &Settings) -> Result<DominantColor, Error> {
        if image.width() == 0 || image.height() == 0 {
            return Err(Error::EmptyImage);
        }
        let bins = settings.bins_per_channel;

        let pixels = loader::flatten(&smooth(image, settings.blur));
        let histogram = quantize(&pixels, bins);
        let bin = select(&histogram)?;
        let (color, population) =
            refine_with_population(&pixels, bin, bins).ok_or(Error::EmptyImage)?;

        Ok(DominantColor {
            color,
            bin,
            population,
        })
    }

    /// Color as `(r, g, b)`
    pub fn rgb(&self) -> (u8, u8, u8) {
        let [r, g, b] = self.color.0;
        (r, g, b)
    }

    /// Color as `#RRGGBB`
    pub fn hex(&self) -> String {
        let [r, g, b] = self.color.0;
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }
}

impl fmt::Display for DominantColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [r, g, b] = self.color.0;
        write!(f, "{} ({}, {}, {}), {} pixels", self.hex(), r, g, b, self.population)?;
        #[cfg(feature = "print-truecolor")]
        write!(f, " {}███{}", color::Fg(color::Rgb(r, g, b)), color::Fg(color::Reset))?;
        Ok(())
    }
}

/// Find the dominant color of the image at `path`.
///
/// `bins_per_channel` must be in `4..=128`; the usual choice is 32, with
/// 24-32 suiting photos and 32-64 suiting logos.
pub fn compute_dominant_color<P: AsRef<Path>>(
    path: P,
    bins_per_channel: u32,
    apply_blur: bool,
) -> Result<Rgb<u8>, Error> {
    let settings = Settings::new(bins_per_channel, apply_blur)?;
    DominantColor::open(path, &settings).map(|dominant| dominant.color)
}
