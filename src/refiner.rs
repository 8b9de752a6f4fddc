use image::Rgb;
use log::debug;

use crate::quantizer::{BinIndex, ChannelBins};
use crate::settings::BinCount;

#[derive(Debug, Copy, Clone, Default)]
struct Sum {
    r: u64,
    g: u64,
    b: u64,
    population: usize,
}

impl Sum {
    fn add(&mut self, pixel: &Rgb<u8>) {
        let [r, g, b] = pixel.0;
        self.r += u64::from(r);
        self.g += u64::from(g);
        self.b += u64::from(b);
        self.population += 1;
    }

    /// Per-channel mean, truncated toward zero.
    fn mean(&self) -> Option<Rgb<u8>> {
        if self.population == 0 {
            return None;
        }
        let n = self.population as u64;
        // a mean of u8 values never exceeds 255
        Some(Rgb([
            (self.r / n) as u8,
            (self.g / n) as u8,
            (self.b / n) as u8,
        ]))
    }
}

/// Mean color of the pixels in `bin` together with their count.
///
/// Returns `None` if no pixel of `pixels` falls into `bin`.
pub fn refine_with_population(
    pixels: &[Rgb<u8>],
    bin: BinIndex,
    bins: BinCount,
) -> Option<(Rgb<u8>, usize)> {
    let target = bin.decompose(bins);
    let sum = pixels
        .iter()
        .filter(|pixel| ChannelBins::of(pixel, bins) == target)
        .fold(Sum::default(), |mut acc, pixel| {
            acc.add(pixel);
            acc
        });

    let color = sum.mean()?;
    debug!(
        "bin {} refined to {:?} over {} pixels",
        bin, color.0, sum.population
    );
    Some((color, sum.population))
}

/// Mean color of the pixels in `bin`.
///
/// `bin` is expected to come from [`crate::select`] over the same pixels, so
/// it is never empty; an empty bin yields `None`.
pub fn refine(pixels: &[Rgb<u8>], bin: BinIndex, bins: BinCount) -> Option<Rgb<u8>> {
    refine_with_population(pixels, bin, bins).map(|(color, _)| color)
}
