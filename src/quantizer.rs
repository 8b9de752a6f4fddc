use std::collections::HashMap;
use std::fmt;

use image::Rgb;
use itertools::Itertools;
use log::{debug, trace};

use crate::settings::BinCount;

/// Bin of a single channel value, in `[0, B)`.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
struct Quantized(u32);

impl Quantized {
    /// `floor(v / (256 / B))`, clamped to the last bin.
    ///
    /// The bin width stays real valued, so for `B` not dividing 256 the top
    /// bins are narrower than the others.
    fn from_channel(value: u8, bins: BinCount) -> Self {
        let width = 256.0 / f64::from(bins.get());
        let bin = (f64::from(value) / width).floor() as u32;
        Self(bin.min(bins.get() - 1))
    }
}

/// Per-channel bins of one color.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ChannelBins {
    /// Red bin
    pub r: u32,
    /// Green bin
    pub g: u32,
    /// Blue bin
    pub b: u32,
}

impl ChannelBins {
    /// Quantizes every channel of `pixel` independently.
    pub fn of(pixel: &Rgb<u8>, bins: BinCount) -> Self {
        let [r, g, b] = pixel.0;
        Self {
            r: Quantized::from_channel(r, bins).0,
            g: Quantized::from_channel(g, bins).0,
            b: Quantized::from_channel(b, bins).0,
        }
    }
}

/// Scalar index of a bin in the flattened `B x B x B` lattice.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct BinIndex(pub u32);

impl BinIndex {
    /// `r * B^2 + g * B + b`
    pub fn compose(ChannelBins { r, g, b }: ChannelBins, bins: BinCount) -> Self {
        let n = bins.get();
        Self(r * n * n + g * n + b)
    }

    /// Inverse of [`BinIndex::compose`].
    pub fn decompose(self, bins: BinCount) -> ChannelBins {
        let n = bins.get();
        ChannelBins {
            r: self.0 / (n * n),
            g: (self.0 / n) % n,
            b: self.0 % n,
        }
    }

    /// Bin index of a pixel.
    pub fn of(pixel: &Rgb<u8>, bins: BinCount) -> Self {
        Self::compose(ChannelBins::of(pixel, bins), bins)
    }
}

impl fmt::Display for BinIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Occupancy of every non-empty bin.
#[derive(Debug, Clone)]
pub struct Histogram {
    bins: BinCount,
    buckets: HashMap<BinIndex, usize>,
    total: usize,
}

impl Histogram {
    /// Bins per channel this histogram was built with.
    pub fn bins_per_channel(&self) -> BinCount {
        self.bins
    }

    /// Number of pixels tallied.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of occupied bins.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// `true` if no pixel was tallied.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Pixel count of `bin`, zero when unoccupied.
    pub fn count_of(&self, bin: BinIndex) -> usize {
        self.buckets.get(&bin).copied().unwrap_or(0)
    }

    /// Occupied bins with their counts, in no particular order.
    pub fn buckets(&self) -> impl Iterator<Item = (BinIndex, usize)> + '_ {
        self.buckets.iter().map(|(&bin, &count)| (bin, count))
    }
}

/// Tallies every pixel of `pixels` into its bin.
pub fn quantize(pixels: &[Rgb<u8>], bins: BinCount) -> Histogram {
    let buckets = pixels
        .iter()
        .map(|pixel| BinIndex::of(pixel, bins))
        .counts();

    debug!(
        "quantized {} pixels into {} of {} bins",
        pixels.len(),
        buckets.len(),
        bins.cube()
    );
    trace!("histogram: {:?}", buckets);

    Histogram {
        bins,
        buckets,
        total: pixels.len(),
    }
}
