//! Parameters of a dominant color computation.

use std::fmt;
use std::ops::RangeInclusive;

use crate::Error;

/// Bins per channel used when the caller does not pick a value.
pub const DEFAULT_BINS_PER_CHANNEL: u32 = 32;

/// Smallest accepted bins-per-channel value.
pub const MIN_BINS_PER_CHANNEL: u32 = 4;

/// Largest accepted bins-per-channel value.
pub const MAX_BINS_PER_CHANNEL: u32 = 128;

/// Standard deviation of the Gaussian pre-blur, in pixels.
pub const BLUR_SIGMA: f32 = 2.0;

/// Accepted range for bins per channel.
pub const BINS_PER_CHANNEL: RangeInclusive<u32> = MIN_BINS_PER_CHANNEL..=MAX_BINS_PER_CHANNEL;

/// Number of bins per color channel, known to be inside [`BINS_PER_CHANNEL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BinCount(u32);

impl BinCount {
    /// Validates a raw bins-per-channel value.
    pub fn new(value: u32) -> Result<Self, Error> {
        if BINS_PER_CHANNEL.contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidBinCount {
                value,
                range: BINS_PER_CHANNEL,
            })
        }
    }

    /// Bins per channel.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Total number of bins in the cube, `B^3`.
    pub fn cube(self) -> u32 {
        self.0 * self.0 * self.0
    }
}

impl Default for BinCount {
    fn default() -> Self {
        Self(DEFAULT_BINS_PER_CHANNEL)
    }
}

impl fmt::Display for BinCount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parameters of one dominant color computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Resolution of the color histogram.
    pub bins_per_channel: BinCount,
    /// Apply a Gaussian blur before binning to suppress noise.
    pub blur: bool,
}

impl Settings {
    /// Builds settings from raw parameters, rejecting an out-of-range bin count.
    pub fn new(bins_per_channel: u32, blur: bool) -> Result<Self, Error> {
        Ok(Self {
            bins_per_channel: BinCount::new(bins_per_channel)?,
            blur,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bins_per_channel: BinCount::default(),
            blur: true,
        }
    }
}
