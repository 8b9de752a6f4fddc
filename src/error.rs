use std::ops::RangeInclusive;

use thiserror::Error;

/// Errors when computing a dominant color
#[derive(Debug, Error)]
pub enum Error {
    /// The file could not be read or decoded as an image
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    /// Bins per channel was out of bounds
    #[error("bins per channel must be in {}..={}, got {value}", .range.start(), .range.end())]
    InvalidBinCount {
        /// Rejected value
        value: u32,
        /// Accepted range
        range: RangeInclusive<u32>,
    },
    /// The image has no pixels
    #[error("image contains no pixels")]
    EmptyImage,
}
