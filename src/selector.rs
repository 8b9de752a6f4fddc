use std::cmp::Reverse;

use log::debug;

use crate::quantizer::{BinIndex, Histogram};
use crate::Error;

/// Picks the most populated bin.
///
/// Ties are broken in favour of the lowest [`BinIndex`], so the choice does
/// not depend on the iteration order of the histogram.
pub fn select(histogram: &Histogram) -> Result<BinIndex, Error> {
    let (bin, count) = histogram
        .buckets()
        .max_by_key(|&(bin, count)| (count, Reverse(bin)))
        .ok_or(Error::EmptyImage)?;

    debug!(
        "dominant bin {} holds {} of {} pixels",
        bin,
        count,
        histogram.total()
    );
    Ok(bin)
}
