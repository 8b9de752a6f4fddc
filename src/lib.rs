//! Find the dominant color of an image
//!
//! Every pixel is binned into a `B x B x B` grid over the RGB cube, the most populated bin wins
//! (lowest bin index on ties) and the result is the exact mean color of the pixels in that bin.
//! The full image is analysed, no sampling or resizing, so results are deterministic.
//!
//! ```no_run
//! let color = dominant::compute_dominant_color("photo.jpg", 32, true)?;
//! println!("Dominant RGB: {:?}", color.0);
//! # Ok::<(), dominant::Error>(())
//! ```

#![deny(missing_docs)]

pub use dominant::{compute_dominant_color, DominantColor};
pub use error::Error;
pub use loader::PixelBuffer;
pub use quantizer::{quantize, BinIndex, ChannelBins, Histogram};
pub use refiner::{refine, refine_with_population};
pub use selector::select;
pub use settings::{BinCount, Settings};

mod dominant;
mod error;
pub mod loader;
pub mod preprocess;
mod quantizer;
mod refiner;
mod selector;
pub mod settings;
