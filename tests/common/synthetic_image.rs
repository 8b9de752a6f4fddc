use image::{Rgb, RgbImage};

/// Image filled with a single color.
pub fn solid(width: u32, height: u32, color: Rgb<u8>) -> RgbImage {
    RgbImage::from_pixel(width, height, color)
}

/// Left part `left` for the first `split` columns, `right` for the rest.
pub fn two_blocks(width: u32, height: u32, split: u32, left: Rgb<u8>, right: Rgb<u8>) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| if x < split { left } else { right })
}

/// Deterministic per-pixel jitter of up to `amplitude` around `base`.
pub fn noisy(width: u32, height: u32, base: Rgb<u8>, amplitude: u8) -> RgbImage {
    let mut state: u32 = 0x2545_f491;
    RgbImage::from_fn(width, height, |_, _| {
        let mut channel = |v: u8| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let span = u32::from(amplitude) * 2 + 1;
            let offset = (state % span) as i32 - i32::from(amplitude);
            (i32::from(v) + offset).clamp(0, 255) as u8
        };
        let [r, g, b] = base.0;
        Rgb([channel(r), channel(g), channel(b)])
    })
}
