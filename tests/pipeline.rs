mod common;

use common::synthetic_image::{noisy, solid, two_blocks};
use dominant::{compute_dominant_color, BinIndex, DominantColor, Error, Settings};
use image::{ImageFormat, Rgb, RgbImage};
use tempfile::TempDir;

const RED: Rgb<u8> = Rgb([255, 0, 0]);
const BLUE: Rgb<u8> = Rgb([0, 0, 255]);

fn settings(bins: u32, blur: bool) -> Settings {
    Settings::new(bins, blur).unwrap()
}

fn save(dir: &TempDir, name: &str, image: &RgbImage, format: ImageFormat) -> std::path::PathBuf {
    let path = dir.path().join(name);
    image.save_with_format(&path, format).unwrap();
    path
}

#[test]
fn single_color_png_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = save(&dir, "solid.png", &solid(64, 48, Rgb([200, 50, 10])), ImageFormat::Png);

    for &bins in &[4, 7, 32, 128] {
        for &blur in &[true, false] {
            let color = compute_dominant_color(&path, bins, blur).unwrap();
            assert_eq!(color, Rgb([200, 50, 10]), "bins={} blur={}", bins, blur);
        }
    }
}

#[test]
fn bmp_is_supported() {
    let dir = TempDir::new().unwrap();
    let path = save(&dir, "solid.bmp", &solid(8, 8, Rgb([12, 34, 56])), ImageFormat::Bmp);

    assert_eq!(compute_dominant_color(&path, 32, false).unwrap(), Rgb([12, 34, 56]));
}

#[test]
fn jpeg_is_supported() {
    let dir = TempDir::new().unwrap();
    let path = save(&dir, "solid.jpg", &solid(32, 32, Rgb([200, 50, 10])), ImageFormat::Jpeg);

    for &blur in &[true, false] {
        let color = compute_dominant_color(&path, 16, blur).unwrap();
        for (got, want) in color.0.iter().zip(&[200u8, 50, 10]) {
            assert!(
                (i32::from(*got) - i32::from(*want)).abs() <= 8,
                "blur={} got {:?}",
                blur,
                color
            );
        }
    }
}

#[test]
fn majority_color_wins() {
    // 70 % red, 30 % blue
    let image = two_blocks(100, 40, 70, RED, BLUE);
    for &bins in &[4, 8, 16, 32, 64, 128] {
        for &blur in &[false, true] {
            let dominant = DominantColor::from_rgb(&image, &settings(bins, blur)).unwrap();
            let [r, _, b] = dominant.color.0;
            assert!(r > 200, "bins={} blur={} got {:?}", bins, blur, dominant.color);
            assert!(b < 55, "bins={} blur={} got {:?}", bins, blur, dominant.color);
        }
    }
}

#[test]
fn noisy_region_converges_to_its_mean() {
    let image = noisy(80, 80, Rgb([120, 60, 200]), 3);
    let dominant = DominantColor::from_rgb(&image, &settings(16, false)).unwrap();
    let [r, g, b] = dominant.color.0;
    assert!((117..=123).contains(&r), "{:?}", dominant.color);
    assert!((57..=63).contains(&g), "{:?}", dominant.color);
    assert!((197..=203).contains(&b), "{:?}", dominant.color);
}

#[test]
fn repeated_runs_agree() {
    let image = noisy(50, 30, Rgb([90, 180, 30]), 40);
    let first = DominantColor::from_rgb(&image, &Settings::default()).unwrap();
    for _ in 0..5 {
        assert_eq!(DominantColor::from_rgb(&image, &Settings::default()).unwrap(), first);
    }
}

#[test]
fn equal_blocks_pick_the_lowest_bin() {
    let image = two_blocks(20, 10, 10, RED, BLUE);
    let expected = settings(8, false);
    let blue_bin = BinIndex::of(&BLUE, expected.bins_per_channel);
    assert!(blue_bin < BinIndex::of(&RED, expected.bins_per_channel));

    for _ in 0..10 {
        let dominant = DominantColor::from_rgb(&image, &expected).unwrap();
        assert_eq!(dominant.bin, blue_bin);
        assert_eq!(dominant.color, BLUE);
        assert_eq!(dominant.population, 100);
    }
}

#[test]
fn out_of_range_bins_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = save(&dir, "solid.png", &solid(4, 4, RED), ImageFormat::Png);

    for &bins in &[0, 3, 129] {
        match compute_dominant_color(&path, bins, true) {
            Err(Error::InvalidBinCount { value, .. }) => assert_eq!(value, bins),
            other => panic!("expected InvalidBinCount, got {:?}", other),
        }
    }
}

#[test]
fn garbage_file_is_a_decode_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("not_an_image.png");
    std::fs::write(&path, b"definitely not a png").unwrap();

    match compute_dominant_color(&path, 32, true) {
        Err(Error::Decode(_)) => {}
        other => panic!("expected Decode, got {:?}", other),
    }
}

#[test]
fn empty_image_is_an_error() {
    match DominantColor::from_rgb(&RgbImage::new(0, 0), &Settings::default()) {
        Err(Error::EmptyImage) => {}
        other => panic!("expected EmptyImage, got {:?}", other),
    }
}
