use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;

use dominant::settings::{DEFAULT_BINS_PER_CHANNEL, MAX_BINS_PER_CHANNEL, MIN_BINS_PER_CHANNEL};
use dominant::{DominantColor, Settings};

/// Find the most dominant RGB color in an image using histogram binning.
///
/// The full-resolution image is analysed, no cropping or resizing is applied and results are
/// deterministic.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// One or more image paths (PNG, JPEG or BMP)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Color resolution: 24-32 for photos, 32-64 for logos
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_BINS_PER_CHANNEL,
        value_parser = clap::value_parser!(u32).range(i64::from(MIN_BINS_PER_CHANNEL)..=i64::from(MAX_BINS_PER_CHANNEL)),
    )]
    bins: u32,

    /// Skip the Gaussian blur that reduces noise and JPEG artifacts
    #[arg(long)]
    no_blur: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Rgb)]
    format: Format,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// `Dominant RGB: (r, g, b)`
    Rgb,
    /// `#RRGGBB`
    Hex,
    /// Hex, RGB and pixel count of the dominant bin
    Summary,
    /// One JSON object per image
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    path: &'a str,
    rgb: [u8; 3],
    hex: String,
    bin: u32,
    population: usize,
}

fn render(format: Format, path: &str, dominant: &DominantColor) -> Result<String> {
    Ok(match format {
        Format::Rgb => {
            let (r, g, b) = dominant.rgb();
            format!("Dominant RGB: ({}, {}, {})", r, g, b)
        }
        Format::Hex => dominant.hex(),
        Format::Summary => dominant.to_string(),
        Format::Json => serde_json::to_string(&Report {
            path,
            rgb: dominant.color.0,
            hex: dominant.hex(),
            bin: dominant.bin.0,
            population: dominant.population,
        })?,
    })
}

/// One output line; plain formats get a `path: ` prefix when several images are analysed.
fn line(format: Format, path: &str, dominant: &DominantColor, prefix: bool) -> Result<String> {
    let rendered = render(format, path, dominant)?;
    Ok(match format {
        Format::Json => rendered,
        _ if prefix => format!("{}: {}", path, rendered),
        _ => rendered,
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let settings = Settings::new(args.bins, !args.no_blur)?;
    log::info!("analysing {} image(s) with {:?}", args.inputs.len(), settings);

    let prefix = args.inputs.len() > 1;
    for input in &args.inputs {
        let dominant = DominantColor::open(input, &settings)
            .with_context(|| format!("could not analyse {}", input.display()))?;
        let path = input.to_string_lossy();
        println!("{}", line(args.format, &path, &dominant, prefix)?);
    }

    Ok(())
}
