//! Command-line interface for share_card
//!
//! Extracts card themes, renders gradient backgrounds and prints the share
//! intent each platform would receive.

use clap::{Parser, Subcommand};
use image::imageops::FilterType;
use image::DynamicImage;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use share_card::color::average_color;
use share_card::gradient::{compose_card, render_vertical_gradient};
use share_card::image_loader::{encode_png, load_image};
use share_card::{
    share, Color, Palette, Platform, RecordingSink, Result, ShareCardError, ShareConfig,
    ShareContent, ThemeExtractor,
};

#[derive(Parser, Debug)]
#[command(name = "share-card", version, about = "Theme and share social cards")]
struct Cli {
    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the background palette extracted from an image
    Theme {
        /// Source image
        image: PathBuf,
    },
    /// Render the gradient background, optionally with a card on top
    Gradient {
        /// Source image for the palette
        image: PathBuf,
        /// Output PNG
        #[arg(short, long)]
        out: PathBuf,
        /// Card image to place over the gradient
        #[arg(long)]
        card: Option<PathBuf>,
        /// Gradient width (ignored with --card)
        #[arg(long)]
        width: Option<u32>,
        /// Gradient height (ignored with --card)
        #[arg(long)]
        height: Option<u32>,
    },
    /// Print the intent that would be handed to a platform
    Share {
        /// Target platform
        #[arg(value_parser = parse_platform)]
        platform: Platform,
        /// Image the background colors are taken from
        #[arg(long)]
        cover: PathBuf,
        /// Pre-rendered sticker PNG; composed from the cover when omitted
        #[arg(long)]
        sticker: Option<PathBuf>,
        /// Background video
        #[arg(long)]
        video: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct ThemeReport {
    average: Color,
    primary: Color,
    secondary: Color,
    top: String,
    bottom: String,
}

fn parse_platform(s: &str) -> std::result::Result<Platform, String> {
    s.parse().map_err(|_| {
        let known: Vec<_> = Platform::ALL.iter().map(|p| p.id()).collect();
        format!("unknown platform '{}', expected one of: {}", s, known.join(", "))
    })
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        eprintln!("{}", e.user_message());
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ShareConfig::from_json_file(path)?,
        None => ShareConfig::default(),
    };
    let extractor = ThemeExtractor::with_config(config.theme);

    match cli.command {
        Command::Theme { image } => {
            let source = load_image(&image)?;
            let average = average_color(&source)?;
            let palette = extractor.palette_from_average(average);
            let (top, bottom) = palette.to_hex_pair();
            print_json(&ThemeReport {
                average,
                primary: palette.primary(),
                secondary: palette.secondary(),
                top,
                bottom,
            })
        }
        Command::Gradient {
            image,
            out,
            card,
            width,
            height,
        } => {
            let palette = palette_or_fallback(&extractor, &load_image(&image), &image, &config)?;
            let rendered = match card {
                Some(card) => compose_card(&load_image(&card)?.to_rgba8(), &palette, config.card_padding)?,
                None => render_vertical_gradient(
                    &palette,
                    width.unwrap_or(config.card_width),
                    height.unwrap_or(config.card_height),
                )?,
            };
            std::fs::write(&out, encode_png(&rendered)?)?;
            println!("Wrote {}x{} gradient to {}", rendered.width(), rendered.height(), out.display());
            Ok(())
        }
        Command::Share {
            platform,
            cover,
            sticker,
            video,
        } => {
            let source = load_image(&cover);
            let palette = palette_or_fallback(&extractor, &source, &cover, &config)?;
            let sticker_png = match sticker {
                Some(path) => std::fs::read(path)?,
                None => {
                    let card = source?
                        .resize_to_fill(config.card_width, config.card_height, FilterType::Triangle)
                        .to_rgba8();
                    encode_png(&compose_card(&card, &palette, config.card_padding)?)?
                }
            };

            let mut content = ShareContent::new(sticker_png).with_palette(palette);
            if let Some(path) = video {
                content = content.with_background_video(std::fs::read(path)?);
            }

            let mut sink = RecordingSink::new();
            share(platform, &content, &config, &mut sink)?;
            print_json(&sink.into_delivered())
        }
    }
}

/// Extract from an already loaded image, substituting the configured
/// fallback when loading or extraction failed
fn palette_or_fallback(
    extractor: &ThemeExtractor,
    source: &Result<DynamicImage>,
    path: &Path,
    config: &ShareConfig,
) -> Result<Palette> {
    let reason = match source {
        Ok(image) => match extractor.extract(image) {
            Ok(palette) => return Ok(palette),
            Err(e) => e.to_string(),
        },
        Err(e) => e.to_string(),
    };
    warn!("Using fallback palette for {}: {}", path.display(), reason);
    config.fallback_palette()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| ShareCardError::config("Failed to serialize output", e))?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_unknown_extension_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cover.dat");
        let png = encode_png(&RgbaImage::from_pixel(2, 2, Rgba([200, 40, 40, 255]))).unwrap();
        std::fs::write(&path, png).unwrap();

        let config = ShareConfig {
            fallback_color: "#102030".to_string(),
            ..ShareConfig::default()
        };
        let source = load_image(&path);
        assert!(source.is_err());

        let palette = palette_or_fallback(&ThemeExtractor::new(), &source, &path, &config).unwrap();
        assert_eq!(palette, config.fallback_palette().unwrap());
    }

    #[test]
    fn test_loaded_image_is_extracted_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cover.png");
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(2, 2, Rgba([128, 128, 128, 255])))
            .save(&path)
            .unwrap();

        let source = load_image(&path);
        let palette =
            palette_or_fallback(&ThemeExtractor::new(), &source, &path, &ShareConfig::default())
                .unwrap();
        assert_eq!(palette.to_hex_pair(), ("#190505".to_string(), "#331414".to_string()));
        assert!(source.is_ok());
    }
}
