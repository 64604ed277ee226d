//! Background theme extraction
//!
//! Reduces an image to a two-color palette for a vertical card gradient:
//! - Whole-image area average of RGBA (one aggregate color, no clustering)
//! - HSB conversion of that average
//! - Two derived stops that keep the hue but pin saturation and brightness
//!
//! Both stops come from the same average, so a multi-colored image yields
//! a single washed tone rather than two representative regions.

use image::{DynamicImage, GenericImageView};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::color::Color;
use crate::constants::theme;
use crate::error::ExtractionError;

/// Ordered pair of gradient colors: primary (top) then secondary (bottom)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    colors: [Color; 2],
}

impl Palette {
    /// Create a palette from its top and bottom colors
    pub fn new(primary: Color, secondary: Color) -> Self {
        Self {
            colors: [primary, secondary],
        }
    }

    /// Palette with the same color on both stops
    pub fn solid(color: Color) -> Self {
        Self::new(color, color)
    }

    /// All-black palette for callers that need a background when extraction fails
    ///
    /// Never returned by [`ThemeExtractor`]; callers opt into it explicitly.
    pub fn fallback() -> Self {
        Self::solid(Color::BLACK)
    }

    /// Top color
    pub fn primary(&self) -> Color {
        self.colors[0]
    }

    /// Bottom color
    pub fn secondary(&self) -> Color {
        self.colors[1]
    }

    /// Both colors, top first
    pub fn colors(&self) -> &[Color; 2] {
        &self.colors
    }

    /// Hex strings for share payloads, `(top, bottom)`
    pub fn to_hex_pair(&self) -> (String, String) {
        (self.primary().to_hex(), self.secondary().to_hex())
    }
}

/// Saturation and brightness a gradient stop is pinned to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThemeStop {
    pub saturation: f32,
    pub brightness: f32,
}

/// Stops used to derive the palette from the averaged color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub primary: ThemeStop,
    pub secondary: ThemeStop,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: ThemeStop {
                saturation: theme::PRIMARY_SATURATION,
                brightness: theme::PRIMARY_BRIGHTNESS,
            },
            secondary: ThemeStop {
                saturation: theme::SECONDARY_SATURATION,
                brightness: theme::SECONDARY_BRIGHTNESS,
            },
        }
    }
}

/// Dominant-tone extractor for card backgrounds
///
/// Stateless apart from its stops; one instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeExtractor {
    config: ThemeConfig,
}

impl ThemeExtractor {
    /// Create an extractor with the default dark stops
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom stops
    pub fn with_config(config: ThemeConfig) -> Self {
        Self { config }
    }

    /// Stops this extractor applies
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Extract a `[primary, secondary]` palette from an image
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::EmptyExtent` if the image has zero width or height
    pub fn extract(&self, image: &DynamicImage) -> Result<Palette, ExtractionError> {
        let average = average_color(image)?;
        Ok(self.palette_from_average(average))
    }

    /// Decode encoded image bytes, then extract
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::Decode` if the bytes are not a supported image
    pub fn extract_from_bytes(&self, bytes: &[u8]) -> Result<Palette, ExtractionError> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| ExtractionError::decode("Failed to decode image bytes", e))?;
        self.extract(&image)
    }

    /// Open and decode an image file, then extract
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::Decode` if the file cannot be opened or decoded
    pub fn extract_from_path(&self, path: &Path) -> Result<Palette, ExtractionError> {
        let image = image::open(path).map_err(|e| {
            ExtractionError::decode(format!("Failed to decode image: {}", path.display()), e)
        })?;
        self.extract(&image)
    }

    /// Derive both stops from one averaged color
    pub fn palette_from_average(&self, average: Color) -> Palette {
        let ThemeConfig { primary, secondary } = self.config;
        Palette::new(
            average.with_saturation_brightness(primary.saturation, primary.brightness),
            average.with_saturation_brightness(secondary.saturation, secondary.brightness),
        )
    }
}

/// Mean RGBA over every pixel of the image
///
/// Channels are accumulated as 8-bit values and the mean is rounded back to
/// 8 bits before normalizing, matching a 1x1 RGBA8 readback of an area
/// average. Images with more than 8 bits per channel are reduced first.
///
/// # Errors
///
/// Returns `ExtractionError::EmptyExtent` if the image has zero width or height
pub fn average_color(image: &DynamicImage) -> Result<Color, ExtractionError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(ExtractionError::EmptyExtent { width, height });
    }

    let rgba = image.to_rgba8();
    let mut sums = [0u64; 4];
    for pixel in rgba.pixels() {
        for (sum, channel) in sums.iter_mut().zip(pixel.0) {
            *sum += channel as u64;
        }
    }

    let count = width as u64 * height as u64;
    let mean = sums.map(|sum| ((sum + count / 2) / count) as u8);

    Ok(Color::from_rgba8(mean[0], mean[1], mean[2], mean[3]))
}
