//! Color representation and conversions
//!
//! Provides the RGBA color value used throughout the crate and conversions to:
//! - HSBA (hue/saturation/brightness/alpha) via the `palette` crate
//! - `#rrggbb` hex strings for share payloads

use palette::{FromColor, Hsva, Srgba};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{ShareCardError, Result};

/// Device-independent RGBA color with `f32` channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

/// Hue/saturation/brightness/alpha, every component in [0, 1]
///
/// Hue is a fraction of a full turn, so 0.5 is cyan. Achromatic colors
/// report a hue of 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsba {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
    pub alpha: f32,
}

impl Color {
    /// Opaque black
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

    /// Opaque white
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    /// Create a color from normalized channels
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create a color from 8-bit channels
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Quantize to 8-bit channels, rounding to nearest
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            quantize(self.red),
            quantize(self.green),
            quantize(self.blue),
            quantize(self.alpha),
        ]
    }

    /// Convert to HSBA
    pub fn to_hsba(&self) -> Hsba {
        let hsva: Hsva = Hsva::from_color(Srgba::new(self.red, self.green, self.blue, self.alpha));
        Hsba {
            hue: hsva.hue.into_positive_degrees() / 360.0,
            saturation: hsva.saturation,
            brightness: hsva.value,
            alpha: hsva.alpha,
        }
    }

    /// Convert from HSBA
    pub fn from_hsba(hsba: Hsba) -> Self {
        let hsva: Hsva = Hsva::new(
            hsba.hue * 360.0,
            hsba.saturation,
            hsba.brightness,
            hsba.alpha,
        );
        let rgba: Srgba = Srgba::from_color(hsva);
        Self::new(rgba.red, rgba.green, rgba.blue, rgba.alpha)
    }

    /// Keep hue and alpha, replace saturation and brightness
    pub fn with_saturation_brightness(&self, saturation: f32, brightness: f32) -> Self {
        let hsba = self.to_hsba();
        Self::from_hsba(Hsba {
            saturation,
            brightness,
            ..hsba
        })
    }

    /// Encode RGB as `#rrggbb`, ignoring alpha
    ///
    /// Each channel is clamped, scaled by 255 and truncated, never rounded,
    /// so 0.5 encodes as `7f`.
    pub fn to_hex(&self) -> String {
        let rgb = (truncate(self.red) as u32) << 16
            | (truncate(self.green) as u32) << 8
            | truncate(self.blue) as u32;
        format!("#{:06x}", rgb)
    }

    /// Parse `#rrggbb` or `rrggbb` into an opaque color
    ///
    /// # Errors
    ///
    /// Returns error if the string is not six hex digits
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ShareCardError::invalid_parameter("hex color", hex));
        }

        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ShareCardError::invalid_parameter("hex color", hex))?;

        Ok(Self::from_rgba8(
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
            255,
        ))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ShareCardError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// Free-function form of [`Color::to_hex`]
pub fn to_hex(color: &Color) -> String {
    color.to_hex()
}

fn truncate(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0) as u8
}

fn quantize(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-4, "{} != {}", a, b);
    }

    #[test]
    fn test_to_hex_primaries() {
        assert_eq!(Color::new(1.0, 0.0, 0.0, 1.0).to_hex(), "#ff0000");
        assert_eq!(Color::new(0.0, 0.0, 0.0, 1.0).to_hex(), "#000000");
        assert_eq!(Color::new(1.0, 1.0, 1.0, 1.0).to_hex(), "#ffffff");
        assert_eq!(to_hex(&Color::new(0.0, 0.0, 1.0, 1.0)), "#0000ff");
    }

    #[test]
    fn test_to_hex_truncates() {
        // 0.5 * 255 = 127.5
        assert_eq!(Color::new(0.5, 0.5, 0.5, 1.0).to_hex(), "#7f7f7f");
        // 0.1 * 255 = 25.5
        assert_eq!(Color::new(0.1, 0.0, 0.0, 1.0).to_hex(), "#190000");
    }

    #[test]
    fn test_to_hex_ignores_alpha() {
        let opaque = Color::new(0.2, 0.4, 0.6, 1.0);
        let clear = Color::new(0.2, 0.4, 0.6, 0.0);
        assert_eq!(opaque.to_hex(), clear.to_hex());
    }

    #[test]
    fn test_to_hex_format() {
        for step in 0..=20 {
            let v = step as f32 / 20.0;
            let hex = Color::new(v, 1.0 - v, v * 0.5, 1.0).to_hex();
            assert_eq!(hex.len(), 7);
            assert!(hex.starts_with('#'));
            assert!(hex[1..]
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }

    #[test]
    fn test_to_hex_clamps_out_of_range() {
        assert_eq!(Color::new(1.5, -0.2, 0.0, 1.0).to_hex(), "#ff0000");
    }

    #[test]
    fn test_from_hex() {
        let color = Color::from_hex("#ff8000").unwrap();
        assert_close(color.red, 1.0);
        assert_close(color.green, 128.0 / 255.0);
        assert_close(color.blue, 0.0);
        assert_close(color.alpha, 1.0);

        let without_hash: Color = "00ff00".parse().unwrap();
        assert_eq!(without_hash.to_hex(), "#00ff00");
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Color::from_hex("#ff").is_err());
        assert!(Color::from_hex("#gggggg").is_err());
        assert!(Color::from_hex("#ff00ff00").is_err());
        assert!(Color::from_hex("+fffff").is_err());
        assert!(Color::from_hex("##ff0000").is_err());
        assert!(Color::from_hex("##ff00").is_err());
    }

    #[test]
    fn test_hsba_red() {
        let hsba = Color::new(1.0, 0.0, 0.0, 1.0).to_hsba();
        assert_close(hsba.hue, 0.0);
        assert_close(hsba.saturation, 1.0);
        assert_close(hsba.brightness, 1.0);
        assert_close(hsba.alpha, 1.0);
    }

    #[test]
    fn test_hsba_blue_hue_fraction() {
        let hsba = Color::new(0.0, 0.0, 1.0, 0.5).to_hsba();
        assert_close(hsba.hue, 2.0 / 3.0);
        assert_close(hsba.alpha, 0.5);
    }

    #[test]
    fn test_hsba_gray_has_zero_hue_and_saturation() {
        let hsba = Color::from_rgba8(128, 128, 128, 255).to_hsba();
        assert_close(hsba.hue, 0.0);
        assert_close(hsba.saturation, 0.0);
        assert_close(hsba.brightness, 128.0 / 255.0);
    }

    #[test]
    fn test_hsba_back_to_rgb() {
        let color = Color::from_hsba(Hsba {
            hue: 0.0,
            saturation: 0.8,
            brightness: 0.1,
            alpha: 1.0,
        });
        assert_close(color.red, 0.1);
        assert_close(color.green, 0.02);
        assert_close(color.blue, 0.02);
        assert_eq!(color.to_hex(), "#190505");
    }

    #[test]
    fn test_with_saturation_brightness_keeps_hue_and_alpha() {
        let source = Color::new(0.2, 0.6, 0.9, 0.75);
        let adjusted = source.with_saturation_brightness(0.6, 0.2);
        let before = source.to_hsba();
        let after = adjusted.to_hsba();
        assert_close(after.hue, before.hue);
        assert_close(after.saturation, 0.6);
        assert_close(after.brightness, 0.2);
        assert_close(after.alpha, 0.75);
    }

    #[test]
    fn test_rgba8_quantization() {
        assert_eq!(Color::from_rgba8(1, 2, 3, 4).to_rgba8(), [1, 2, 3, 4]);
        assert_eq!(Color::new(0.5, 0.0, 1.0, 1.0).to_rgba8(), [128, 0, 255, 255]);
    }
}
