//! # Share Card
//!
//! A Rust crate for theming social share cards from their cover art.
//!
//! This library provides:
//! - Dominant-tone extraction: a whole-image average reduced to two dark
//!   gradient stops that keep the source hue
//! - `#rrggbb` encoding of those stops for platform share payloads
//! - Rendering of the top-to-bottom background gradient behind a card
//! - Per-platform share intents (pasteboard items, activation URLs, SDK
//!   dialogs) handed to a caller-supplied sink
//!
//! ## Example
//!
//! ```rust,no_run
//! use share_card::{Palette, ThemeExtractor};
//! use std::path::Path;
//!
//! let extractor = ThemeExtractor::new();
//! let palette = extractor
//!     .extract_from_path(Path::new("cover.png"))
//!     .unwrap_or_else(|_| Palette::fallback());
//! let (top, bottom) = palette.to_hex_pair();
//! println!("top: {}, bottom: {}", top, bottom);
//! ```

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod gradient;
pub mod image_loader;
pub mod share;

pub use color::{to_hex, Color, Hsba, Palette, ThemeConfig, ThemeExtractor, ThemeStop};
pub use config::{ShareConfig, SnapchatConfig};
pub use error::{ExtractionError, Result, ShareCardError, ShareError};
pub use share::{share, Platform, RecordingSink, ShareContent, ShareIntent, SharePayloadSink};

/// Extract a palette with the default dark stops
///
/// Shorthand for `ThemeExtractor::new().extract(image)`.
pub fn extract(image: &image::DynamicImage) -> std::result::Result<Palette, ExtractionError> {
    ThemeExtractor::new().extract(image)
}
