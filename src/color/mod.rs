//! Color model and theme extraction
//!
//! This module handles the RGBA/HSBA color model, hex encoding for share
//! payloads, and reduction of an image to a two-stop background palette.

pub mod conversion;
pub mod theme;

pub use conversion::{to_hex, Color, Hsba};
pub use theme::{average_color, Palette, ThemeConfig, ThemeExtractor, ThemeStop};
