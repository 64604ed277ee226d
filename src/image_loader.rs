//! Image loading and sticker encoding
//!
//! This module provides a single entry point for decoding images from disk or
//! memory, plus PNG encoding of rendered cards for share payloads.
//!
//! ## Supported Formats
//!
//! Everything the `image` crate decodes with its default features. Format is
//! detected from the file extension for paths and from magic bytes for
//! in-memory buffers.

use image::{DynamicImage, ImageReader, RgbaImage};
use std::io::Cursor;
use std::path::Path;

use crate::error::{Result, ShareCardError};

/// Recognized image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// JPEG image
    Jpeg,
    /// PNG image
    Png,
    /// GIF image (first frame only)
    Gif,
    /// WebP image
    WebP,
    /// TIFF image
    Tiff,
    /// BMP image
    Bmp,
    /// ICO image
    Ico,
    /// TGA image
    Tga,
    /// PNM image (PBM, PGM, PPM)
    Pnm,
    /// QOI image
    Qoi,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<ImageFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            "webp" => Some(ImageFormat::WebP),
            "tiff" | "tif" => Some(ImageFormat::Tiff),
            "bmp" => Some(ImageFormat::Bmp),
            "ico" => Some(ImageFormat::Ico),
            "tga" => Some(ImageFormat::Tga),
            "pbm" | "pgm" | "ppm" | "pnm" => Some(ImageFormat::Pnm),
            "qoi" => Some(ImageFormat::Qoi),
            _ => None,
        }
    }

    /// Detect format from leading magic bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<ImageFormat> {
        match bytes {
            [0x89, b'P', b'N', b'G', ..] => Some(ImageFormat::Png),
            [0xFF, 0xD8, 0xFF, ..] => Some(ImageFormat::Jpeg),
            [b'G', b'I', b'F', b'8', ..] => Some(ImageFormat::Gif),
            [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => {
                Some(ImageFormat::WebP)
            }
            [b'B', b'M', ..] => Some(ImageFormat::Bmp),
            [b'I', b'I', 0x2A, 0x00, ..] | [b'M', b'M', 0x00, 0x2A, ..] => Some(ImageFormat::Tiff),
            [b'q', b'o', b'i', b'f', ..] => Some(ImageFormat::Qoi),
            _ => None,
        }
    }
}

/// Load and decode an image from disk
///
/// # Errors
///
/// Returns `ShareCardError::ImageLoad` if:
/// - File cannot be opened
/// - Format is not supported
/// - Decoding fails
///
/// # Example
///
/// ```rust,no_run
/// use share_card::image_loader::load_image;
/// use std::path::Path;
///
/// let image = load_image(Path::new("cover.png"))?;
/// println!("Loaded image: {}x{}", image.width(), image.height());
/// # Ok::<(), share_card::ShareCardError>(())
/// ```
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    if ImageFormat::from_extension(path).is_none() {
        return Err(ShareCardError::ImageLoad {
            message: format!("Unknown image format for file: {}", path.display()),
            source: None,
        });
    }

    let reader = ImageReader::open(path).map_err(|e| {
        ShareCardError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;

    reader.decode().map_err(|e| {
        ShareCardError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })
}

/// Decode an image held in memory
///
/// # Errors
///
/// Returns `ShareCardError::ImageLoad` if the format is unrecognized or decoding fails
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| ShareCardError::image_load("Failed to read image bytes", e))?;

    if reader.format().is_none() {
        return Err(ShareCardError::ImageLoad {
            message: "Unrecognized image format".to_string(),
            source: None,
        });
    }

    reader
        .decode()
        .map_err(|e| ShareCardError::image_load("Failed to decode image bytes", e))
}

/// Encode an RGBA buffer as PNG bytes, the sticker format platforms accept
///
/// # Errors
///
/// Returns `ShareCardError::ImageLoad` if encoding fails
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, image::ImageFormat::Png)
        .map_err(|e| ShareCardError::image_load("Failed to encode PNG", e))?;
    Ok(bytes.into_inner())
}

/// Get list of all supported file extensions
pub fn supported_extensions() -> &'static [&'static str] {
    &[
        "jpg", "jpeg", "png", "gif", "webp", "tiff", "tif", "bmp", "ico", "tga", "pbm", "pgm",
        "ppm", "pnm", "qoi",
    ]
}

/// Check if a file extension is supported
pub fn is_supported_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    supported_extensions().contains(&ext_lower.as_str())
}
