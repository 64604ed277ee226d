//! Card background rendering
//!
//! Paints the palette as a top-to-bottom two-stop gradient and composites a
//! rasterized card over it.

use image::{Rgba, RgbaImage};

use crate::color::{Color, Palette};
use crate::error::{Result, ShareCardError};

/// Render a vertical gradient from `palette.primary()` (top row) to
/// `palette.secondary()` (bottom row)
///
/// All four channels are interpolated linearly per row. A single-row image is
/// filled with the primary color.
///
/// # Errors
///
/// Returns `ShareCardError::InvalidParameter` if width or height is zero
pub fn render_vertical_gradient(palette: &Palette, width: u32, height: u32) -> Result<RgbaImage> {
    if width == 0 {
        return Err(ShareCardError::invalid_parameter("width", width));
    }
    if height == 0 {
        return Err(ShareCardError::invalid_parameter("height", height));
    }

    let top = palette.primary();
    let bottom = palette.secondary();
    let span = (height - 1).max(1) as f32;

    let mut image = RgbaImage::new(width, height);
    for (y, row) in image.enumerate_rows_mut() {
        let pixel = Rgba(lerp(top, bottom, y as f32 / span).to_rgba8());
        for (_, _, p) in row {
            *p = pixel;
        }
    }

    Ok(image)
}

/// Place `card` centered on a gradient with `padding` pixels on every side
///
/// The card is alpha-blended over the gradient (source-over).
///
/// # Errors
///
/// Returns `ShareCardError::InvalidParameter` if the resulting canvas is empty
/// or its size does not fit in `u32`
pub fn compose_card(card: &RgbaImage, palette: &Palette, padding: u32) -> Result<RgbaImage> {
    let padded = |side: u32| {
        padding
            .checked_mul(2)
            .and_then(|margin| side.checked_add(margin))
            .ok_or_else(|| ShareCardError::invalid_parameter("padding", padding))
    };
    let width = padded(card.width())?;
    let height = padded(card.height())?;
    let mut canvas = render_vertical_gradient(palette, width, height)?;

    for (x, y, src) in card.enumerate_pixels() {
        let dst = canvas.get_pixel_mut(x + padding, y + padding);
        *dst = blend_over(*src, *dst);
    }

    Ok(canvas)
}

fn lerp(a: Color, b: Color, t: f32) -> Color {
    let mix = |x: f32, y: f32| x + (y - x) * t;
    Color::new(
        mix(a.red, b.red),
        mix(a.green, b.green),
        mix(a.blue, b.blue),
        mix(a.alpha, b.alpha),
    )
}

fn blend_over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |i: usize| {
        let s = src[i] as f32 / 255.0;
        let d = dst[i] as f32 / 255.0;
        let c = (s * sa + d * da * (1.0 - sa)) / out_a;
        (c * 255.0).round().clamp(0.0, 255.0) as u8
    };

    Rgba([
        channel(0),
        channel(1),
        channel(2),
        (out_a * 255.0).round() as u8,
    ])
}
