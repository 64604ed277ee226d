//! Platform share handoff
//!
//! Builds the payload each platform expects and passes it to a
//! [`SharePayloadSink`]. Transport (pasteboard writes, URL activation, SDK
//! dialogs) belongs to the sink; this module never touches the OS.

pub mod intent;
pub mod platforms;
pub mod sink;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::color::Palette;
use crate::config::ShareConfig;
use crate::error::{Result, ShareCardError, ShareError};
use crate::image_loader::ImageFormat;

pub use intent::{PasteboardItem, PasteboardValue, Platform, ShareIntent};
pub use platforms::build_intent;
pub use sink::{RecordingSink, SharePayloadSink};

/// What is being shared
#[derive(Debug, Clone, PartialEq)]
pub struct ShareContent {
    /// Rasterized card, PNG encoded
    pub sticker_png: Vec<u8>,
    /// Optional background video bytes
    pub background_video: Option<Vec<u8>>,
    /// Background gradient colors, top first
    pub palette: Option<Palette>,
}

impl ShareContent {
    /// Content with just a sticker
    pub fn new(sticker_png: Vec<u8>) -> Self {
        Self {
            sticker_png,
            background_video: None,
            palette: None,
        }
    }

    /// Attach gradient colors
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Attach a background video
    pub fn with_background_video(mut self, video: Vec<u8>) -> Self {
        self.background_video = Some(video);
        self
    }
}

/// Build the intent for `platform` and hand it to `sink`
///
/// # Errors
///
/// Returns error if:
/// - The sticker is empty or not PNG
/// - The platform needs a video and none was given
/// - The sink reports the target app as unavailable
/// - The sink fails to deliver
pub fn share(
    platform: Platform,
    content: &ShareContent,
    config: &ShareConfig,
    sink: &mut dyn SharePayloadSink,
) -> Result<()> {
    if ImageFormat::from_bytes(&content.sticker_png) != Some(ImageFormat::Png) {
        return Err(ShareCardError::invalid_parameter(
            "sticker_png",
            format!("{} bytes, not PNG", content.sticker_png.len()),
        ));
    }

    let intent = build_intent(platform, content, config, Utc::now())?;
    debug!(
        platform = platform.id(),
        url = intent.url().unwrap_or("<sdk dialog>"),
        "built share intent"
    );

    if !sink.is_available(&intent) {
        warn!(
            platform = platform.id(),
            "{} is not installed or URL scheme is incorrect",
            platform
        );
        return Err(ShareError::AppUnavailable {
            url: intent.url().unwrap_or(platform.id()).to_string(),
        }
        .into());
    }

    sink.deliver(intent)?;
    info!(platform = platform.id(), "shared to {}", platform);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_loader::encode_png;
    use image::{Rgba, RgbaImage};

    fn sticker() -> Vec<u8> {
        encode_png(&RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255]))).unwrap()
    }

    #[test]
    fn test_share_delivers_to_sink() {
        let mut sink = RecordingSink::new();
        let content = ShareContent::new(sticker()).with_palette(Palette::fallback());

        share(
            Platform::FacebookStories,
            &content,
            &ShareConfig::default(),
            &mut sink,
        )
        .unwrap();

        assert_eq!(sink.delivered().len(), 1);
        assert_eq!(sink.delivered()[0].platform(), Platform::FacebookStories);
    }

    #[test]
    fn test_share_rejects_non_png() {
        let mut sink = RecordingSink::new();
        let content = ShareContent::new(vec![0xFF, 0xD8, 0xFF, 0xE0]);

        let err = share(
            Platform::SnapchatStories,
            &content,
            &ShareConfig::default(),
            &mut sink,
        )
        .unwrap_err();

        assert!(matches!(err, ShareCardError::InvalidParameter { .. }));
        assert!(sink.delivered().is_empty());
    }

    #[test]
    fn test_share_unavailable_app() {
        let mut sink = RecordingSink::with_unavailable([Platform::InstagramStories]);
        let content = ShareContent::new(sticker());

        let err = share(
            Platform::InstagramStories,
            &content,
            &ShareConfig::default(),
            &mut sink,
        )
        .unwrap_err();

        match err {
            ShareCardError::Share(ShareError::AppUnavailable { url }) => {
                assert!(url.starts_with("instagram-stories://share"))
            }
            other => panic!("expected AppUnavailable, got {:?}", other),
        }
        assert!(sink.delivered().is_empty());
    }

    #[test]
    fn test_share_reels_without_video() {
        let mut sink = RecordingSink::new();
        let err = share(
            Platform::InstagramReels,
            &ShareContent::new(sticker()),
            &ShareConfig::default(),
            &mut sink,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ShareCardError::Share(ShareError::MissingVideo { .. })
        ));
    }
}
