//! Per-platform intent builders
//!
//! Each builder is a stateless function from content and settings to a
//! [`ShareIntent`]. Top/bottom colors are always the palette's primary and
//! secondary hex strings, in that order.

use chrono::{DateTime, Utc};

use crate::config::ShareConfig;
use crate::constants::share::{
    facebook, instagram, FACEBOOK_STORIES_URL, INSTAGRAM_REELS_URL, INSTAGRAM_STORIES_URL,
};
use crate::error::{Result, ShareError};

use super::intent::{PasteboardItem, PasteboardValue, Platform, ShareIntent};
use super::ShareContent;

/// Build the intent for `platform`
///
/// `now` anchors the pasteboard expiration.
pub fn build_intent(
    platform: Platform,
    content: &ShareContent,
    config: &ShareConfig,
    now: DateTime<Utc>,
) -> Result<ShareIntent> {
    match platform {
        Platform::InstagramStories => Ok(instagram_stories(content, config, now)),
        Platform::InstagramReels => instagram_reels(content, config, now),
        Platform::FacebookStories => Ok(facebook_stories(content, config, now)),
        Platform::FacebookFeed => Ok(facebook_feed(content, config)),
        Platform::SnapchatStories => Ok(snapchat_stories(content, config)),
    }
}

/// Sticker over a color gradient or a background video, in a single item
pub fn instagram_stories(
    content: &ShareContent,
    config: &ShareConfig,
    now: DateTime<Utc>,
) -> ShareIntent {
    let mut item = PasteboardItem::new();
    item.insert(
        instagram::STICKER_IMAGE.to_string(),
        PasteboardValue::Data(content.sticker_png.clone()),
    );

    if let Some(palette) = &content.palette {
        let (top, bottom) = palette.to_hex_pair();
        item.insert(
            instagram::BACKGROUND_TOP_COLOR.to_string(),
            PasteboardValue::Text(top),
        );
        item.insert(
            instagram::BACKGROUND_BOTTOM_COLOR.to_string(),
            PasteboardValue::Text(bottom),
        );
    }

    if let Some(video) = &content.background_video {
        item.insert(
            instagram::BACKGROUND_VIDEO.to_string(),
            PasteboardValue::Data(video.clone()),
        );
        item.insert(
            instagram::APP_ID.to_string(),
            PasteboardValue::Text(config.app_id.clone()),
        );
    }

    ShareIntent::Pasteboard {
        platform: Platform::InstagramStories,
        url: format!(
            "{}?source_application={}",
            INSTAGRAM_STORIES_URL,
            urlencoding::encode(&config.app_id)
        ),
        items: vec![item],
        expires_at: expiry(config, now),
    }
}

/// Background video with sticker; Reels expects one item per key
///
/// # Errors
///
/// Returns `ShareError::MissingVideo` if no background video is supplied
pub fn instagram_reels(
    content: &ShareContent,
    config: &ShareConfig,
    now: DateTime<Utc>,
) -> Result<ShareIntent> {
    let video = content
        .background_video
        .as_ref()
        .ok_or_else(|| ShareError::MissingVideo {
            platform: Platform::InstagramReels.display_name().to_string(),
        })?;

    let single = |key: &str, value: PasteboardValue| PasteboardItem::from([(key.to_string(), value)]);

    Ok(ShareIntent::Pasteboard {
        platform: Platform::InstagramReels,
        url: INSTAGRAM_REELS_URL.to_string(),
        items: vec![
            single(
                instagram::BACKGROUND_VIDEO,
                PasteboardValue::Data(video.clone()),
            ),
            single(
                instagram::STICKER_IMAGE,
                PasteboardValue::Data(content.sticker_png.clone()),
            ),
            single(
                instagram::APP_ID,
                PasteboardValue::Text(config.app_id.clone()),
            ),
        ],
        expires_at: expiry(config, now),
    })
}

/// Sticker over a color gradient; the app ID travels in the item
pub fn facebook_stories(
    content: &ShareContent,
    config: &ShareConfig,
    now: DateTime<Utc>,
) -> ShareIntent {
    let mut item = PasteboardItem::new();
    item.insert(
        facebook::STICKER_IMAGE.to_string(),
        PasteboardValue::Data(content.sticker_png.clone()),
    );
    if let Some(palette) = &content.palette {
        let (top, bottom) = palette.to_hex_pair();
        item.insert(
            facebook::BACKGROUND_TOP_COLOR.to_string(),
            PasteboardValue::Text(top),
        );
        item.insert(
            facebook::BACKGROUND_BOTTOM_COLOR.to_string(),
            PasteboardValue::Text(bottom),
        );
    }
    item.insert(
        facebook::APP_ID.to_string(),
        PasteboardValue::Text(config.app_id.clone()),
    );

    ShareIntent::Pasteboard {
        platform: Platform::FacebookStories,
        url: FACEBOOK_STORIES_URL.to_string(),
        items: vec![item],
        expires_at: expiry(config, now),
    }
}

/// Photo post through the Facebook share dialog
pub fn facebook_feed(content: &ShareContent, config: &ShareConfig) -> ShareIntent {
    ShareIntent::SdkDialog {
        platform: Platform::FacebookFeed,
        photo: content.sticker_png.clone(),
        caption: None,
        attachment_url: config.content_url.clone(),
    }
}

/// Photo snap through the Snapchat creative SDK
pub fn snapchat_stories(content: &ShareContent, config: &ShareConfig) -> ShareIntent {
    ShareIntent::SdkDialog {
        platform: Platform::SnapchatStories,
        photo: content.sticker_png.clone(),
        caption: Some(config.snapchat.caption.clone()),
        attachment_url: config.snapchat.attachment_url.clone(),
    }
}

fn expiry(config: &ShareConfig, now: DateTime<Utc>) -> DateTime<Utc> {
    chrono::Duration::from_std(config.expiration())
        .ok()
        .and_then(|lifetime| now.checked_add_signed(lifetime))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
