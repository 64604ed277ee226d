//! Theme stops and platform identifiers used across the crate
//!
//! The theme stops define the look of every share card background: both
//! stops keep the source hue but pin saturation and brightness low enough
//! that white foreground text stays legible.

/// Background theme stops (saturation, brightness) in HSB space
pub mod theme {
    /// Saturation of the top (primary) gradient stop
    pub const PRIMARY_SATURATION: f32 = 0.8;

    /// Brightness of the top (primary) gradient stop
    pub const PRIMARY_BRIGHTNESS: f32 = 0.1;

    /// Saturation of the bottom (secondary) gradient stop
    pub const SECONDARY_SATURATION: f32 = 0.6;

    /// Brightness of the bottom (secondary) gradient stop
    pub const SECONDARY_BRIGHTNESS: f32 = 0.2;
}

/// Share card geometry
pub mod card {
    /// Rasterized card width in pixels
    pub const WIDTH: u32 = 300;

    /// Rasterized card height in pixels
    pub const HEIGHT: u32 = 400;

    /// Gradient margin around the card when composing a sticker
    pub const PADDING: u32 = 12;

    /// Largest padding a configuration may request
    pub const MAX_PADDING: u32 = 4096;
}

/// Inter-app share handoff
pub mod share {
    use std::time::Duration;

    /// Lifetime of pasteboard items handed to another app
    pub const PASTEBOARD_EXPIRATION: Duration = Duration::from_secs(60 * 5);

    /// Application identifier registered with the platforms
    pub const DEFAULT_APP_ID: &str = "512742294571294";

    /// Default caption for SDK dialog shares
    pub const DEFAULT_CAPTION: &str = "Check this out!";

    /// Instagram Stories activation URL (expects `source_application`)
    pub const INSTAGRAM_STORIES_URL: &str = "instagram-stories://share";

    /// Instagram Reels activation URL
    pub const INSTAGRAM_REELS_URL: &str = "instagram-reels://share";

    /// Facebook Stories activation URL
    pub const FACEBOOK_STORIES_URL: &str = "facebook-stories://share";

    /// Pasteboard keys understood by Instagram
    pub mod instagram {
        pub const STICKER_IMAGE: &str = "com.instagram.sharedSticker.stickerImage";
        pub const BACKGROUND_VIDEO: &str = "com.instagram.sharedSticker.backgroundVideo";
        pub const BACKGROUND_TOP_COLOR: &str = "com.instagram.sharedSticker.backgroundTopColor";
        pub const BACKGROUND_BOTTOM_COLOR: &str =
            "com.instagram.sharedSticker.backgroundBottomColor";
        pub const APP_ID: &str = "com.instagram.sharedSticker.appID";
    }

    /// Pasteboard keys understood by Facebook
    pub mod facebook {
        pub const STICKER_IMAGE: &str = "com.facebook.sharedSticker.stickerImage";
        pub const BACKGROUND_TOP_COLOR: &str = "com.facebook.sharedSticker.backgroundTopColor";
        pub const BACKGROUND_BOTTOM_COLOR: &str =
            "com.facebook.sharedSticker.backgroundBottomColor";
        pub const APP_ID: &str = "com.facebook.sharedSticker.appID";
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_stop_is_darker() {
        assert!(theme::PRIMARY_BRIGHTNESS < theme::SECONDARY_BRIGHTNESS);
        assert!(theme::PRIMARY_SATURATION > theme::SECONDARY_SATURATION);
    }

    #[test]
    fn test_pasteboard_expiration() {
        assert_eq!(share::PASTEBOARD_EXPIRATION.as_secs(), 300);
    }

    #[test]
    fn test_key_namespaces() {
        assert!(share::instagram::STICKER_IMAGE.starts_with("com.instagram."));
        assert!(share::facebook::STICKER_IMAGE.starts_with("com.facebook."));
    }
}
