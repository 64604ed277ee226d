//! Configuration for share card rendering and platform handoff.
//!
//! Everything that used to be ambient in the app (the registered app ID, the
//! card geometry, the fallback background) lives here and is passed
//! explicitly to the functions that need it.
//!
//! # Configuration Loading
//!
//! ```no_run
//! use share_card::ShareConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ShareConfig::from_json_file(Path::new("share-card.json"))?;
//!
//! // Or use defaults
//! let config = ShareConfig::default();
//! # Ok::<(), share_card::ShareCardError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::color::{Color, Palette, ThemeConfig};
use crate::constants::{card, share};
use crate::error::{Result, ShareCardError};

/// Complete share configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Application ID registered with the target platforms
    pub app_id: String,

    /// Pasteboard item lifetime in seconds
    pub expiration_secs: u64,

    /// Link attached to shares that support one
    pub content_url: Option<String>,

    /// Rasterized card width in pixels
    pub card_width: u32,

    /// Rasterized card height in pixels
    pub card_height: u32,

    /// Gradient margin around the card
    pub card_padding: u32,

    /// Gradient stops derived from the source image
    pub theme: ThemeConfig,

    /// Background used when no palette can be extracted (`#rrggbb`)
    pub fallback_color: String,

    /// Snapchat dialog settings
    pub snapchat: SnapchatConfig,
}

/// Caption and link for SDK dialog shares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapchatConfig {
    pub caption: String,
    pub attachment_url: Option<String>,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            app_id: share::DEFAULT_APP_ID.to_string(),
            expiration_secs: share::PASTEBOARD_EXPIRATION.as_secs(),
            content_url: None,
            card_width: card::WIDTH,
            card_height: card::HEIGHT,
            card_padding: card::PADDING,
            theme: ThemeConfig::default(),
            fallback_color: Color::BLACK.to_hex(),
            snapchat: SnapchatConfig::default(),
        }
    }
}

impl Default for SnapchatConfig {
    fn default() -> Self {
        Self {
            caption: share::DEFAULT_CAPTION.to_string(),
            attachment_url: None,
        }
    }
}

impl ShareConfig {
    /// Pasteboard item lifetime
    pub fn expiration(&self) -> Duration {
        Duration::from_secs(self.expiration_secs)
    }

    /// Palette to substitute when extraction fails
    ///
    /// # Errors
    ///
    /// Returns error if `fallback_color` is not a valid hex color
    pub fn fallback_palette(&self) -> Result<Palette> {
        Ok(Palette::solid(Color::from_hex(&self.fallback_color)?))
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.app_id.is_empty() {
            return Err(ShareCardError::invalid_parameter("app_id", "<empty>"));
        }
        if self.card_width == 0 {
            return Err(ShareCardError::invalid_parameter("card_width", self.card_width));
        }
        if self.card_height == 0 {
            return Err(ShareCardError::invalid_parameter("card_height", self.card_height));
        }
        if self.card_padding > card::MAX_PADDING {
            return Err(ShareCardError::invalid_parameter("card_padding", self.card_padding));
        }
        let stops = [self.theme.primary, self.theme.secondary];
        for stop in stops {
            for value in [stop.saturation, stop.brightness] {
                if !(0.0..=1.0).contains(&value) {
                    return Err(ShareCardError::invalid_parameter("theme stop", value));
                }
            }
        }
        Color::from_hex(&self.fallback_color)?;
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            ShareCardError::config(format!("Invalid configuration: {}", path.display()), e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ShareCardError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShareConfig::default();
        assert_eq!(config.app_id, "512742294571294");
        assert_eq!(config.expiration(), Duration::from_secs(300));
        assert_eq!((config.card_width, config.card_height), (300, 400));
        assert_eq!(config.fallback_color, "#000000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_fallback_palette() {
        let config = ShareConfig {
            fallback_color: "#102030".to_string(),
            ..ShareConfig::default()
        };
        let palette = config.fallback_palette().unwrap();
        assert_eq!(palette.to_hex_pair(), ("#102030".to_string(), "#102030".to_string()));
        assert_eq!(ShareConfig::default().fallback_palette().unwrap(), Palette::fallback());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ShareConfig =
            serde_json::from_str(r#"{ "app_id": "42", "snapchat": { "caption": "hi" } }"#).unwrap();
        assert_eq!(config.app_id, "42");
        assert_eq!(config.expiration_secs, 300);
        assert_eq!(config.snapchat.caption, "hi");
        assert_eq!(config.theme, ThemeConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad_stop = {
            let mut config = ShareConfig::default();
            config.theme.primary.brightness = 1.5;
            config
        };
        assert!(bad_stop.validate().is_err());

        let bad_color = ShareConfig {
            fallback_color: "black".to_string(),
            ..ShareConfig::default()
        };
        assert!(bad_color.validate().is_err());

        let no_app = ShareConfig {
            app_id: String::new(),
            ..ShareConfig::default()
        };
        assert!(no_app.validate().is_err());

        let huge_padding = ShareConfig {
            card_padding: u32::MAX,
            ..ShareConfig::default()
        };
        assert!(huge_padding.validate().is_err());

        let doubled_hash = ShareConfig {
            fallback_color: "##000000".to_string(),
            ..ShareConfig::default()
        };
        assert!(doubled_hash.validate().is_err());
    }

    #[test]
    fn test_max_padding_accepted() {
        let config = ShareConfig {
            card_padding: card::MAX_PADDING,
            ..ShareConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("share-card.json");

        let config = ShareConfig {
            content_url: Some("https://example.com/app".to_string()),
            card_padding: 0,
            ..ShareConfig::default()
        };
        config.to_json_file(&path).unwrap();

        let loaded = ShareConfig::from_json_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = ShareConfig::from_json_file(&path).unwrap_err();
        assert!(matches!(err, ShareCardError::Config { .. }));
    }
}
