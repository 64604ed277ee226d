//! Share intents: the data handed to a platform
//!
//! An intent is either a pasteboard handoff (item maps plus an activation
//! URL) or a request for a vendor SDK dialog. Intents are plain values; a
//! [`SharePayloadSink`](super::SharePayloadSink) decides what to do with them.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ShareCardError;

/// Share targets the app knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    InstagramStories,
    InstagramReels,
    FacebookStories,
    FacebookFeed,
    SnapchatStories,
}

impl Platform {
    /// All platforms, in menu order
    pub const ALL: [Platform; 5] = [
        Platform::InstagramStories,
        Platform::InstagramReels,
        Platform::FacebookStories,
        Platform::FacebookFeed,
        Platform::SnapchatStories,
    ];

    /// Stable identifier used on the command line and in JSON
    pub fn id(&self) -> &'static str {
        match self {
            Platform::InstagramStories => "instagram-stories",
            Platform::InstagramReels => "instagram-reels",
            Platform::FacebookStories => "facebook-stories",
            Platform::FacebookFeed => "facebook-feed",
            Platform::SnapchatStories => "snapchat-stories",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::InstagramStories => "Instagram Stories",
            Platform::InstagramReels => "Instagram Reels",
            Platform::FacebookStories => "Facebook Stories",
            Platform::FacebookFeed => "Facebook Feed",
            Platform::SnapchatStories => "Snapchat Stories",
        }
    }

    /// Whether the platform needs a background video
    pub fn requires_video(&self) -> bool {
        matches!(self, Platform::InstagramReels)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Platform {
    type Err = ShareCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| ShareCardError::invalid_parameter("platform", s))
    }
}

/// Value stored under a pasteboard key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PasteboardValue {
    /// Binary payload (PNG sticker, video)
    Data(#[serde(serialize_with = "serialize_base64")] Vec<u8>),
    /// String payload (hex color, app ID)
    Text(String),
}

impl PasteboardValue {
    /// Text content, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PasteboardValue::Text(text) => Some(text),
            PasteboardValue::Data(_) => None,
        }
    }

    /// Binary content, if this is a data value
    pub fn as_data(&self) -> Option<&[u8]> {
        match self {
            PasteboardValue::Data(bytes) => Some(bytes),
            PasteboardValue::Text(_) => None,
        }
    }
}

/// One pasteboard item: a map of type keys to values
pub type PasteboardItem = BTreeMap<String, PasteboardValue>;

/// Everything needed to hand content to a platform
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShareIntent {
    /// Write items to the pasteboard, then open `url`
    Pasteboard {
        platform: Platform,
        url: String,
        items: Vec<PasteboardItem>,
        expires_at: DateTime<Utc>,
    },
    /// Present a vendor SDK share dialog
    SdkDialog {
        platform: Platform,
        #[serde(serialize_with = "serialize_base64")]
        photo: Vec<u8>,
        caption: Option<String>,
        attachment_url: Option<String>,
    },
}

impl ShareIntent {
    /// Target platform
    pub fn platform(&self) -> Platform {
        match self {
            ShareIntent::Pasteboard { platform, .. } | ShareIntent::SdkDialog { platform, .. } => {
                *platform
            }
        }
    }

    /// Activation URL for pasteboard handoffs
    pub fn url(&self) -> Option<&str> {
        match self {
            ShareIntent::Pasteboard { url, .. } => Some(url),
            ShareIntent::SdkDialog { .. } => None,
        }
    }

    /// Look up a key across all pasteboard items
    pub fn value(&self, key: &str) -> Option<&PasteboardValue> {
        match self {
            ShareIntent::Pasteboard { items, .. } => items.iter().find_map(|item| item.get(key)),
            ShareIntent::SdkDialog { .. } => None,
        }
    }
}

fn serialize_base64<T, S>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: AsRef<[u8]>,
    S: Serializer,
{
    serializer.serialize_str(&STANDARD.encode(bytes.as_ref()))
}
