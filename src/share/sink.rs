//! Delivery seam between intent building and the platform

use std::collections::HashSet;

use crate::error::ShareError;

use super::intent::{Platform, ShareIntent};

/// Receiver of share intents
///
/// Implementations own the transport: writing pasteboard items with their
/// expiration and opening the activation URL, or presenting an SDK dialog.
pub trait SharePayloadSink {
    /// Whether the target app can receive this intent
    fn is_available(&self, intent: &ShareIntent) -> bool;

    /// Hand the intent to the platform
    fn deliver(&mut self, intent: ShareIntent) -> Result<(), ShareError>;
}

/// Sink that keeps every delivered intent in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    unavailable: HashSet<Platform>,
    delivered: Vec<ShareIntent>,
}

impl RecordingSink {
    /// Sink where every platform is available
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink that reports the given platforms as not installed
    pub fn with_unavailable(platforms: impl IntoIterator<Item = Platform>) -> Self {
        Self {
            unavailable: platforms.into_iter().collect(),
            delivered: Vec::new(),
        }
    }

    /// Intents delivered so far, oldest first
    pub fn delivered(&self) -> &[ShareIntent] {
        &self.delivered
    }

    /// Take ownership of delivered intents
    pub fn into_delivered(self) -> Vec<ShareIntent> {
        self.delivered
    }
}

impl SharePayloadSink for RecordingSink {
    fn is_available(&self, intent: &ShareIntent) -> bool {
        !self.unavailable.contains(&intent.platform())
    }

    fn deliver(&mut self, intent: ShareIntent) -> Result<(), ShareError> {
        if !self.is_available(&intent) {
            return Err(ShareError::Delivery {
                message: format!("{} is unavailable", intent.platform()),
            });
        }
        self.delivered.push(intent);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dialog(platform: Platform) -> ShareIntent {
        ShareIntent::SdkDialog {
            platform,
            photo: vec![1],
            caption: None,
            attachment_url: None,
        }
    }

    #[test]
    fn test_recording_sink_records_in_order() {
        let mut sink = RecordingSink::new();
        sink.deliver(dialog(Platform::FacebookFeed)).unwrap();
        sink.deliver(dialog(Platform::SnapchatStories)).unwrap();

        let platforms: Vec<_> = sink.into_delivered().iter().map(|i| i.platform()).collect();
        assert_eq!(platforms, vec![Platform::FacebookFeed, Platform::SnapchatStories]);
    }

    #[test]
    fn test_recording_sink_refuses_unavailable() {
        let mut sink = RecordingSink::with_unavailable([Platform::SnapchatStories]);
        assert!(!sink.is_available(&dialog(Platform::SnapchatStories)));
        assert!(sink.is_available(&dialog(Platform::FacebookFeed)));
        assert!(sink.deliver(dialog(Platform::SnapchatStories)).is_err());
        assert!(sink.delivered().is_empty());
    }
}
