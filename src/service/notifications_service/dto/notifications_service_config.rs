use time::UtcOffset;

pub const DEFAULT_ICON: &str = "/pwa-192x192.png";
pub const DEFAULT_TAG: &str = "session-notification";

#[derive(Debug, Clone)]
pub struct NotificationsServiceConfig {
    pub icon: String,

    /// Small icon shown in notification bar
    pub badge: String,
    pub tag: String,

    /// Offset used to find where the current day started.
    /// Fixed for service lifetime, so it does not follow DST changes
    pub local_offset: UtcOffset,
}

impl Default for NotificationsServiceConfig {
    fn default() -> Self {
        Self {
            icon: DEFAULT_ICON.to_string(),
            badge: DEFAULT_ICON.to_string(),
            tag: DEFAULT_TAG.to_string(),
            local_offset: UtcOffset::UTC,
        }
    }
}
