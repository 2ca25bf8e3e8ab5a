use serde::Deserialize;

///
/// Candidate notification, constructed fresh for every evaluation
///
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NotificationRequest {
    pub title: String,

    #[serde(default)]
    pub body: String,

    /// Opened when user activates the notification
    #[serde(default)]
    pub url: Option<String>,

    /// Request without key is never deduplicated
    #[serde(default)]
    pub dedupe_key: Option<String>,

    /// ISO-8601 / RFC 3339 time of the event that caused notification
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl NotificationRequest {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            url: None,
            dedupe_key: None,
            timestamp: None,
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn dedupe_key(mut self, dedupe_key: impl Into<String>) -> Self {
        self.dedupe_key = Some(dedupe_key.into());
        self
    }

    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }
}
