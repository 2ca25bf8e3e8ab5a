use serde::Serialize;

/// Data attached to displayed notification, handed back on click
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NotificationData {
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayNotification {
    pub title: String,
    pub body: String,
    pub icon: String,
    pub badge: String,

    /// Notifications with the same tag replace each other
    pub tag: String,
    pub data: NotificationData,
}
