use super::{DisplayNotification, NotificationPlatform, Permission};
use crate::platform::{self, Error};
use async_trait::async_trait;
use std::{io::Write, sync::Mutex};

pub struct TerminalNotificationPlatformConfig {
    pub permission: Permission,

    /// Whether undetermined permission is granted when requested
    pub auto_grant: bool,
}

///
/// Prints notifications to the terminal.
///
/// Fallback path writes notification as a log event instead.
///
pub struct TerminalNotificationPlatform<W> {
    auto_grant: bool,
    permission: Mutex<Permission>,
    output: Mutex<W>,
}

impl TerminalNotificationPlatform<std::io::Stdout> {
    pub fn stdout(config: TerminalNotificationPlatformConfig) -> Self {
        Self::new(config, std::io::stdout())
    }
}

impl<W: Write + Send> TerminalNotificationPlatform<W> {
    pub fn new(config: TerminalNotificationPlatformConfig, output: W) -> Self {
        Self {
            auto_grant: config.auto_grant,
            permission: Mutex::new(config.permission),
            output: Mutex::new(output),
        }
    }

    pub fn into_output(self) -> W {
        self.output
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_notification(
        output: &mut W,
        notification: &DisplayNotification,
    ) -> std::io::Result<()> {
        writeln!(output, "[{}] {}", notification.tag, notification.title)?;
        if !notification.body.is_empty() {
            writeln!(output, "  {}", notification.body)?;
        }
        if let Some(url) = &notification.data.url {
            writeln!(output, "  -> {url}")?;
        }
        output.flush()
    }
}

#[async_trait]
impl<W: Write + Send> NotificationPlatform for TerminalNotificationPlatform<W> {
    fn is_supported(&self) -> bool {
        true
    }

    fn permission(&self) -> Permission {
        match self.permission.lock() {
            Ok(permission) => *permission,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    async fn request_permission(&self) -> Result<Permission, platform::Error> {
        let mut permission = self
            .permission
            .lock()
            .map_err(|_| Error::PermissionRequestFailed("permission lock poisoned".into()))?;

        if *permission == Permission::Undetermined {
            *permission = match self.auto_grant {
                true => Permission::Granted,
                false => Permission::Denied,
            };
            tracing::info!(permission = %*permission, "permission decided");
        }

        Ok(*permission)
    }

    async fn show(&self, notification: &DisplayNotification) -> Result<(), platform::Error> {
        let mut output = self
            .output
            .lock()
            .map_err(|_| Error::DisplayFailed("terminal output lock poisoned".into()))?;

        Self::write_notification(&mut output, notification)?;

        Ok(())
    }

    async fn show_fallback(
        &self,
        notification: &DisplayNotification,
    ) -> Result<(), platform::Error> {
        tracing::info!(
            title = notification.title,
            body = notification.body,
            url = notification.data.url.as_deref(),
            "notification"
        );

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::platform::NotificationData;

    fn notification(url: Option<&str>) -> DisplayNotification {
        DisplayNotification {
            title: "Session completed".to_string(),
            body: "Fix flaky test".to_string(),
            icon: "/pwa-192x192.png".to_string(),
            badge: "/pwa-192x192.png".to_string(),
            tag: "session-notification".to_string(),
            data: NotificationData {
                url: url.map(str::to_string),
            },
        }
    }

    #[tokio::test]
    async fn show_writes_title_body_and_url() {
        let config = TerminalNotificationPlatformConfig {
            permission: Permission::Granted,
            auto_grant: false,
        };
        let platform = TerminalNotificationPlatform::new(config, Vec::new());

        platform.show(&notification(Some("/session/42"))).await.unwrap();

        let output = String::from_utf8(platform.into_output()).unwrap();
        assert_eq!(
            output,
            "[session-notification] Session completed\n  Fix flaky test\n  -> /session/42\n"
        );
    }

    #[tokio::test]
    async fn show_without_url() {
        let config = TerminalNotificationPlatformConfig {
            permission: Permission::Granted,
            auto_grant: false,
        };
        let platform = TerminalNotificationPlatform::new(config, Vec::new());

        platform.show(&notification(None)).await.unwrap();

        let output = String::from_utf8(platform.into_output()).unwrap();
        assert!(!output.contains("->"));
    }

    #[tokio::test]
    async fn request_permission_auto_grant() {
        let config = TerminalNotificationPlatformConfig {
            permission: Permission::Undetermined,
            auto_grant: true,
        };
        let platform = TerminalNotificationPlatform::new(config, Vec::new());

        let permission = platform.request_permission().await.unwrap();

        assert_eq!(permission, Permission::Granted);
        assert_eq!(platform.permission(), Permission::Granted);
    }

    #[tokio::test]
    async fn request_permission_without_auto_grant() {
        let config = TerminalNotificationPlatformConfig {
            permission: Permission::Undetermined,
            auto_grant: false,
        };
        let platform = TerminalNotificationPlatform::new(config, Vec::new());

        let permission = platform.request_permission().await.unwrap();

        assert_eq!(permission, Permission::Denied);
    }

    #[tokio::test]
    async fn request_permission_keeps_decided() {
        let config = TerminalNotificationPlatformConfig {
            permission: Permission::Denied,
            auto_grant: true,
        };
        let platform = TerminalNotificationPlatform::new(config, Vec::new());

        let permission = platform.request_permission().await.unwrap();

        assert_eq!(permission, Permission::Denied);
    }
}
