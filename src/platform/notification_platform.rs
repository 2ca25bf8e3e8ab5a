use super::{DisplayNotification, Permission};
use crate::platform;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationPlatform: Send + Sync {
    fn is_supported(&self) -> bool;

    fn permission(&self) -> Permission;

    ///
    /// Asks the user for permission to show notifications.
    ///
    /// ### Returns
    /// permission after user decision
    ///
    /// ### Errors
    /// - [platform::Error::PermissionRequestFailed]
    ///
    async fn request_permission(&self) -> Result<Permission, platform::Error>;

    async fn show(&self, notification: &DisplayNotification) -> Result<(), platform::Error>;

    ///
    /// Simpler display path used when [NotificationPlatform::show] fails.
    ///
    async fn show_fallback(
        &self,
        _notification: &DisplayNotification,
    ) -> Result<(), platform::Error> {
        Err(platform::Error::Unsupported)
    }
}
