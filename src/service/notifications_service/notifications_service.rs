use crate::{
    dto::{input::NotificationRequest, output::Evaluation},
    platform::Permission,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::task::JoinHandle;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsService: Send + Sync {
    ///
    /// Shows notification unless it is stale, duplicated
    /// or the user does not allow notifications.
    ///
    /// Failures are never returned, they end as [Evaluation::Skipped].
    ///
    async fn notify(&self, request: NotificationRequest) -> Evaluation;

    ///
    /// Checks whether notification with dedupe key was already shown.
    /// Unreadable ledger means nothing was shown yet.
    ///
    fn has_notified(&self, dedupe_key: &str) -> bool;

    ///
    /// Records dedupe key so notification with it is not shown again.
    ///
    fn mark_notified(&self, dedupe_key: &str);

    ///
    /// Asks the user for permission if they were not asked yet.
    /// Only the first call can prompt the user.
    ///
    /// ### Returns
    /// current permission
    ///
    async fn ensure_permission_requested(&self) -> Permission;
}

///
/// Fire and forget variant of [NotificationsService::notify].
///
pub fn spawn_notify(
    service: Arc<dyn NotificationsService>,
    request: NotificationRequest,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let evaluation = service.notify(request).await;
        tracing::trace!(?evaluation, "detached notification evaluated");
    })
}
