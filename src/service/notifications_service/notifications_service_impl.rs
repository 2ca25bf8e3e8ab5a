use super::{parse_event_timestamp, staleness, NotificationsService, NotificationsServiceConfig};
use crate::{
    dto::{
        input::NotificationRequest,
        output::{Evaluation, SkipReason},
    },
    error::Error,
    platform::{DisplayNotification, NotificationData, NotificationPlatform, Permission},
    repository::NotifiedEventsRepository,
};
use async_trait::async_trait;
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::OnceCell;

pub struct NotificationsServiceImpl {
    config: NotificationsServiceConfig,
    repository: Arc<dyn NotifiedEventsRepository>,
    platform: Arc<dyn NotificationPlatform>,
    permission_requested: OnceCell<Permission>,
}

impl NotificationsServiceImpl {
    pub fn new(
        config: NotificationsServiceConfig,
        repository: Arc<dyn NotifiedEventsRepository>,
        platform: Arc<dyn NotificationPlatform>,
    ) -> Self {
        Self {
            config,
            repository,
            platform,
            permission_requested: OnceCell::new(),
        }
    }

    fn now_local(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_offset(self.config.local_offset)
    }

    ///
    /// Timestamp that cannot be parsed is never stale.
    ///
    fn is_stale(&self, timestamp: &str) -> bool {
        match parse_event_timestamp(timestamp, self.config.local_offset) {
            Ok(event) => staleness::is_stale(event, self.now_local()),
            Err(err) => {
                tracing::warn!(%err, "ignoring event timestamp");
                false
            }
        }
    }

    fn find_notified(&self, dedupe_key: &str) -> Result<bool, Error> {
        Ok(self.repository.contains(dedupe_key)?)
    }

    fn insert_notified(&self, dedupe_key: &str) -> Result<bool, Error> {
        Ok(self.repository.insert(dedupe_key)?)
    }

    async fn request_permission(&self) -> Result<Permission, Error> {
        tracing::info!("requesting notification permission");
        let permission = self.platform.request_permission().await?;
        tracing::info!(permission = permission.as_ref(), "permission request finished");

        Ok(permission)
    }

    ///
    /// Current permission, the user is asked when it is undetermined.
    /// Failed request leaves permission undetermined.
    ///
    async fn resolve_permission(&self) -> Permission {
        match self.platform.permission() {
            Permission::Undetermined => match self.request_permission().await {
                Ok(permission) => permission,
                Err(err) => {
                    tracing::error!(%err, "notification permission request failed");
                    Permission::Undetermined
                }
            },
            permission => permission,
        }
    }

    fn create_display_notification(&self, request: NotificationRequest) -> DisplayNotification {
        DisplayNotification {
            title: request.title,
            body: request.body,
            icon: self.config.icon.clone(),
            badge: self.config.badge.clone(),
            tag: self.config.tag.clone(),
            data: NotificationData { url: request.url },
        }
    }

    async fn display(&self, notification: &DisplayNotification) -> Evaluation {
        let err = match self.platform.show(notification).await {
            Ok(()) => {
                tracing::info!("notification shown");
                return Evaluation::Emitted;
            }
            Err(err) => Error::from(err),
        };
        tracing::warn!(%err, "notification display failed, trying fallback");

        match self.platform.show_fallback(notification).await {
            Ok(()) => {
                tracing::info!("notification shown using fallback");
                Evaluation::Emitted
            }
            Err(err) => {
                let err = Error::from(err);
                tracing::error!(%err, "fallback notification display failed");
                Evaluation::Skipped(SkipReason::DisplayFailed)
            }
        }
    }
}

#[async_trait]
impl NotificationsService for NotificationsServiceImpl {
    ///
    /// Evaluates [NotificationRequest] and shows it when it passes all filters:
    /// 1. event did not happen before the current local day
    /// 2. dedupe key was not notified yet
    /// 3. platform is supported and permission is granted,
    ///    undetermined permission is requested once
    ///
    /// Dedupe key is stored before notification is displayed.
    ///
    #[tracing::instrument(
        name = "Notify",
        skip_all,
        fields(
            dedupe_key = request.dedupe_key.as_deref(),
            timestamp = request.timestamp.as_deref(),
        )
    )]
    async fn notify(&self, request: NotificationRequest) -> Evaluation {
        tracing::trace!(?request, "evaluating notification");

        if let Some(timestamp) = request.timestamp.as_deref() {
            if self.is_stale(timestamp) {
                tracing::debug!("skipped stale notification");
                return Evaluation::Skipped(SkipReason::Stale);
            }
        }

        if let Some(dedupe_key) = request.dedupe_key.as_deref() {
            if self.has_notified(dedupe_key) {
                tracing::debug!("skipped duplicated notification");
                return Evaluation::Skipped(SkipReason::Duplicate);
            }
        }

        if !self.platform.is_supported() {
            tracing::debug!("skipped notification, platform unsupported");
            return Evaluation::Skipped(SkipReason::PlatformUnsupported);
        }

        let permission = self.resolve_permission().await;
        if permission != Permission::Granted {
            tracing::debug!(
                permission = permission.as_ref(),
                "skipped notification, permission not granted"
            );
            return Evaluation::Skipped(SkipReason::PermissionDenied);
        }

        if let Some(dedupe_key) = request.dedupe_key.as_deref() {
            self.mark_notified(dedupe_key);
        }

        let notification = self.create_display_notification(request);
        self.display(&notification).await
    }

    fn has_notified(&self, dedupe_key: &str) -> bool {
        match self.find_notified(dedupe_key) {
            Ok(notified) => notified,
            Err(err) => {
                tracing::warn!(%err, dedupe_key, "cannot read ledger, assuming not notified");
                false
            }
        }
    }

    fn mark_notified(&self, dedupe_key: &str) {
        match self.insert_notified(dedupe_key) {
            Ok(true) => tracing::debug!(dedupe_key, "marked as notified"),
            Ok(false) => tracing::trace!(dedupe_key, "already marked as notified"),
            Err(err) => tracing::error!(%err, dedupe_key, "cannot mark as notified"),
        }
    }

    async fn ensure_permission_requested(&self) -> Permission {
        if !self.platform.is_supported() {
            tracing::debug!("notifications unsupported, permission not requested");
            return Permission::Denied;
        }

        if self.permission_requested.initialized() {
            return self.platform.permission();
        }

        *self
            .permission_requested
            .get_or_init(|| self.resolve_permission())
            .await
    }
}
