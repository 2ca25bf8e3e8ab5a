use super::ApplicationEnv;
use crate::{
    platform::{TerminalNotificationPlatform, TerminalNotificationPlatformConfig},
    repository::{FileKeyValueStore, NotifiedEventsRepositoryConfig, NotifiedEventsRepositoryImpl},
    service::notifications_service::{
        NotificationsService, NotificationsServiceConfig, NotificationsServiceImpl,
    },
};
use std::sync::Arc;
use time::UtcOffset;

#[derive(Clone)]
pub struct ApplicationState {
    pub notifications_service: Arc<dyn NotificationsService>,
}

///
/// Reads offset of the local timezone.
///
/// Has to be called before any other thread is spawned,
/// otherwise the offset cannot be determined soundly and UTC is used.
///
/// Offset is read only once for the whole process lifetime. When daylight
/// saving time changes while the process runs, the day boundary used by
/// staleness check is off by one hour until restart.
///
pub fn local_offset() -> UtcOffset {
    match UtcOffset::current_local_offset() {
        Ok(offset) => offset,
        Err(err) => {
            tracing::warn!(%err, "cannot determine local offset, using UTC");
            UtcOffset::UTC
        }
    }
}

pub fn create_state(env: &ApplicationEnv, local_offset: UtcOffset) -> ApplicationState {
    tracing::info!(path = %env.ledger_path.display(), "opening store");
    let store = FileKeyValueStore::new(&env.ledger_path);
    let store = Arc::new(store);

    tracing::info!("creating repositories");
    let config = NotifiedEventsRepositoryConfig {
        capacity: env.ledger_capacity,
        ..Default::default()
    };
    let notified_events_repository = NotifiedEventsRepositoryImpl::new(config, store);
    let notified_events_repository = Arc::new(notified_events_repository);

    tracing::info!("creating platform");
    let config = TerminalNotificationPlatformConfig {
        permission: env.permission,
        auto_grant: env.auto_grant,
    };
    let platform = TerminalNotificationPlatform::stdout(config);
    let platform = Arc::new(platform);

    tracing::info!("creating services");
    let config = NotificationsServiceConfig {
        icon: env.icon.clone(),
        badge: env.icon.clone(),
        tag: env.tag.clone(),
        local_offset,
    };
    let notifications_service =
        NotificationsServiceImpl::new(config, notified_events_repository, platform);
    let notifications_service = Arc::new(notifications_service);

    ApplicationState {
        notifications_service,
    }
}
