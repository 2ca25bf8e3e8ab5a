use async_trait::async_trait;
use session_notifier::{
    platform::{self, DisplayNotification, NotificationPlatform, Permission},
    repository::{
        KeyValueStore, NotifiedEventsRepositoryConfig, NotifiedEventsRepositoryImpl,
    },
    service::notifications_service::{NotificationsServiceConfig, NotificationsServiceImpl},
};
use std::sync::{Arc, Mutex};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

///
/// Platform that remembers every notification it was asked to show
///
pub struct RecordingPlatform {
    permission: Mutex<Permission>,
    on_request: Permission,
    fail_show: bool,
    shown: Mutex<Vec<DisplayNotification>>,
    permission_requests: Mutex<usize>,
}

impl RecordingPlatform {
    pub fn new(permission: Permission) -> Self {
        Self::with_request_result(permission, permission)
    }

    pub fn with_request_result(permission: Permission, on_request: Permission) -> Self {
        Self {
            permission: Mutex::new(permission),
            on_request,
            fail_show: false,
            shown: Mutex::new(Vec::new()),
            permission_requests: Mutex::new(0),
        }
    }

    pub fn failing(permission: Permission) -> Self {
        Self {
            fail_show: true,
            ..Self::new(permission)
        }
    }

    pub fn shown(&self) -> Vec<DisplayNotification> {
        self.shown.lock().unwrap().clone()
    }

    pub fn permission_requests(&self) -> usize {
        *self.permission_requests.lock().unwrap()
    }
}

#[async_trait]
impl NotificationPlatform for RecordingPlatform {
    fn is_supported(&self) -> bool {
        true
    }

    fn permission(&self) -> Permission {
        *self.permission.lock().unwrap()
    }

    async fn request_permission(&self) -> Result<Permission, platform::Error> {
        *self.permission_requests.lock().unwrap() += 1;
        let mut permission = self.permission.lock().unwrap();
        *permission = self.on_request;

        Ok(*permission)
    }

    async fn show(&self, notification: &DisplayNotification) -> Result<(), platform::Error> {
        if self.fail_show {
            return Err(platform::Error::DisplayFailed("illegal constructor".into()));
        }

        self.shown.lock().unwrap().push(notification.clone());

        Ok(())
    }
}

pub fn create_service(
    store: Arc<dyn KeyValueStore>,
    platform: Arc<RecordingPlatform>,
) -> NotificationsServiceImpl {
    create_service_with_capacity(store, platform, 500)
}

pub fn create_service_with_capacity(
    store: Arc<dyn KeyValueStore>,
    platform: Arc<RecordingPlatform>,
    capacity: usize,
) -> NotificationsServiceImpl {
    let config = NotifiedEventsRepositoryConfig {
        capacity,
        ..Default::default()
    };
    let repository = Arc::new(NotifiedEventsRepositoryImpl::new(config, store));

    NotificationsServiceImpl::new(NotificationsServiceConfig::default(), repository, platform)
}

pub fn rfc3339(datetime: OffsetDateTime) -> String {
    datetime.format(&Rfc3339).unwrap()
}

pub fn stored_ledger(store: &dyn KeyValueStore) -> Vec<String> {
    store
        .get("notified_events")
        .unwrap()
        .map(|serialized| serde_json::from_str(&serialized).unwrap())
        .unwrap_or_default()
}
