use super::NotificationData;
use crate::platform;
use async_trait::async_trait;

///
/// Brings the application to the user when a notification is activated
///
/// Only platforms that report clicks need it. The terminal platform
/// shipped with the binary never does, so the binary wires no navigator
/// and this port is meant for embedders of the library that forward
/// activations to [handle_activation].
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn focus(&self) -> Result<(), platform::Error>;

    async fn open(&self, url: &str) -> Result<(), platform::Error>;
}

///
/// Handles click on displayed notification.
///
/// Notification without url is ignored. Errors are only logged because
/// there is nobody left to report them to.
///
#[tracing::instrument(name = "Notification activation", skip_all, fields(url = data.url.as_deref()))]
pub async fn handle_activation(navigator: &dyn Navigator, data: &NotificationData) {
    let Some(url) = data.url.as_deref() else {
        tracing::trace!("notification without url activated");
        return;
    };

    if let Err(err) = navigator.focus().await {
        tracing::warn!(%err, "failed to focus application");
    }

    match navigator.open(url).await {
        Ok(()) => tracing::debug!("opened notification url"),
        Err(err) => tracing::error!(%err, "failed to open notification url"),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use mockall::Sequence;

    #[tokio::test]
    async fn activation_focuses_then_opens() {
        let mut sequence = Sequence::new();
        let mut navigator = MockNavigator::new();
        navigator
            .expect_focus()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|| Ok(()));
        navigator
            .expect_open()
            .withf(|url| url == "/session/42")
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| Ok(()));

        let data = NotificationData {
            url: Some("/session/42".to_string()),
        };
        handle_activation(&navigator, &data).await;
    }

    #[tokio::test]
    async fn activation_without_url() {
        let mut navigator = MockNavigator::new();
        navigator.expect_focus().never();
        navigator.expect_open().never();

        handle_activation(&navigator, &NotificationData::default()).await;
    }

    #[tokio::test]
    async fn activation_focus_failed_still_opens() {
        let mut navigator = MockNavigator::new();
        navigator
            .expect_focus()
            .returning(|| Err(platform::Error::Unsupported));
        navigator.expect_open().times(1).returning(|_| Ok(()));

        let data = NotificationData {
            url: Some("/session/1".to_string()),
        };
        handle_activation(&navigator, &data).await;
    }
}
