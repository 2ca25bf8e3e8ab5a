use super::NotificationRequest;
use serde::Deserialize;

///
/// State change of a remote coding session that the user should hear about
///
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Agent produced a plan that waits for approval
    PlanReady {
        session_id: String,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        timestamp: Option<String>,
    },
    SessionCompleted {
        session_id: String,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        timestamp: Option<String>,
    },
    SessionFailed {
        session_id: String,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        timestamp: Option<String>,
    },
    AgentMessage {
        session_id: String,
        activity_id: String,
        message: String,
        #[serde(default)]
        timestamp: Option<String>,
    },
}

impl SessionEvent {
    pub fn session_id(&self) -> &str {
        match self {
            SessionEvent::PlanReady { session_id, .. }
            | SessionEvent::SessionCompleted { session_id, .. }
            | SessionEvent::SessionFailed { session_id, .. }
            | SessionEvent::AgentMessage { session_id, .. } => session_id,
        }
    }

    /// Key that identifies this exact event
    pub fn dedupe_key(&self) -> String {
        match self {
            SessionEvent::PlanReady { session_id, .. } => format!("plan_{session_id}"),
            SessionEvent::SessionCompleted { session_id, .. } => format!("complete_{session_id}"),
            SessionEvent::SessionFailed { session_id, .. } => format!("failed_{session_id}"),
            SessionEvent::AgentMessage { activity_id, .. } => format!("message_{activity_id}"),
        }
    }

    pub fn url(&self) -> String {
        format!("/session/{}", self.session_id())
    }
}

fn session_body(session_id: &str, title: Option<String>) -> String {
    title
        .filter(|title| !title.trim().is_empty())
        .unwrap_or_else(|| format!("Session {session_id}"))
}

impl From<SessionEvent> for NotificationRequest {
    fn from(event: SessionEvent) -> Self {
        let dedupe_key = event.dedupe_key();
        let url = event.url();

        let (title, body, timestamp) = match event {
            SessionEvent::PlanReady {
                session_id,
                title,
                timestamp,
            } => (
                "Plan ready for review",
                session_body(&session_id, title),
                timestamp,
            ),
            SessionEvent::SessionCompleted {
                session_id,
                title,
                timestamp,
            } => (
                "Session completed",
                session_body(&session_id, title),
                timestamp,
            ),
            SessionEvent::SessionFailed {
                session_id,
                title,
                timestamp,
            } => (
                "Session failed",
                session_body(&session_id, title),
                timestamp,
            ),
            SessionEvent::AgentMessage {
                message, timestamp, ..
            } => ("New message from agent", message, timestamp),
        };

        Self {
            title: title.to_string(),
            body,
            url: Some(url),
            dedupe_key: Some(dedupe_key),
            timestamp,
        }
    }
}
