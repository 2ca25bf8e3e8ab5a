use super::{NotificationRequest, SessionEvent};
use serde::Deserialize;

///
/// Single line of newline delimited JSON read by the application
///
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum InputLine {
    Event(SessionEvent),
    Request(NotificationRequest),
}

impl From<InputLine> for NotificationRequest {
    fn from(line: InputLine) -> Self {
        match line {
            InputLine::Event(event) => event.into(),
            InputLine::Request(request) => request,
        }
    }
}
