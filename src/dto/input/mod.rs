mod input_line;
mod notification_request;
mod session_event;

pub use input_line::*;
pub use notification_request::*;
pub use session_event::*;
