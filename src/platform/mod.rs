//!
//! Port to whatever is able to show notifications to the user
//!

mod display_notification;
mod error;
mod navigator;
mod notification_platform;
mod permission;
mod terminal_notification_platform;

pub use display_notification::*;
pub use error::*;
pub use navigator::*;
pub use notification_platform::*;
pub use permission::*;
pub use terminal_notification_platform::*;
