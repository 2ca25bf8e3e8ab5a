mod error;
mod key_value_store;
mod notified_events_repository;

pub use error::*;
pub use key_value_store::*;
pub use notified_events_repository::*;
