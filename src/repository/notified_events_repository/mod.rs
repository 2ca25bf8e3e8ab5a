mod dto;
mod notified_events_repository;
mod notified_events_repository_impl;

pub use dto::*;
pub use notified_events_repository::*;
pub use notified_events_repository_impl::*;
