mod dto;
mod notifications_service;
mod notifications_service_impl;
mod staleness;

pub use dto::*;
pub use notifications_service::*;
pub use notifications_service_impl::*;
pub use staleness::*;
