//!
//! Decides whether a notification about a remote coding session event
//! should be shown to the user and remembers which events were already
//! notified, so every event is shown at most once.
//!

pub mod application;
pub mod dto;
pub mod error;
pub mod platform;
pub mod repository;
pub mod service;
