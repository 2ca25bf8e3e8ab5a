//!
//! Module with all dtos that are passed between callers and services
//!

pub mod input;
pub mod output;
