mod dedupe_ledger;
mod notified_events_repository_config;

pub use dedupe_ledger::*;
pub use notified_events_repository_config::*;
