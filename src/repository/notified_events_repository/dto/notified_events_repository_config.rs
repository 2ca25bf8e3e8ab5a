pub const DEFAULT_LEDGER_KEY: &str = "notified_events";
pub const DEFAULT_LEDGER_CAPACITY: usize = 500;

#[derive(Debug, Clone)]
pub struct NotifiedEventsRepositoryConfig {
    /// Key under which serialized ledger is kept in the store
    pub storage_key: String,
    pub capacity: usize,
}

impl Default for NotifiedEventsRepositoryConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_LEDGER_KEY.to_string(),
            capacity: DEFAULT_LEDGER_CAPACITY,
        }
    }
}
