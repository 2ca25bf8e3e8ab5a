use super::DedupeLedger;
use crate::repository;

#[cfg_attr(test, mockall::automock)]
pub trait NotifiedEventsRepository: Send + Sync {
    ///
    /// Loads the whole ledger.
    /// Ledger that cannot be deserialized is returned empty.
    ///
    fn find_all(&self) -> Result<DedupeLedger, repository::Error>;

    fn contains(&self, key: &str) -> Result<bool, repository::Error>;

    ///
    /// Appends key to the ledger and evicts the oldest keys over capacity.
    ///
    /// ### Returns
    /// `false` when key was already present and nothing was written
    ///
    fn insert(&self, key: &str) -> Result<bool, repository::Error>;
}
