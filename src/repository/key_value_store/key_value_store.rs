use crate::repository;

///
/// Synchronous string storage shared by everything that has to survive
/// application restarts.
///
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, repository::Error>;

    fn set(&self, key: &str, value: String) -> Result<(), repository::Error>;
}
