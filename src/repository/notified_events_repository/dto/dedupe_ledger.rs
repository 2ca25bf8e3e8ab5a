use std::collections::VecDeque;

///
/// Ordered list of already notified dedupe keys, oldest first.
///
/// Length never exceeds capacity. Pushing into a full ledger evicts
/// the oldest keys.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DedupeLedger {
    keys: VecDeque<String>,
    capacity: usize,
}

impl DedupeLedger {
    pub fn new(capacity: usize) -> Self {
        Self {
            keys: VecDeque::new(),
            capacity,
        }
    }

    ///
    /// Builds ledger from keys in stored order.
    /// When there are more keys than capacity the oldest are dropped.
    ///
    pub fn from_keys(keys: Vec<String>, capacity: usize) -> Self {
        let mut ledger = Self {
            keys: VecDeque::from(keys),
            capacity,
        };
        ledger.evict_overflow();

        ledger
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    ///
    /// Appends key at the end.
    ///
    /// ### Returns
    /// `false` when key was already present, ledger is then left untouched
    ///
    pub fn push(&mut self, key: &str) -> bool {
        if self.contains(key) {
            return false;
        }

        self.keys.push_back(key.to_string());
        self.evict_overflow();

        true
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn into_keys(self) -> Vec<String> {
        self.keys.into()
    }

    fn evict_overflow(&mut self) {
        while self.keys.len() > self.capacity {
            if let Some(evicted) = self.keys.pop_front() {
                tracing::trace!(evicted, "evicted oldest dedupe key");
            }
        }
    }
}
