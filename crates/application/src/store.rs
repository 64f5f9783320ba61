use domain::{Message, MessageLog, Timestamp};
use tokio::sync::RwLock;

/// Process-wide message store.
///
/// Wraps the domain [`MessageLog`] in a single read-write lock so every
/// operation is atomic with respect to concurrent appends and clears: writers
/// are exclusive, readers may overlap each other but never a writer. State is
/// owned here and passed to the dispatcher at construction; nothing in the
/// process reaches the log except through these methods.
#[derive(Debug, Default)]
pub struct MessageStore {
    log: RwLock<MessageLog>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self {
            log: RwLock::new(MessageLog::new()),
        }
    }

    /// Appends a message and returns the assigned sequence number.
    pub async fn append(
        &self,
        author: impl Into<String>,
        body: impl Into<String>,
        received_at: Timestamp,
    ) -> u64 {
        let mut log = self.log.write().await;
        log.append(author, body, received_at)
    }

    /// Full copy of the log in arrival order. The caller never observes
    /// mutation that happens after the copy is taken.
    pub async fn snapshot(&self) -> Vec<Message> {
        let log = self.log.read().await;
        log.messages().to_vec()
    }

    /// Removes every message authored by `author`, returning the count.
    pub async fn clear_by_author(&self, author: &str) -> usize {
        let mut log = self.log.write().await;
        log.clear_by_author(author)
    }

    pub async fn len(&self) -> usize {
        let log = self.log.read().await;
        log.len()
    }

    pub async fn is_empty(&self) -> bool {
        let log = self.log.read().await;
        log.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn snapshot_is_isolated_from_later_mutation() {
        let store = MessageStore::new();
        store.append("alice", "hi", Utc::now()).await;

        let snapshot = store.snapshot().await;
        store.append("bob", "yo", Utc::now()).await;
        store.clear_by_author("alice").await;

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].author, "alice");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn append_then_clear_round_trip() {
        let store = MessageStore::new();
        store.append("alice", "hi", Utc::now()).await;
        store.append("bob", "yo", Utc::now()).await;

        assert_eq!(store.clear_by_author("alice").await, 1);
        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].author, "bob");
        assert_eq!(snapshot[0].body, "yo");
    }
}
