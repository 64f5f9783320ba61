use domain::BlockList;
use tokio::sync::RwLock;

/// Process-wide block registry, lock-guarded like [`crate::MessageStore`].
#[derive(Debug, Default)]
pub struct BlockRegistry {
    list: RwLock<BlockList>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self {
            list: RwLock::new(BlockList::new()),
        }
    }

    /// Blocks a username. Succeeds unconditionally; returns whether the name
    /// was newly added so callers can log re-blocks.
    pub async fn block(&self, username: impl Into<String>) -> bool {
        let mut list = self.list.write().await;
        list.insert(username)
    }

    pub async fn is_blocked(&self, username: &str) -> bool {
        let list = self.list.read().await;
        list.contains(username)
    }

    pub async fn len(&self) -> usize {
        let list = self.list.read().await;
        list.len()
    }
}
