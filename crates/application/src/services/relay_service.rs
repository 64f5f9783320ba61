use std::sync::Arc;

use crate::{clock::Clock, dto::MessageDto, registry::BlockRegistry, store::MessageStore};

/// Result of a send request. A rejected send is a normal domain outcome, not
/// an error: the protocol has no separate error channel, so the caller must
/// be able to tell the two apart from the response itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Stored { sequence: u64 },
    RejectedBlocked,
}

impl SendOutcome {
    pub fn accepted(&self) -> bool {
        matches!(self, SendOutcome::Stored { .. })
    }
}

pub struct RelayServiceDependencies {
    pub store: Arc<MessageStore>,
    pub registry: Arc<BlockRegistry>,
    pub clock: Arc<dyn Clock>,
}

/// Request dispatcher: translates each protocol request into store/registry
/// operations and enforces the block policy before accepting a message.
///
/// Stateless per request; all shared state lives in the injected store and
/// registry. Every operation is infallible — the store has no capacity limit
/// and empty usernames are ordinary values, so there is nothing to fail on.
pub struct RelayService {
    deps: RelayServiceDependencies,
}

impl RelayService {
    pub fn new(deps: RelayServiceDependencies) -> Self {
        Self { deps }
    }

    /// Stores a chat message unless the sender is blocked.
    ///
    /// The block check and the append are two independently atomic steps, not
    /// one transaction; a block that lands between them affects the next send,
    /// never this one.
    pub async fn send_chat(&self, user: &str, body: &str) -> SendOutcome {
        if self.deps.registry.is_blocked(user).await {
            tracing::info!(user, "send rejected: user is blocked");
            return SendOutcome::RejectedBlocked;
        }

        let received_at = self.deps.clock.now();
        let sequence = self.deps.store.append(user, body, received_at).await;
        let total = self.deps.store.len().await;
        tracing::info!(user, sequence, total, "message stored");
        SendOutcome::Stored { sequence }
    }

    /// Blocks a username for the rest of the process lifetime. Idempotent;
    /// returns whether the name was newly added.
    pub async fn block_user(&self, username: &str) -> bool {
        let newly_blocked = self.deps.registry.block(username).await;
        tracing::info!(username, newly_blocked, "user blocked");
        newly_blocked
    }

    /// Deletes every stored message authored by `user` and returns the count.
    /// Blocking state is untouched; zero deletions is a normal outcome.
    pub async fn clear_my_messages(&self, user: &str) -> usize {
        let deleted = self.deps.store.clear_by_author(user).await;
        let remaining = self.deps.store.len().await;
        tracing::info!(user, deleted, remaining, "messages cleared");
        deleted
    }

    /// All stored messages in arrival order.
    pub async fn get_all_messages(&self) -> Vec<MessageDto> {
        let snapshot = self.deps.store.snapshot().await;
        tracing::debug!(count = snapshot.len(), "snapshot taken");
        snapshot.iter().map(MessageDto::from).collect()
    }

    /// The handshake greeting the client performs before entering its prompt
    /// loop.
    pub fn greet(&self, name: &str) -> String {
        tracing::info!(name, "greeting requested");
        format!("Hello {name}!")
    }
}
