use chrono::{DateTime, Utc};

pub type Timestamp = DateTime<Utc>;

/// 一条已接收的聊天消息。入库后不可变。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub author: String,
    pub body: String,
    /// Strictly increasing position assigned at append time. Never reused,
    /// even after entries are cleared.
    pub sequence: u64,
    pub received_at: Timestamp,
}

/// Ordered, append-only log of accepted messages.
///
/// Insertion order is arrival order across all clients. Entries are only ever
/// removed by [`MessageLog::clear_by_author`], which preserves the relative
/// order of the remainder.
#[derive(Debug, Clone)]
pub struct MessageLog {
    entries: Vec<Message>,
    next_sequence: u64,
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_sequence: 1,
        }
    }

    /// Appends a message and returns the assigned sequence number.
    /// Always succeeds; the log has no capacity limit.
    pub fn append(
        &mut self,
        author: impl Into<String>,
        body: impl Into<String>,
        received_at: Timestamp,
    ) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.entries.push(Message {
            author: author.into(),
            body: body.into(),
            sequence,
            received_at,
        });
        sequence
    }

    /// Removes every message authored by `author` and returns the count.
    /// Zero matches is not an error.
    pub fn clear_by_author(&mut self, author: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|message| message.author != author);
        before - self.entries.len()
    }

    /// All stored messages in arrival order.
    pub fn messages(&self) -> &[Message] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn log_with(entries: &[(&str, &str)]) -> MessageLog {
        let mut log = MessageLog::new();
        for (author, body) in entries {
            log.append(*author, *body, Utc::now());
        }
        log
    }

    #[test]
    fn append_assigns_strictly_increasing_sequences() {
        let mut log = MessageLog::new();
        let first = log.append("alice", "hi", Utc::now());
        let second = log.append("bob", "yo", Utc::now());
        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(log.messages()[0].sequence, 1);
        assert_eq!(log.messages()[1].sequence, 2);
    }

    #[test]
    fn messages_keep_arrival_order() {
        let log = log_with(&[("alice", "one"), ("bob", "two"), ("alice", "three")]);
        let bodies: Vec<&str> = log.messages().iter().map(|m| m.body.as_str()).collect();
        assert_eq!(bodies, vec!["one", "two", "three"]);
    }

    #[test]
    fn clear_by_author_removes_only_matching_entries() {
        let mut log = log_with(&[("alice", "hi"), ("bob", "yo")]);
        let deleted = log.clear_by_author("alice");
        assert_eq!(deleted, 1);
        assert_eq!(log.len(), 1);
        assert_eq!(log.messages()[0].author, "bob");
        assert_eq!(log.messages()[0].body, "yo");
    }

    #[test]
    fn clear_by_author_preserves_relative_order_of_remainder() {
        let mut log = log_with(&[
            ("alice", "a1"),
            ("bob", "b1"),
            ("alice", "a2"),
            ("carol", "c1"),
        ]);
        assert_eq!(log.clear_by_author("alice"), 2);
        let remaining: Vec<&str> = log.messages().iter().map(|m| m.body.as_str()).collect();
        assert_eq!(remaining, vec!["b1", "c1"]);
    }

    #[test]
    fn clear_by_author_with_no_matches_returns_zero() {
        let mut log = log_with(&[("alice", "hi")]);
        assert_eq!(log.clear_by_author("bob"), 0);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn sequences_are_not_reused_after_clear() {
        let mut log = log_with(&[("alice", "hi"), ("bob", "yo")]);
        log.clear_by_author("alice");
        let next = log.append("alice", "back", Utc::now());
        assert_eq!(next, 3);
    }

    #[test]
    fn empty_author_is_stored_as_is() {
        let mut log = MessageLog::new();
        log.append("", "anonymous", Utc::now());
        assert_eq!(log.len(), 1);
        assert_eq!(log.clear_by_author(""), 1);
    }
}
