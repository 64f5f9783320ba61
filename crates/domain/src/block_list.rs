use std::collections::HashSet;

/// Set of usernames whose future sends are rejected.
///
/// Membership is permanent for the process lifetime; there is no unblock.
/// Blocking never rewrites history: entries already in the message log stay
/// there regardless of later inserts here.
#[derive(Debug, Clone, Default)]
pub struct BlockList {
    names: HashSet<String>,
}

impl BlockList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a username. Returns `true` if the name was newly blocked,
    /// `false` if it was already present. Either way the insert counts as
    /// success.
    pub fn insert(&mut self, username: impl Into<String>) -> bool {
        self.names.insert(username.into())
    }

    pub fn contains(&self, username: &str) -> bool {
        self.names.contains(username)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
