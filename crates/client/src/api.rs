use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-call deadline. Expiry is fatal for the whole client; there is no retry
/// and no backoff anywhere here.
const CALL_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("call failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Serialize)]
struct SendChatPayload<'a> {
    user: &'a str,
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct BlockUserPayload<'a> {
    username: &'a str,
}

#[derive(Debug, Serialize)]
struct ClearMinePayload<'a> {
    user: &'a str,
}

#[derive(Debug, Serialize)]
struct GreetPayload<'a> {
    name: &'a str,
}

// The terminal client only ever shows the human-readable `message` text, so
// the reply types keep just what gets printed; other response fields are for
// programmatic callers and are ignored here.

#[derive(Debug, Deserialize)]
struct TextReply {
    message: String,
}

#[derive(Debug, Deserialize)]
pub struct MessageEntry {
    pub user: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct MessageListReply {
    messages: Vec<MessageEntry>,
}

/// Blocking HTTP front for the relay protocol. One synchronous request per
/// user action; the caller blocks on the response before prompting again.
pub struct RelayApi {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl RelayApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(CALL_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn post_for_text<T: Serialize>(&self, path: &str, payload: &T) -> Result<String, ClientError> {
        let reply: TextReply = self.http.post(self.url(path)).json(payload).send()?.json()?;
        Ok(reply.message)
    }

    pub fn greet(&self, name: &str) -> Result<String, ClientError> {
        self.post_for_text("/api/v1/greet", &GreetPayload { name })
    }

    pub fn send_chat(&self, user: &str, message: &str) -> Result<String, ClientError> {
        self.post_for_text("/api/v1/chat/send", &SendChatPayload { user, message })
    }

    pub fn block_user(&self, username: &str) -> Result<String, ClientError> {
        self.post_for_text("/api/v1/moderation/block", &BlockUserPayload { username })
    }

    pub fn clear_my_messages(&self, user: &str) -> Result<String, ClientError> {
        self.post_for_text("/api/v1/chat/clear", &ClearMinePayload { user })
    }

    pub fn get_all_messages(&self) -> Result<Vec<MessageEntry>, ClientError> {
        let reply: MessageListReply = self
            .http
            .get(self.url("/api/v1/chat/messages"))
            .send()?
            .json()?;
        Ok(reply.messages)
    }
}
