use domain::Message;
use serde::{Deserialize, Serialize};

/// Wire shape of one stored message: exactly the `{user, message}` pair the
/// protocol exposes. Sequence numbers and timestamps stay internal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDto {
    pub user: String,
    pub message: String,
}

impl From<&Message> for MessageDto {
    fn from(message: &Message) -> Self {
        Self {
            user: message.author.clone(),
            message: message.body.clone(),
        }
    }
}
