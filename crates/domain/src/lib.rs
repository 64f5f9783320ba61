//! 领域模型层。
//!
//! 纯数据结构与不变量：消息日志与屏蔽名单。
//! 不包含任何异步或 I/O，由应用层负责并发控制。

pub mod block_list;
pub mod message;

pub use block_list::BlockList;
pub use message::{Message, MessageLog, Timestamp};
