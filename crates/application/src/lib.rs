//! 应用层实现。
//!
//! 在领域模型之上提供共享状态与用例服务：消息存储、屏蔽名单注册表、
//! 以及把协议请求翻译成存储操作的调度服务。

pub mod clock;
pub mod dto;
pub mod registry;
pub mod services;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use dto::MessageDto;
pub use registry::BlockRegistry;
pub use services::{RelayService, RelayServiceDependencies, SendOutcome};
pub use store::MessageStore;
