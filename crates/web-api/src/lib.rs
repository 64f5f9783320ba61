//! Web API 层。
//!
//! 提供 Axum 路由，把 HTTP 请求委托给应用层的调度服务。

mod routes;
mod state;

pub use routes::router;
pub use state::AppState;
