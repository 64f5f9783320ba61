//! 主应用程序入口
//!
//! 启动 Axum Web API 服务。

use std::sync::Arc;

use application::{
    BlockRegistry, MessageStore, RelayService, RelayServiceDependencies, SystemClock,
};
use config::AppConfig;
use tracing_subscriber::EnvFilter;
use web_api::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env_with_defaults();
    config.validate()?;

    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log.filter.clone())),
        )
        .init();

    // 进程内共享状态：消息日志与屏蔽名单，进程退出即丢弃
    let store = Arc::new(MessageStore::new());
    let registry = Arc::new(BlockRegistry::new());
    let clock: Arc<dyn application::Clock> = Arc::new(SystemClock);

    let relay_service = RelayService::new(RelayServiceDependencies {
        store,
        registry,
        clock,
    });

    let state = AppState::new(Arc::new(relay_service));

    // 启动 Web 服务器
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(config.server.bind_addr()).await?;

    tracing::info!("聊天中继服务器启动在 http://{}", config.server.bind_addr());
    axum::serve(listener, app).await?;

    Ok(())
}
