use anyhow::{Context, Result};
use qcm_server::models::load_theme_catalog;
use qcm_server::utils::logging;
use qcm_server::{create_router, Config, QuizService};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 主题目录加载失败时无法提供任何服务，直接退出
    let catalog = load_theme_catalog(&config.themes_list_file).await?;
    logging::log_startup(&config, catalog.len());

    let service = Arc::new(QuizService::new(catalog, config.themes_dir.clone()));
    let app = create_router(service, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("无法监听地址: {}", config.bind_addr()))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP 服务异常退出")?;

    info!("服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("无法监听 Ctrl+C 信号: {}", e);
    }
}
