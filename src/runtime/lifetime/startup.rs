use std::sync::Arc;

use tracing::{debug, warn};
use tracing_appender::non_blocking::WorkerGuard;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::storage::Storage;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 初始化日志
///
/// 日志写到 stderr，stdout 只留给表格/JSON 输出。返回的 guard 需要保留到进程结束。
pub fn init_tracing(config: &AppConfig) -> WorkerGuard {
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    guard
}

/// 准备执行命令所需的上下文：连接数据库并完成迁移
pub async fn prepare_startup(config: &AppConfig) -> Result<StartupContext> {
    let started = chrono::Utc::now();

    debug!(
        "Project: {} Version: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let storage = crate::storage::create_storage(&config.database).await?;

    if config.is_production() && config.database.sql_logging {
        warn!("SQL statement logging is enabled in production");
    }

    debug!(
        "Storage backend initialized and migrations completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(started)
            .num_milliseconds()
    );

    Ok(StartupContext { storage })
}
