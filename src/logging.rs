//! Logging 日志模块
//!
//! 本模块提供了结构化日志的初始化工具。
//! 日志级别通过 `RUST_LOG` 环境变量过滤，默认 `info`。

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

/// 初始化 JSON 格式的结构化日志订阅者。
///
/// 过滤指令从 `RUST_LOG` 环境变量读取（无法解析的指令被忽略），
/// 未设置时默认为 `info` 级别。
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init()
}
