//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现分阶段日志控制。日志写到标准错误，
//! 标准输出只留给 `--dump-tokens`。

use std::io;
use std::path::Path;
use std::sync::Mutex;

use micro_config::LogFormat;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

use crate::config::{phase_targets, LogConfig};

/// 使用指定格式和日志配置初始化日志系统，可选同时写入文件
pub fn init(log_config: &LogConfig, format: LogFormat, file: Option<&Path>) -> io::Result<()> {
    // Build filter targets
    let mut targets = Targets::new().with_default(log_config.global);
    for target in phase_targets() {
        let level = log_config.level_for(&target);
        targets = targets.with_target(target, level);
    }

    let stderr_layer = create_format_layer(format, io::stderr).with_filter(targets.clone());

    // If file specified, output to both console and file
    if let Some(path) = file {
        let file_handle = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        let file_layer = fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file_handle))
            .with_filter(targets);

        tracing_subscriber::registry()
            .with(stderr_layer)
            .with(file_layer)
            .init();
    } else {
        tracing_subscriber::registry().with(stderr_layer).init();
    }
    Ok(())
}

/// Create formatter layer based on format
fn create_format_layer<W, F>(
    format: LogFormat,
    make_writer: F,
) -> impl Layer<tracing_subscriber::Registry>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}
