//! API 错误类型

use thiserror::Error;

pub use micro_config::ConfigError;
pub use micro_core::StepError;

/// Micro 错误类型
#[derive(Error, Debug)]
pub enum MicroError {
    /// 阶段失败（预算耗尽或输入流故障）
    #[error(transparent)]
    Step(#[from] StepError),

    /// 配置错误
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl MicroError {
    /// 获取错误阶段名称
    pub fn phase(&self) -> &'static str {
        match self {
            MicroError::Step(e) => e.phase().as_str(),
            MicroError::Config(_) => "config",
        }
    }
}
