//! 阶段级错误
//!
//! 单个字符/token 的错误在各自阶段内部处理（计数、报告），不会向外传播；
//! 只有 [`StepError`] 会离开阶段，交给调用方决定退出。

use micro_config::Phase;
use thiserror::Error;

/// 整个阶段失败
#[derive(Debug, Error)]
pub enum StepError {
    /// 错误预算耗尽，或阶段结束时仍有未清零的错误
    #[error("error: Encountered errors during {}", step_name(.phase))]
    Exhausted { phase: Phase },

    /// 底层字符流故障（非正常 EOF），原样传出
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StepError {
    pub fn exhausted(phase: Phase) -> Self {
        StepError::Exhausted { phase }
    }

    /// 失败所在阶段（流故障只可能来自扫描阶段）
    pub fn phase(&self) -> Phase {
        match self {
            StepError::Exhausted { phase } => *phase,
            StepError::Io(_) => Phase::Scanner,
        }
    }
}

fn step_name(phase: &Phase) -> &'static str {
    match phase {
        Phase::Scanner => "token scanning",
        Phase::Parser => "parsing",
    }
}
