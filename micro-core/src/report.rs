//! 错误报告与错误预算
//!
//! 扫描器和语法分析器共用同一套策略：计数、报告、继续，直到达到上限。
//! 报告目标通过 [`ReportSink`] 显式传入，没有全局状态。

use std::fmt;
use std::sync::{Arc, Mutex};

use micro_config::Phase;
use tracing::debug;

use crate::error::StepError;

/// 一条已编号的错误报告
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 产生错误的阶段
    pub phase: Phase,
    /// 阶段内从 1 开始的序号
    pub number: usize,
    /// 错误消息（不含序号前缀）
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error #{}: {}", self.number, self.message)
    }
}

/// 报告输出目标
pub trait ReportSink: Send + Sync {
    fn report(&self, diagnostic: &Diagnostic);
}

/// 标准错误输出
pub struct StderrSink;

impl ReportSink for StderrSink {
    fn report(&self, diagnostic: &Diagnostic) {
        eprintln!("{diagnostic}");
    }
}

/// 丢弃所有报告
pub struct NoopSink;

impl ReportSink for NoopSink {
    fn report(&self, _diagnostic: &Diagnostic) {}
}

/// 内存收集器，克隆后共享同一份记录（测试和嵌入场景使用）
#[derive(Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<Diagnostic>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 取出目前收集到的全部报告
    pub fn dump(&self) -> Vec<Diagnostic> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// 按输出格式渲染的报告行
    pub fn lines(&self) -> Vec<String> {
        self.dump().iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.dump().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReportSink for MemorySink {
    fn report(&self, diagnostic: &Diagnostic) {
        let mut records = match self.records.lock() {
            Ok(records) => records,
            Err(poisoned) => poisoned.into_inner(),
        };
        records.push(diagnostic.clone());
    }
}

/// 单个阶段的错误预算
///
/// 每记录一个错误就计数并报告；计数达到上限时返回
/// [`StepError::Exhausted`]，由调用方用 `?` 一路传出。
/// 每个阶段使用独立的实例，阶段结束后即丢弃。
pub struct ErrorBudget {
    limit: usize,
    count: usize,
    sink: Arc<dyn ReportSink>,
}

impl ErrorBudget {
    /// 创建错误预算，上限为 0 时按 1 处理
    pub fn new(limit: usize, sink: Arc<dyn ReportSink>) -> Self {
        Self {
            limit: limit.max(1),
            count: 0,
            sink,
        }
    }

    /// 记录一个可恢复错误
    pub fn record(&mut self, phase: Phase, error: &impl fmt::Display) -> Result<(), StepError> {
        self.count += 1;

        let diagnostic = Diagnostic {
            phase,
            number: self.count,
            message: error.to_string(),
        };
        debug!(
            target: "micro::report",
            phase = phase.as_str(),
            number = diagnostic.number,
            limit = self.limit,
            "{}",
            diagnostic.message
        );
        self.sink.report(&diagnostic);

        if self.count >= self.limit {
            debug!(target: "micro::report", phase = phase.as_str(), "error budget exhausted");
            return Err(StepError::exhausted(phase));
        }
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// 是否从未记录过错误
    pub fn is_clean(&self) -> bool {
        self.count == 0
    }
}

impl fmt::Debug for ErrorBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorBudget")
            .field("limit", &self.limit)
            .field("count", &self.count)
            .finish()
    }
}
