//! API 层配置
//!
//! 包含检查配置 RunConfig：错误预算和报告输出目标

use std::sync::Arc;

use micro_config::{CheckConfig, MicroConfig};
use micro_core::{ErrorBudget, ReportSink, StderrSink};

/// Check configuration
#[derive(Clone)]
pub struct RunConfig {
    /// Error budget settings
    pub check: CheckConfig,
    /// Where numbered error lines are reported
    pub sink: Arc<dyn ReportSink>,
}

impl std::fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunConfig")
            .field("check", &self.check)
            .finish()
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            check: CheckConfig::default(),
            sink: Arc::new(StderrSink),
        }
    }
}

impl RunConfig {
    pub fn new(check: CheckConfig) -> Self {
        Self {
            check,
            ..Self::default()
        }
    }

    /// Build from a loaded config file
    pub fn from_config(config: &MicroConfig) -> Self {
        Self::new(config.check.clone())
    }

    /// Replace the report sink
    pub fn with_sink(mut self, sink: Arc<dyn ReportSink>) -> Self {
        self.sink = sink;
        self
    }

    /// A fresh budget for one stage
    pub fn budget(&self) -> ErrorBudget {
        ErrorBudget::new(self.check.max_errors, Arc::clone(&self.sink))
    }
}
