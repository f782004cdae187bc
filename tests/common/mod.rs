//! 集成测试共享工具模块
//!
//! 提供测试基础设施和辅助函数，供所有集成测试使用

#![allow(dead_code)]

pub mod assertions;
pub mod data_fixtures;

use graphdb_schema::config::NgqlConfig;
use graphdb_schema::ngql::NgqlCompiler;

/// 测试上下文，包含常用测试资源
pub struct TestContext {
    pub compiler: NgqlCompiler,
}

impl TestContext {
    /// 使用默认配置创建
    pub fn new() -> Self {
        Self::with_config(NgqlConfig::default())
    }

    pub fn with_config(config: NgqlConfig) -> Self {
        Self {
            compiler: NgqlCompiler::new(config),
        }
    }

    /// 限制单条语句长度，用于验证拆分
    pub fn with_max_statement_length(max: usize) -> Self {
        Self::with_config(NgqlConfig::default().with_max_statement_length(max))
    }
}
