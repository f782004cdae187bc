//! GraphDB Schema - 图数据库的 Schema 建模与 nGQL 语句生成
//!
//! 以强类型描述 Tag 与 Edge Type，按 Schema 校验点、边实例，
//! 并生成 DDL（CREATE / REBUILD INDEX）与 DML（INSERT / DELETE / UPDATE）语句文本。
//! 本 crate 不执行语句，也不建立网络连接。

pub mod config;
pub mod core;
pub mod ngql;
pub mod utils;

pub use crate::config::{Config, NgqlConfig};
pub use crate::core::{SchemaError, SchemaResult};
pub use crate::ngql::{NgqlCompiler, Statements};
