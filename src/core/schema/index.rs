//! 索引命名与索引登记
//!
//! 索引名称由可注入的 `IndexNameBuilder` 生成；每个 Schema 持有一个 `IndexRegistry`，
//! 记录编译 CREATE INDEX 语句时生成过的全部索引名以及 Schema 级主索引名。

use super::definition::SchemaKind;
use super::property::Property;
use std::fmt::Debug;

/// 索引名称生成策略
pub trait IndexNameBuilder: Debug + Send + Sync {
    /// `properties` 为 `None` 时生成 Schema 级索引名
    fn build(&self, schema_name: &str, kind: SchemaKind, properties: Option<&[Property]>) -> String;
}

/// 默认索引命名：`i_{K}_{schema}[_P_{p1}_{p2}...]`，`K` 取 Schema 类别常量的首字母
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultIndexNameBuilder;

impl IndexNameBuilder for DefaultIndexNameBuilder {
    fn build(&self, schema_name: &str, kind: SchemaKind, properties: Option<&[Property]>) -> String {
        let initial = &kind.as_str()[..1];
        let mut name = format!("i_{}_{}", initial, schema_name);
        if let Some(properties) = properties {
            let joined: Vec<&str> = properties.iter().map(|p| p.name()).collect();
            name.push_str("_P_");
            name.push_str(&joined.join("_"));
        }
        name
    }
}

/// 已生成索引名的登记表，只追加
#[derive(Debug, Clone, Default)]
pub struct IndexRegistry {
    names: Vec<String>,
    primary: Option<String>,
}

impl IndexRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: String) {
        self.names.push(name);
    }

    /// 登记 Schema 级索引，同时设为主索引
    pub fn record_primary(&mut self, name: String) {
        self.primary = Some(name.clone());
        self.names.push(name);
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn primary(&self) -> Option<&str> {
        self.primary.as_deref()
    }
}
