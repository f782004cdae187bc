//! 点 ID 生成
//!
//! 写入图数据库的 vid 由 Schema 名称与用户给出的原始 ID 拼接而成

use std::fmt::Debug;

/// 默认连接符
pub const DEFAULT_VID_JOINER: &str = "__";

/// 点 ID 生成策略
pub trait IdBuilder: Debug + Send + Sync {
    fn build(&self, schema_name: &str, raw_parts: &[&str]) -> String;
}

/// 用固定连接符拼接 Schema 名称与原始 ID 各部分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinIdBuilder {
    joiner: String,
}

impl JoinIdBuilder {
    pub fn new(joiner: impl Into<String>) -> Self {
        Self {
            joiner: joiner.into(),
        }
    }

    pub fn joiner(&self) -> &str {
        &self.joiner
    }
}

impl Default for JoinIdBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_VID_JOINER)
    }
}

impl IdBuilder for JoinIdBuilder {
    fn build(&self, schema_name: &str, raw_parts: &[&str]) -> String {
        let mut parts = Vec::with_capacity(raw_parts.len() + 1);
        parts.push(schema_name);
        parts.extend_from_slice(raw_parts);
        parts.join(self.joiner.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_id_builder() {
        let builder = JoinIdBuilder::default();
        assert_eq!(builder.build("A", &["v1"]), "A__v1");
        assert_eq!(builder.build("A", &["org", "42"]), "A__org__42");

        let custom = JoinIdBuilder::new("#");
        assert_eq!(custom.build("Person", &["7"]), "Person#7");
    }
}
