//! 值类型定义
//!
//! - `Value`：属性的原生取值
//! - `VertexKey`：用户提供的原始点 ID
//! - `WireValue`：从图数据库返回的带类型标签的值（由外部客户端实现）

use crate::core::error::{SchemaError, SchemaResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 属性原生取值，空值以 `Option::None` 表示
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
}

impl Value {
    /// 原生类型名，用于错误信息
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Double(_) => "double",
            Value::String(_) => "string",
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

/// 浮点数文本形式：整数值也保留小数部分，避免被当作整型字面量
pub(crate) fn format_double(d: f64) -> String {
    let text = d.to_string();
    if text.contains(['.', 'e', 'E']) || !d.is_finite() {
        text
    } else {
        format!("{}.0", text)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Double(d) => f.write_str(&format_double(*d)),
            Value::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

/// 原始点 ID：字符串或整数
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VertexKey {
    Int(i64),
    String(String),
}

impl fmt::Display for VertexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexKey::Int(i) => write!(f, "{}", i),
            VertexKey::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for VertexKey {
    fn from(v: &str) -> Self {
        VertexKey::String(v.to_string())
    }
}

impl From<String> for VertexKey {
    fn from(v: String) -> Self {
        VertexKey::String(v)
    }
}

impl From<i64> for VertexKey {
    fn from(v: i64) -> Self {
        VertexKey::Int(v)
    }
}

/// 定位一条边：起点、rank、终点
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeKey {
    pub src: VertexKey,
    pub rank: i64,
    pub dst: VertexKey,
}

impl EdgeKey {
    pub fn new(src: VertexKey, rank: i64, dst: VertexKey) -> Self {
        Self { src, rank, dst }
    }

    /// 由 `[起点, rank, 终点]` 三元组构造
    pub fn from_parts(parts: &[&str]) -> SchemaResult<Self> {
        let [src, rank, dst] = parts else {
            return Err(SchemaError::InvalidArgument(format!(
                "edge requires (src, rank, dst), got {} parts",
                parts.len()
            )));
        };
        let rank = rank.trim().parse::<i64>().map_err(|_| {
            SchemaError::InvalidArgument(format!("rank of edge must be integer, got '{}'", rank))
        })?;
        Ok(Self::new((*src).into(), rank, (*dst).into()))
    }
}

/// 图数据库返回值的访问接口
///
/// 由网络客户端的值包装类型实现；标签不符时各访问器返回 `TypeMismatch`
pub trait WireValue {
    fn is_null(&self) -> bool;
    fn as_int(&self) -> SchemaResult<i64>;
    fn as_string(&self) -> SchemaResult<String>;
    fn as_bool(&self) -> SchemaResult<bool>;
    fn as_double(&self) -> SchemaResult<f64>;
}
