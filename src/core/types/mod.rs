// 核心类型系统模块
//
// nGQL 属性可声明的标量数据类型，以及整型族判定、取值检查和原生校验器表

use crate::core::error::{SchemaError, SchemaResult};
use crate::core::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 属性数据类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataType {
    String,
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Float,
    Double,
    Date,
    Time,
    DateTime,
    Timestamp,
    Duration,
}

/// 原生值校验函数
pub type NativeValidator = fn(&Value) -> bool;

impl DataType {
    /// 全部支持的类型
    pub fn values() -> &'static [DataType] {
        &[
            DataType::String,
            DataType::Bool,
            DataType::Int,
            DataType::Int8,
            DataType::Int16,
            DataType::Int32,
            DataType::Int64,
            DataType::Float,
            DataType::Double,
            DataType::Date,
            DataType::Time,
            DataType::DateTime,
            DataType::Timestamp,
            DataType::Duration,
        ]
    }

    /// 整型族
    pub fn integers() -> &'static [DataType] {
        &[
            DataType::Int,
            DataType::Int8,
            DataType::Int16,
            DataType::Int32,
            DataType::Int64,
        ]
    }

    /// nGQL 中的类型名
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::String => "STRING",
            DataType::Bool => "BOOL",
            DataType::Int => "INT",
            DataType::Int8 => "INT8",
            DataType::Int16 => "INT16",
            DataType::Int32 => "INT32",
            DataType::Int64 => "INT64",
            DataType::Float => "FLOAT",
            DataType::Double => "DOUBLE",
            DataType::Date => "DATE",
            DataType::Time => "TIME",
            DataType::DateTime => "DATETIME",
            DataType::Timestamp => "TIMESTAMP",
            DataType::Duration => "DURATION",
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            DataType::Int | DataType::Int8 | DataType::Int16 | DataType::Int32 | DataType::Int64
        )
    }

    /// 检查取值与声明类型是否兼容
    ///
    /// 目前只检查整型族；其余类型的格式由编解码层的原生校验器负责
    pub fn check_value(&self, value: Option<&Value>, support_null: bool) -> SchemaResult<()> {
        if !self.is_integer() {
            return Ok(());
        }
        match value {
            Some(Value::Int(_)) => Ok(()),
            None if support_null => Ok(()),
            None => Err(SchemaError::TypeMismatch(format!(
                "required int but got null instead ({})",
                self
            ))),
            Some(other) => Err(SchemaError::TypeMismatch(format!(
                "required int but got {} instead ({})",
                other.kind_name(),
                self
            ))),
        }
    }

    /// 属性默认值校验使用的原生校验器，没有校验器的类型返回 None
    pub fn native_validator(&self) -> Option<NativeValidator> {
        match self {
            DataType::String => Some(is_string),
            DataType::Bool => Some(is_bool),
            DataType::Int
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::Timestamp => Some(is_int),
            DataType::Float | DataType::Double => Some(is_double),
            DataType::Date | DataType::Time | DataType::DateTime | DataType::Duration => None,
        }
    }
}

fn is_string(v: &Value) -> bool {
    matches!(v, Value::String(_))
}

fn is_bool(v: &Value) -> bool {
    matches!(v, Value::Bool(_))
}

fn is_int(v: &Value) -> bool {
    matches!(v, Value::Int(_))
}

fn is_double(v: &Value) -> bool {
    matches!(v, Value::Double(_))
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        DataType::values()
            .iter()
            .copied()
            .find(|t| t.as_str() == upper)
            .ok_or_else(|| SchemaError::UnsupportedType(s.to_string()))
    }
}

/// 图空间的点 ID 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VidType {
    FixedString(u32),
    Int64,
}

impl VidType {
    pub fn is_string(&self) -> bool {
        matches!(self, VidType::FixedString(_))
    }
}

impl Default for VidType {
    fn default() -> Self {
        VidType::FixedString(32)
    }
}

impl fmt::Display for VidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VidType::FixedString(len) => write!(f, "FIXED_STRING({})", len),
            VidType::Int64 => f.write_str("INT64"),
        }
    }
}
