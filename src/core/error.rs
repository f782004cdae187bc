//! 统一错误处理 for graphdb-schema
//!
//! 所有错误均为调用方输入错误，在违反约束的位置同步返回，不做重试：
//! - 构造期错误：保留字、Schema 定义不合法、实例属性缺失或类型不符
//! - 调用期错误：编解码类型不支持、属性不存在、参数非法

use thiserror::Error;

/// Schema 层统一错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("保留字冲突: {0} 是 nGQL 保留关键字")]
    ReservedWord(String),

    #[error("无效的Schema定义: {0}")]
    InvalidSchema(String),

    #[error("类型不匹配: {0}")]
    TypeMismatch(String),

    #[error("不支持的数据类型: {0}")]
    UnsupportedType(String),

    #[error("属性未找到: {property} 未在 {schema} 中定义")]
    PropertyNotFound { property: String, schema: String },

    #[error("不允许空值: {property} of {schema} 定义为 NOT NULL 但取值为空")]
    NullNotAllowed { property: String, schema: String },

    #[error("参数错误: {0}")]
    InvalidArgument(String),
}

impl SchemaError {
    pub fn property_not_found(property: impl Into<String>, schema: impl Into<String>) -> Self {
        SchemaError::PropertyNotFound {
            property: property.into(),
            schema: schema.into(),
        }
    }

    pub fn null_not_allowed(property: impl Into<String>, schema: impl Into<String>) -> Self {
        SchemaError::NullNotAllowed {
            property: property.into(),
            schema: schema.into(),
        }
    }

    /// 为类型错误附加属性和 Schema 上下文，其余错误原样返回
    pub fn in_property(self, property: &str, schema: &str) -> Self {
        match self {
            SchemaError::TypeMismatch(msg) => {
                SchemaError::TypeMismatch(format!("{} of {}: {}", property, schema, msg))
            }
            other => other,
        }
    }
}

/// 统一的结果类型
pub type SchemaResult<T> = Result<T, SchemaError>;
