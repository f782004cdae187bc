//! 值编解码
//!
//! - 编码：原生值 → nGQL 字面量文本，用于拼接语句
//! - 解码：图数据库返回值（`WireValue`）→ 原生值
//!
//! 两个方向都按属性声明类型分派，表中没有的类型返回 `UnsupportedType`。

use crate::core::error::{SchemaError, SchemaResult};
use crate::core::schema::SchemaDef;
use crate::core::types::{DataType, VidType};
use crate::core::value::{format_double, EdgeKey, Value, VertexKey, WireValue};
use crate::utils::string_utils::quote;
use std::fmt;

/// 批量解码属性的结果
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedProperties {
    /// 原始属性名 → 原生值，保留空值
    Internal(Vec<(String, Option<Value>)>),
    /// 展示名 → 展示文本；隐藏属性被丢弃，空值显示为占位符
    Display(Vec<(String, String)>),
}

/// 值编解码工具
pub struct ValueCodec;

impl ValueCodec {
    /// 图数据库返回值转原生值
    pub fn decode<W: WireValue + ?Sized>(
        data_type: DataType,
        wire: &W,
        support_null: bool,
    ) -> SchemaResult<Option<Value>> {
        if support_null && wire.is_null() {
            return Ok(None);
        }
        let value = match data_type {
            DataType::Int
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64 => Value::Int(wire.as_int()?),
            DataType::String => Value::String(wire.as_string()?),
            DataType::Bool => Value::Bool(wire.as_bool()?),
            DataType::Float | DataType::Double => Value::Double(wire.as_double()?),
            // TODO: 客户端提供时间类型访问器后改为按时间解码
            DataType::Timestamp => Value::Int(wire.as_int()?),
            DataType::Date | DataType::Time | DataType::DateTime | DataType::Duration => {
                return Err(SchemaError::UnsupportedType(format!(
                    "not support decode {} yet",
                    data_type
                )))
            }
        };
        Ok(Some(value))
    }

    /// 原生值转 nGQL 字面量
    pub fn encode(data_type: DataType, value: &Value) -> SchemaResult<String> {
        match (data_type, value) {
            (DataType::Date | DataType::Time | DataType::DateTime | DataType::Duration, _) => {
                Err(SchemaError::UnsupportedType(format!(
                    "{} is not support to encode yet",
                    data_type
                )))
            }
            (DataType::String, Value::String(s)) => Ok(quote(s)),
            (DataType::Bool, Value::Bool(b)) => Ok(b.to_string()),
            (DataType::Float | DataType::Double, Value::Double(d)) => {
                if !d.is_finite() {
                    return Err(SchemaError::InvalidArgument(format!(
                        "{} can not encode non-finite value {}",
                        data_type, d
                    )));
                }
                Ok(format_double(*d))
            }
            (t, Value::Int(i)) if t.is_integer() || t == DataType::Timestamp => Ok(i.to_string()),
            (t, v) => Err(SchemaError::TypeMismatch(format!(
                "can not encode {} as {}",
                v.kind_name(),
                t
            ))),
        }
    }

    pub fn encode_string(s: &str) -> String {
        quote(s)
    }

    pub fn encode_int(i: i64) -> String {
        i.to_string()
    }

    pub fn decode_string<W: WireValue + ?Sized>(wire: &W, support_null: bool) -> SchemaResult<Option<String>> {
        Ok(Self::decode(DataType::String, wire, support_null)?.and_then(|v| match v {
            Value::String(s) => Some(s),
            _ => None,
        }))
    }

    pub fn decode_int<W: WireValue + ?Sized>(wire: &W, support_null: bool) -> SchemaResult<Option<i64>> {
        Ok(Self::decode(DataType::Int, wire, support_null)?.and_then(|v| v.as_int()))
    }

    /// 按图空间的 vid 类型编码点 ID
    ///
    /// INT64 空间只接受十进制整数文本，拼接出的 `A__7` 之类 ID 返回 `InvalidArgument`。
    pub fn encode_id(id: impl fmt::Display, vid_type: VidType) -> SchemaResult<String> {
        let text = id.to_string();
        match vid_type {
            VidType::FixedString(_) => Ok(quote(&text)),
            VidType::Int64 => text.parse::<i64>().map(Self::encode_int).map_err(|_| {
                SchemaError::InvalidArgument(format!("vid {} is not a valid {}", text, vid_type))
            }),
        }
    }

    pub fn decode_id<W: WireValue + ?Sized>(wire: &W, vid_type: VidType) -> SchemaResult<VertexKey> {
        match vid_type {
            VidType::FixedString(_) => wire.as_string().map(VertexKey::String),
            VidType::Int64 => wire.as_int().map(VertexKey::Int),
        }
    }

    pub fn encode_uuid(uuid: &str) -> String {
        quote(uuid)
    }

    pub fn decode_uuid<W: WireValue + ?Sized>(wire: &W) -> SchemaResult<String> {
        match Self::decode(DataType::String, wire, false)? {
            Some(Value::String(s)) => Ok(s),
            _ => Err(SchemaError::TypeMismatch("uuid requires string".to_string())),
        }
    }

    /// 边定位片段：`"src"->"dst"@rank`
    pub fn edge_literal(key: &EdgeKey, vid_type: VidType) -> SchemaResult<String> {
        Ok(format!(
            "{}->{}@{}",
            Self::encode_id(&key.src, vid_type)?,
            Self::encode_id(&key.dst, vid_type)?,
            key.rank
        ))
    }

    pub fn encode_property(name: &str, value: &Value, schema: &SchemaDef) -> SchemaResult<String> {
        Self::encode(schema.property_type(name)?, value)
    }

    pub fn decode_property<W: WireValue + ?Sized>(
        name: &str,
        wire: &W,
        schema: &SchemaDef,
    ) -> SchemaResult<Option<Value>> {
        Self::decode(schema.property_type(name)?, wire, true)
    }

    /// 批量解码点或边的属性，保持输入顺序
    pub fn decode_properties<'a, W, I>(
        properties: I,
        schema: &SchemaDef,
        for_display: bool,
        null_placeholder: &str,
    ) -> SchemaResult<DecodedProperties>
    where
        W: WireValue + ?Sized + 'a,
        I: IntoIterator<Item = (&'a str, &'a W)>,
    {
        if !for_display {
            let mut result = Vec::new();
            for (name, wire) in properties {
                let property = schema.property(name)?;
                let value = Self::decode(property.data_type(), wire, property.nullable())?;
                result.push((name.to_string(), value));
            }
            return Ok(DecodedProperties::Internal(result));
        }

        let mut result = Vec::new();
        for (name, wire) in properties {
            let property = schema.property(name)?;
            // 面向用户时不展示 id、uuid 等信息
            let Some(display) = property.display() else {
                continue;
            };
            let text = match Self::decode(property.data_type(), wire, property.nullable())? {
                Some(v) => v.to_string(),
                None => null_placeholder.to_string(),
            };
            result.push((display.to_string(), format!(" {}", text)));
        }
        Ok(DecodedProperties::Display(result))
    }
}
