//! 属性定义
//!
//! 属性通过 `Property::builder` 构造，`build()` 时一次性完成全部校验：
//! 名称不能是保留字、NOT NULL 属性要求设置默认值时必须提供默认值、默认值必须通过类型的原生校验器。
//!
//! 属性的相等与哈希只比较名称。同名但其他字段不同的两个属性会被视为同一个属性，
//! 在去重合并时只保留先出现的那个。

use crate::core::error::{SchemaError, SchemaResult};
use crate::core::keywords::check_identifier;
use crate::core::types::DataType;
use crate::core::value::Value;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone)]
pub struct Property {
    name: String,
    data_type: DataType,
    nullable: bool,
    set_default: bool,
    default: Option<Value>,
    index: bool,
    display: Option<String>,
    comment: String,
}

impl Property {
    pub fn builder(name: impl Into<String>, data_type: DataType) -> PropertyBuilder {
        PropertyBuilder {
            name: name.into(),
            data_type,
            nullable: true,
            set_default: false,
            default: None,
            index: false,
            display: DisplayName::SameAsName,
            comment: String::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// 是否允许空值
    pub fn nullable(&self) -> bool {
        self.nullable
    }

    /// 定义时是否要求默认值
    pub fn set_default(&self) -> bool {
        self.set_default
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// 是否为该属性建立原生索引
    pub fn index(&self) -> bool {
        self.index
    }

    /// 展示名称，`None` 表示面向用户时不展示该属性
    pub fn display(&self) -> Option<&str> {
        self.display.as_deref()
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}

impl PartialEq for Property {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Property {}

impl Hash for Property {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

#[derive(Debug, Clone)]
enum DisplayName {
    SameAsName,
    Custom(String),
    Hidden,
}

/// 属性构造器
#[derive(Debug, Clone)]
pub struct PropertyBuilder {
    name: String,
    data_type: DataType,
    nullable: bool,
    set_default: bool,
    default: Option<Value>,
    index: bool,
    display: DisplayName,
    comment: String,
}

impl PropertyBuilder {
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn not_null(self) -> Self {
        self.nullable(false)
    }

    /// 声明需要默认值，但不在此处给出具体值
    pub fn set_default(mut self, set_default: bool) -> Self {
        self.set_default = set_default;
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.set_default = true;
        self.default = Some(value.into());
        self
    }

    pub fn index(mut self, index: bool) -> Self {
        self.index = index;
        self
    }

    /// 自定义展示名称，空字符串等同于使用属性名
    pub fn display(mut self, display: impl Into<String>) -> Self {
        let display = display.into();
        self.display = if display.is_empty() {
            DisplayName::SameAsName
        } else {
            DisplayName::Custom(display)
        };
        self
    }

    /// 面向用户展示时隐藏该属性（如 id、uuid）
    pub fn hidden(mut self) -> Self {
        self.display = DisplayName::Hidden;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn build(self) -> SchemaResult<Property> {
        check_identifier(&self.name)?;

        if !self.nullable && self.set_default && self.default.is_none() {
            return Err(SchemaError::InvalidSchema(format!(
                "property: '{}' does not support null but got null as default value",
                self.name
            )));
        }

        if let Some(default) = &self.default {
            let validator = self.data_type.native_validator().ok_or_else(|| {
                SchemaError::UnsupportedType(format!("{} 暂不支持默认值校验", self.data_type))
            })?;
            if !validator(default) {
                return Err(SchemaError::TypeMismatch(format!(
                    "default value of '{}' requires {} but got {}",
                    self.name,
                    self.data_type,
                    default.kind_name()
                )));
            }
        }

        let display = match self.display {
            DisplayName::SameAsName => Some(self.name.clone()),
            DisplayName::Custom(d) => Some(d),
            DisplayName::Hidden => None,
        };

        Ok(Property {
            name: self.name,
            data_type: self.data_type,
            nullable: self.nullable,
            set_default: self.set_default,
            default: self.default,
            index: self.index,
            display,
            comment: self.comment,
        })
    }
}
