//! Schema 定义：Tag 与 Edge Type
//!
//! Schema 在构造后视为不可变；唯一的可变部分是 `IndexRegistry`，
//! 由语句编译器在生成 CREATE INDEX 语句时追加索引名，写入经由 `RwLock` 串行化。
//!
//! Schema 的相等与哈希只比较名称。

use super::id::IdBuilder;
use super::index::{DefaultIndexNameBuilder, IndexNameBuilder, IndexRegistry};
use super::property::Property;
use crate::core::error::{SchemaError, SchemaResult};
use crate::core::keywords::check_identifier;
use crate::core::types::DataType;
use crate::core::value::Value;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;

/// Schema 类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    Tag,
    Edge,
}

impl SchemaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaKind::Tag => "TAG",
            SchemaKind::Edge => "EDGE",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag 与 Edge Type 共有的定义
#[derive(Debug)]
pub struct SchemaDef {
    name: String,
    kind: SchemaKind,
    properties: Vec<Property>,
    property_map: HashMap<String, usize>,
    compound_indexes: Vec<Vec<Property>>,
    comment: String,
    ttl_duration: i64,
    ttl_col: Option<String>,
    index: bool,
    index_name_builder: Box<dyn IndexNameBuilder>,
    registry: RwLock<IndexRegistry>,
}

impl SchemaDef {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SchemaKind {
        self.kind
    }

    /// 最终属性集合（声明顺序）
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn property_names(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.name()).collect()
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.property_map.contains_key(name)
    }

    pub fn property(&self, name: &str) -> SchemaResult<&Property> {
        self.property_map
            .get(name)
            .map(|&i| &self.properties[i])
            .ok_or_else(|| SchemaError::property_not_found(name, &self.name))
    }

    pub fn property_type(&self, name: &str) -> SchemaResult<DataType> {
        self.property(name).map(|p| p.data_type())
    }

    pub fn property_display(&self, name: &str) -> SchemaResult<Option<&str>> {
        self.property(name).map(|p| p.display())
    }

    pub fn property_supports_null(&self, name: &str) -> SchemaResult<bool> {
        self.property(name).map(|p| p.nullable())
    }

    /// 复合属性索引（已解析为属性定义）
    pub fn compound_indexes(&self) -> &[Vec<Property>] {
        &self.compound_indexes
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn ttl_duration(&self) -> i64 {
        self.ttl_duration
    }

    pub fn ttl_col(&self) -> Option<&str> {
        self.ttl_col.as_deref()
    }

    /// 是否建立原生索引
    pub fn index(&self) -> bool {
        self.index
    }

    /// 生成实例 ID；Schema 未开启索引时返回 None
    pub fn build_instance_id(&self, raw_parts: &[&str], builder: &dyn IdBuilder) -> Option<String> {
        if self.index {
            Some(builder.build(&self.name, raw_parts))
        } else {
            None
        }
    }

    pub fn build_property_index(&self, property: &Property) -> String {
        let name = self.index_name_builder.build(
            &self.name,
            self.kind,
            Some(std::slice::from_ref(property)),
        );
        self.registry.write().record(name.clone());
        name
    }

    pub fn build_compound_property_index(&self, properties: &[Property]) -> String {
        let name = self.index_name_builder.build(&self.name, self.kind, Some(properties));
        self.registry.write().record(name.clone());
        name
    }

    pub fn build_schema_index(&self) -> String {
        let name = self.index_name_builder.build(&self.name, self.kind, None);
        self.registry.write().record_primary(name.clone());
        name
    }

    /// 已生成的全部索引名
    pub fn index_names(&self) -> Vec<String> {
        self.registry.read().names().to_vec()
    }

    /// Schema 级主索引名
    pub fn primary_index_name(&self) -> Option<String> {
        self.registry.read().primary().map(str::to_string)
    }

    /// 检查实例属性是否满足定义
    pub fn check_instance_properties(&self, values: &HashMap<String, Value>) -> SchemaResult<()> {
        for p in &self.properties {
            let value = values.get(p.name());
            if !p.nullable() && value.is_none() {
                return Err(SchemaError::null_not_allowed(p.name(), &self.name));
            }
            p.data_type()
                .check_value(value, true)
                .map_err(|e| e.in_property(p.name(), &self.name))?;
        }
        Ok(())
    }
}

impl PartialEq for SchemaDef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for SchemaDef {}

impl Hash for SchemaDef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// 点类型
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct TagSchema {
    def: SchemaDef,
}

impl TagSchema {
    pub fn builder(name: impl Into<String>) -> SchemaBuilder<TagSchema> {
        SchemaBuilder::new(name)
    }
}

impl Deref for TagSchema {
    type Target = SchemaDef;

    fn deref(&self) -> &SchemaDef {
        &self.def
    }
}

impl fmt::Display for TagSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag-Schema: {} with properties: {:?}", self.name(), self.property_names())
    }
}

/// 边类型
#[derive(Debug)]
pub struct EdgeSchema {
    def: SchemaDef,
    bidirectional: bool,
}

impl EdgeSchema {
    pub fn builder(name: impl Into<String>) -> SchemaBuilder<EdgeSchema> {
        SchemaBuilder::new(name)
    }

    /// 是否为双向边类型
    pub fn is_bidirectional(&self) -> bool {
        self.bidirectional
    }
}

impl Deref for EdgeSchema {
    type Target = SchemaDef;

    fn deref(&self) -> &SchemaDef {
        &self.def
    }
}

impl PartialEq for EdgeSchema {
    fn eq(&self, other: &Self) -> bool {
        self.def == other.def
    }
}

impl Eq for EdgeSchema {}

impl Hash for EdgeSchema {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.def.hash(state);
    }
}

impl fmt::Display for EdgeSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge-Schema: {} with properties: {:?}", self.name(), self.property_names())
    }
}

/// 由构造器产出的 Schema 变体
pub trait SchemaVariant: Sized + sealed::Sealed {
    const KIND: SchemaKind;

    fn from_def(def: SchemaDef, bidirectional: bool) -> Self;
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::TagSchema {}
    impl Sealed for super::EdgeSchema {}
}

impl SchemaVariant for TagSchema {
    const KIND: SchemaKind = SchemaKind::Tag;

    fn from_def(def: SchemaDef, _bidirectional: bool) -> Self {
        TagSchema { def }
    }
}

impl SchemaVariant for EdgeSchema {
    const KIND: SchemaKind = SchemaKind::Edge;

    fn from_def(def: SchemaDef, bidirectional: bool) -> Self {
        EdgeSchema { def, bidirectional }
    }
}

/// Schema 构造器，`build()` 时完成全部校验
#[derive(Debug)]
pub struct SchemaBuilder<S> {
    name: String,
    properties: Vec<Property>,
    unified_properties: Vec<Property>,
    compound_indexes: Vec<Vec<String>>,
    comment: String,
    ttl_duration: i64,
    ttl_col: Option<String>,
    index: bool,
    index_name_builder: Option<Box<dyn IndexNameBuilder>>,
    bidirectional: bool,
    _variant: PhantomData<S>,
}

impl<S: SchemaVariant> SchemaBuilder<S> {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            unified_properties: Vec::new(),
            compound_indexes: Vec::new(),
            comment: String::new(),
            ttl_duration: 0,
            ttl_col: None,
            index: true,
            index_name_builder: None,
            bidirectional: false,
            _variant: PhantomData,
        }
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn properties(mut self, properties: impl IntoIterator<Item = Property>) -> Self {
        self.properties.extend(properties);
        self
    }

    /// 统一追加到每个 Schema 的属性
    pub fn unified_properties(mut self, properties: impl IntoIterator<Item = Property>) -> Self {
        self.unified_properties.extend(properties);
        self
    }

    /// 复合属性索引，至少包含两个已定义的属性名
    pub fn compound_index<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.compound_indexes.push(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// 过期时间（秒），0 表示永不过期
    pub fn ttl(mut self, duration: i64, col: Option<&str>) -> Self {
        self.ttl_duration = duration;
        self.ttl_col = col.map(str::to_string);
        self
    }

    pub fn index(mut self, index: bool) -> Self {
        self.index = index;
        self
    }

    pub fn index_name_builder(mut self, builder: impl IndexNameBuilder + 'static) -> Self {
        self.index_name_builder = Some(Box::new(builder));
        self
    }

    pub fn build(self) -> SchemaResult<S> {
        check_identifier(&self.name)?;

        if self.ttl_duration < 0 {
            return Err(SchemaError::InvalidSchema(format!(
                "ttl_duration of {} must be >= 0, got {}",
                self.name, self.ttl_duration
            )));
        }

        let mut seen = HashSet::new();
        let properties: Vec<Property> = self
            .properties
            .into_iter()
            .chain(self.unified_properties)
            .filter(|p| seen.insert(p.name().to_string()))
            .collect();
        let property_map: HashMap<String, usize> = properties
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name().to_string(), i))
            .collect();

        let mut compound_indexes = Vec::with_capacity(self.compound_indexes.len());
        for names in &self.compound_indexes {
            if names.len() < 2 {
                return Err(SchemaError::InvalidSchema(format!(
                    "compound index of {} requires at least 2 properties, got {}",
                    self.name,
                    names.len()
                )));
            }
            let mut resolved = Vec::with_capacity(names.len());
            for n in names {
                let i = property_map.get(n).ok_or_else(|| {
                    SchemaError::InvalidSchema(format!(
                        "property: {} is not defined in {}",
                        n, self.name
                    ))
                })?;
                resolved.push(properties[*i].clone());
            }
            compound_indexes.push(resolved);
        }

        if let Some(col) = &self.ttl_col {
            let ty = property_map
                .get(col)
                .map(|&i| properties[i].data_type())
                .ok_or_else(|| {
                    SchemaError::InvalidSchema(format!(
                        "ttl_col: {} is not defined in {}",
                        col, self.name
                    ))
                })?;
            if !ty.is_integer() && ty != DataType::Timestamp {
                return Err(SchemaError::InvalidSchema(format!(
                    "ttl_col: {} of {} must be INT or TIMESTAMP, got {}",
                    col, self.name, ty
                )));
            }
        }

        let def = SchemaDef {
            name: self.name,
            kind: S::KIND,
            properties,
            property_map,
            compound_indexes,
            comment: self.comment,
            ttl_duration: self.ttl_duration,
            ttl_col: self.ttl_col,
            index: self.index,
            index_name_builder: self
                .index_name_builder
                .unwrap_or_else(|| Box::new(DefaultIndexNameBuilder)),
            registry: RwLock::new(IndexRegistry::new()),
        };
        Ok(S::from_def(def, self.bidirectional))
    }
}

impl SchemaBuilder<EdgeSchema> {
    pub fn bidirectional(mut self, bidirectional: bool) -> Self {
        self.bidirectional = bidirectional;
        self
    }
}
