//! 点实例

use crate::core::error::SchemaResult;
use crate::core::schema::{IdBuilder, JoinIdBuilder, TagSchema};
use crate::core::value::{Value, VertexKey};
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// 某个 Tag 下的点实例
///
/// 构造时原始 ID 会被改写为 `Schema名称 + 连接符 + 原始ID`，并按 Schema 校验属性。
/// 两个点的 vid 相同即视为同一个点，与属性无关。
#[derive(Debug, Clone)]
pub struct Vertex {
    vid: String,
    schema: Arc<TagSchema>,
    properties: HashMap<String, Value>,
}

impl Vertex {
    pub fn new(
        vid: impl Into<VertexKey>,
        schema: Arc<TagSchema>,
        properties: HashMap<String, Value>,
    ) -> SchemaResult<Self> {
        Self::with_id_builder(vid, schema, properties, &JoinIdBuilder::default())
    }

    pub fn with_id_builder(
        vid: impl Into<VertexKey>,
        schema: Arc<TagSchema>,
        properties: HashMap<String, Value>,
        id_builder: &dyn IdBuilder,
    ) -> SchemaResult<Self> {
        let raw = vid.into().to_string();
        // Schema 未开启索引时保留原始 ID
        let vid = schema
            .build_instance_id(&[raw.as_str()], id_builder)
            .unwrap_or(raw);
        schema.check_instance_properties(&properties)?;
        Ok(Self {
            vid,
            schema,
            properties,
        })
    }

    pub fn vid(&self) -> &str {
        &self.vid
    }

    pub fn schema(&self) -> &Arc<TagSchema> {
        &self.schema
    }

    pub fn properties(&self) -> &HashMap<String, Value> {
        &self.properties
    }

    pub fn property_value(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.vid == other.vid
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vid.hash(state);
    }
}
