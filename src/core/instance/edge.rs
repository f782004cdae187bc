//! 边实例

use crate::core::error::SchemaResult;
use crate::core::schema::EdgeSchema;
use crate::core::value::{EdgeKey, Value, VertexKey};
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// 某个 Edge Type 下的边实例
///
/// 起点、终点、边类型、rank 全部相同的边视为同一条边
#[derive(Debug, Clone)]
pub struct Edge {
    src_vid: VertexKey,
    dst_vid: VertexKey,
    schema: Arc<EdgeSchema>,
    properties: HashMap<String, Value>,
    rank: i64,
}

impl Edge {
    pub fn new(
        src_vid: impl Into<VertexKey>,
        dst_vid: impl Into<VertexKey>,
        schema: Arc<EdgeSchema>,
        properties: HashMap<String, Value>,
    ) -> SchemaResult<Self> {
        schema.check_instance_properties(&properties)?;
        Ok(Self {
            src_vid: src_vid.into(),
            dst_vid: dst_vid.into(),
            schema,
            properties,
            rank: 0,
        })
    }

    pub fn with_rank(mut self, rank: i64) -> Self {
        self.rank = rank;
        self
    }

    pub fn src_vid(&self) -> &VertexKey {
        &self.src_vid
    }

    pub fn dst_vid(&self) -> &VertexKey {
        &self.dst_vid
    }

    pub fn schema(&self) -> &Arc<EdgeSchema> {
        &self.schema
    }

    pub fn properties(&self) -> &HashMap<String, Value> {
        &self.properties
    }

    pub fn rank(&self) -> i64 {
        self.rank
    }

    pub fn property_value(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// 用于 DELETE/UPDATE 的边定位
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.src_vid.clone(), self.rank, self.dst_vid.clone())
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.src_vid == other.src_vid
            && self.dst_vid == other.dst_vid
            && self.schema == other.schema
            && self.rank == other.rank
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.src_vid.hash(state);
        self.dst_vid.hash(state);
        self.rank.hash(state);
        self.schema.name().hash(state);
    }
}
