//! DELETE / UPDATE

use super::{NgqlCompiler, Statements};
use crate::core::codec::ValueCodec;
use crate::core::error::{SchemaError, SchemaResult};
use crate::core::schema::EdgeSchema;
use crate::core::value::{EdgeKey, Value, VertexKey};

impl NgqlCompiler {
    /// `DELETE EDGE name lit1, lit2;`，空列表返回 None
    pub fn delete_edges(&self, schema: &EdgeSchema, keys: &[EdgeKey]) -> SchemaResult<Option<Statements>> {
        let fragments = keys
            .iter()
            .map(|key| ValueCodec::edge_literal(key, self.config.vid_type))
            .collect::<SchemaResult<Vec<_>>>()?;
        self.assemble(&format!("DELETE EDGE {} ", schema.name()), fragments, "")
    }

    /// `DELETE VERTEX id1, id2[ WITH EDGE];`，ID 为最终点 ID
    pub fn delete_vertexes(&self, ids: &[VertexKey], with_edge: bool) -> SchemaResult<Option<Statements>> {
        let fragments = ids
            .iter()
            .map(|id| ValueCodec::encode_id(id, self.config.vid_type))
            .collect::<SchemaResult<Vec<_>>>()?;
        let suffix = if with_edge { " WITH EDGE" } else { "" };
        self.assemble("DELETE VERTEX ", fragments, suffix)
    }

    /// 更新单条边的属性：`UPDATE EDGE ON name lit SET k1 = v1, k2 = v2;`
    pub fn update_edge(
        &self,
        schema: &EdgeSchema,
        key: &EdgeKey,
        properties: &[(&str, Option<Value>)],
    ) -> SchemaResult<String> {
        if properties.is_empty() {
            return Err(SchemaError::InvalidArgument(format!(
                "update of {} requires at least one property",
                schema.name()
            )));
        }
        let mut assignments = Vec::with_capacity(properties.len());
        for (name, value) in properties {
            let data_type = schema.property_type(name)?;
            let literal = match value {
                None => "NULL".to_string(),
                Some(v) => ValueCodec::encode(data_type, v)
                    .map_err(|e| e.in_property(name, schema.name()))?,
            };
            assignments.push(format!("{} = {}", name, literal));
        }
        Ok(format!(
            "UPDATE EDGE ON {} {} SET {};",
            schema.name(),
            ValueCodec::edge_literal(key, self.config.vid_type)?,
            assignments.join(", ")
        ))
    }
}
