//! INSERT VERTEX / EDGE

use super::{NgqlCompiler, Statements};
use crate::core::codec::ValueCodec;
use crate::core::error::{SchemaError, SchemaResult};
use crate::core::instance::{Edge, Edges, Vertex, Vertexes};
use crate::core::schema::{EdgeSchema, SchemaDef, TagSchema};
use crate::core::value::Value;

impl NgqlCompiler {
    /// 批量插入点，空列表返回 None
    pub fn insert_vertexes(
        &self,
        schema: &TagSchema,
        vertexes: &[Vertex],
        if_not_exists: bool,
    ) -> SchemaResult<Option<Statements>> {
        let mut fragments = Vec::with_capacity(vertexes.len());
        for vertex in vertexes {
            Self::check_member(schema, vertex.schema())?;
            fragments.push(format!(
                "{}:({})",
                ValueCodec::encode_id(vertex.vid(), self.config.vid_type)?,
                Self::value_list(schema, |name| vertex.property_value(name))?
            ));
        }
        let fixed = Self::insert_prefix(schema, "VERTEX", if_not_exists);
        self.assemble(&fixed, fragments, "")
    }

    pub fn insert_vertex_set(&self, vertexes: &Vertexes, if_not_exists: bool) -> SchemaResult<Option<Statements>> {
        self.insert_vertexes(vertexes.schema(), vertexes.members(), if_not_exists)
    }

    /// 批量插入边，rank 为 0 时省略
    pub fn insert_edges(
        &self,
        schema: &EdgeSchema,
        edges: &[Edge],
        if_not_exists: bool,
    ) -> SchemaResult<Option<Statements>> {
        let vid_type = self.config.vid_type;
        let mut fragments = Vec::with_capacity(edges.len());
        for edge in edges {
            Self::check_member(schema, edge.schema())?;
            let rank = if edge.rank() == 0 {
                String::new()
            } else {
                format!("@{}", edge.rank())
            };
            fragments.push(format!(
                "{}->{}{}:({})",
                ValueCodec::encode_id(edge.src_vid(), vid_type)?,
                ValueCodec::encode_id(edge.dst_vid(), vid_type)?,
                rank,
                Self::value_list(schema, |name| edge.property_value(name))?
            ));
        }
        let fixed = Self::insert_prefix(schema, "EDGE", if_not_exists);
        self.assemble(&fixed, fragments, "")
    }

    pub fn insert_edge_set(&self, edges: &Edges, if_not_exists: bool) -> SchemaResult<Option<Statements>> {
        self.insert_edges(edges.schema(), edges.members(), if_not_exists)
    }

    /// `INSERT {VERTEX|EDGE} [IF NOT EXISTS ]name(p1,p2) VALUES `
    fn insert_prefix(schema: &SchemaDef, target: &str, if_not_exists: bool) -> String {
        format!(
            "INSERT {} {}{}({}) VALUES ",
            target,
            Self::if_not_exists(if_not_exists),
            schema.name(),
            schema.property_names().join(",")
        )
    }

    /// 按 Schema 属性顺序编码取值，缺失或空值为 `NULL`
    fn value_list<'a, F>(schema: &SchemaDef, lookup: F) -> SchemaResult<String>
    where
        F: Fn(&str) -> Option<&'a Value>,
    {
        let mut values = Vec::with_capacity(schema.properties().len());
        for property in schema.properties() {
            let literal = match lookup(property.name()) {
                None => "NULL".to_string(),
                Some(v) => ValueCodec::encode(property.data_type(), v)
                    .map_err(|e| e.in_property(property.name(), schema.name()))?,
            };
            values.push(literal);
        }
        Ok(values.join(", "))
    }

    fn check_member(schema: &SchemaDef, member_schema: &SchemaDef) -> SchemaResult<()> {
        if schema.name() != member_schema.name() {
            return Err(SchemaError::InvalidArgument(format!(
                "instance of {} can not be inserted as {}",
                member_schema.name(),
                schema.name()
            )));
        }
        Ok(())
    }
}
