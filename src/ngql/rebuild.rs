//! REBUILD INDEX
//!
//! 不带索引名的 `REBUILD ... INDEX` 会重建整个图空间的同类索引，
//! 没有可用的索引名时返回错误而不生成语句。

use super::NgqlCompiler;
use crate::core::error::{SchemaError, SchemaResult};
use crate::core::schema::{EdgeSchema, SchemaDef, TagSchema};

impl NgqlCompiler {
    /// include_properties 为真时重建已登记的全部索引，否则只重建 Schema 级索引
    pub fn rebuild_tag_index(&self, schema: &TagSchema, include_properties: bool) -> SchemaResult<String> {
        Self::rebuild_registered(schema, include_properties)
    }

    pub fn rebuild_edge_index(&self, schema: &EdgeSchema, include_properties: bool) -> SchemaResult<String> {
        Self::rebuild_registered(schema, include_properties)
    }

    /// 重建指定名称的索引
    pub fn rebuild_indexes(&self, schema: &SchemaDef, names: &[&str]) -> SchemaResult<String> {
        Self::rebuild_statement(schema, &names.join(","))
    }

    fn rebuild_registered(schema: &SchemaDef, include_properties: bool) -> SchemaResult<String> {
        let names = if include_properties {
            schema.index_names().join(",")
        } else {
            schema.primary_index_name().unwrap_or_default()
        };
        Self::rebuild_statement(schema, &names)
    }

    fn rebuild_statement(schema: &SchemaDef, names: &str) -> SchemaResult<String> {
        if names.is_empty() {
            return Err(SchemaError::InvalidArgument(format!(
                "no index of {} to rebuild",
                schema.name()
            )));
        }
        Ok(format!("REBUILD {} INDEX {};", schema.kind(), names))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::Property;
    use crate::core::types::DataType;

    #[test]
    fn test_rebuild_tag_index() {
        let compiler = NgqlCompiler::default();
        let tag = TagSchema::builder("A")
            .property(Property::builder("p1", DataType::Int).index(true).build().unwrap())
            .build()
            .unwrap();

        compiler.create_schema_index(&tag, false);
        compiler.create_property_index(&tag, "p1", 0, false).unwrap();

        assert_eq!(compiler.rebuild_tag_index(&tag, false), Ok("REBUILD TAG INDEX i_T_A;".to_string()));
        assert_eq!(
            compiler.rebuild_tag_index(&tag, true),
            Ok("REBUILD TAG INDEX i_T_A,i_T_A_P_p1;".to_string())
        );
    }

    #[test]
    fn test_rebuild_without_registered_index() {
        let compiler = NgqlCompiler::default();
        let tag = TagSchema::builder("A").build().unwrap();
        assert!(matches!(
            compiler.rebuild_tag_index(&tag, false),
            Err(SchemaError::InvalidArgument(_))
        ));
        assert!(matches!(
            compiler.rebuild_tag_index(&tag, true),
            Err(SchemaError::InvalidArgument(_))
        ));

        // 只有属性索引时没有 Schema 级索引可重建
        let tag = TagSchema::builder("B")
            .property(Property::builder("p1", DataType::Int).index(true).build().unwrap())
            .build()
            .unwrap();
        compiler.create_property_index(&tag, "p1", 0, false).unwrap();
        assert!(compiler.rebuild_tag_index(&tag, false).is_err());
        assert_eq!(compiler.rebuild_tag_index(&tag, true), Ok("REBUILD TAG INDEX i_T_B_P_p1;".to_string()));
    }

    #[test]
    fn test_rebuild_edge_index() {
        let compiler = NgqlCompiler::default();
        let edge = EdgeSchema::builder("follow").build().unwrap();
        compiler.create_schema_index(&edge, true);
        assert_eq!(
            compiler.rebuild_edge_index(&edge, false),
            Ok("REBUILD EDGE INDEX i_E_follow;".to_string())
        );
    }

    #[test]
    fn test_rebuild_named_indexes() {
        let compiler = NgqlCompiler::default();
        let edge = EdgeSchema::builder("follow").build().unwrap();
        assert_eq!(
            compiler.rebuild_indexes(&edge, &["x", "y"]),
            Ok("REBUILD EDGE INDEX x,y;".to_string())
        );
        assert!(matches!(
            compiler.rebuild_indexes(&edge, &[]),
            Err(SchemaError::InvalidArgument(_))
        ));
    }
}
