//! CREATE TAG / EDGE / INDEX

use super::NgqlCompiler;
use crate::core::codec::ValueCodec;
use crate::core::error::{SchemaError, SchemaResult};
use crate::core::schema::{EdgeSchema, Property, SchemaDef, TagSchema};
use crate::core::types::DataType;
use crate::utils::string_utils::quote;
use log::debug;

impl NgqlCompiler {
    pub fn create_tag(&self, schema: &TagSchema, if_not_exists: bool) -> SchemaResult<String> {
        Self::create_schema(schema, if_not_exists)
    }

    pub fn create_edge_type(&self, schema: &EdgeSchema, if_not_exists: bool) -> SchemaResult<String> {
        Self::create_schema(schema, if_not_exists)
    }

    fn create_schema(schema: &SchemaDef, if_not_exists: bool) -> SchemaResult<String> {
        let properties = schema
            .properties()
            .iter()
            .map(Self::property_clause)
            .collect::<SchemaResult<Vec<_>>>()?;

        let mut stmt = format!(
            "CREATE {} {}{}({})",
            schema.kind(),
            Self::if_not_exists(if_not_exists),
            schema.name(),
            properties.join(", ")
        );
        if let Some(col) = schema.ttl_col() {
            stmt.push_str(&format!(
                " TTL_DURATION = {}, TTL_COL = {}",
                schema.ttl_duration(),
                quote(col)
            ));
        }
        if !schema.comment().is_empty() {
            stmt.push_str(&format!(" COMMENT={}", quote(schema.comment())));
        }
        stmt.push(';');
        Ok(stmt)
    }

    /// `name TYPE[ NOT NULL][ DEFAULT v][ COMMENT "..."]`
    fn property_clause(property: &Property) -> SchemaResult<String> {
        let mut clause = format!("{} {}", property.name(), property.data_type());
        if !property.nullable() {
            clause.push_str(" NOT NULL");
        }
        if let Some(default) = property.default() {
            let literal = ValueCodec::encode(property.data_type(), default)?;
            clause.push_str(" DEFAULT ");
            clause.push_str(&literal);
        }
        if !property.comment().is_empty() {
            clause.push_str(" COMMENT ");
            clause.push_str(&quote(property.comment()));
        }
        Ok(clause)
    }

    /// 索引列：STRING 类型需要指定索引长度
    fn index_column(property: &Property, string_length: usize) -> String {
        if property.data_type() == DataType::String {
            format!("{}({})", property.name(), string_length)
        } else {
            property.name().to_string()
        }
    }

    fn create_index_statement(schema: &SchemaDef, index_name: &str, columns: &str, if_not_exists: bool) -> String {
        debug!("生成索引 {} on {}", index_name, schema.name());
        format!(
            "CREATE {} INDEX {}{} on {}({});",
            schema.kind(),
            Self::if_not_exists(if_not_exists),
            index_name,
            schema.name(),
            columns
        )
    }

    /// Schema 级索引；Schema 未开启索引时返回 None
    pub fn create_schema_index(&self, schema: &SchemaDef, if_not_exists: bool) -> Option<String> {
        if !schema.index() {
            return None;
        }
        let name = schema.build_schema_index();
        Some(Self::create_index_statement(schema, &name, "", if_not_exists))
    }

    /// 单属性索引；属性未开启索引时返回 None
    pub fn create_property_index(
        &self,
        schema: &SchemaDef,
        property: &str,
        string_length: usize,
        if_not_exists: bool,
    ) -> SchemaResult<Option<String>> {
        let property = schema.property(property)?;
        if !property.index() {
            return Ok(None);
        }
        let name = schema.build_property_index(property);
        let column = Self::index_column(property, string_length);
        Ok(Some(Self::create_index_statement(schema, &name, &column, if_not_exists)))
    }

    /// 复合属性索引，至少两个属性
    pub fn create_compound_property_index(
        &self,
        schema: &SchemaDef,
        properties: &[&str],
        string_length: usize,
        if_not_exists: bool,
    ) -> SchemaResult<String> {
        if properties.len() < 2 {
            return Err(SchemaError::InvalidSchema(format!(
                "compound index of {} requires at least 2 properties, got {}",
                schema.name(),
                properties.len()
            )));
        }
        let resolved = properties
            .iter()
            .map(|name| schema.property(name).cloned())
            .collect::<SchemaResult<Vec<Property>>>()?;
        Ok(Self::compound_index_statement(schema, &resolved, string_length, if_not_exists))
    }

    fn compound_index_statement(
        schema: &SchemaDef,
        properties: &[Property],
        string_length: usize,
        if_not_exists: bool,
    ) -> String {
        let name = schema.build_compound_property_index(properties);
        let columns = properties
            .iter()
            .map(|p| Self::index_column(p, string_length))
            .collect::<Vec<_>>()
            .join(", ");
        Self::create_index_statement(schema, &name, &columns, if_not_exists)
    }

    /// Schema 索引、各属性索引、声明的复合索引，按此顺序生成
    pub fn create_all_indexes(
        &self,
        schema: &SchemaDef,
        string_length: usize,
        if_not_exists: bool,
    ) -> SchemaResult<Vec<String>> {
        let mut statements = Vec::new();
        statements.extend(self.create_schema_index(schema, if_not_exists));
        for property in schema.properties() {
            if let Some(stmt) =
                self.create_property_index(schema, property.name(), string_length, if_not_exists)?
            {
                statements.push(stmt);
            }
        }
        for compound in schema.compound_indexes() {
            statements.push(Self::compound_index_statement(
                schema,
                compound,
                string_length,
                if_not_exists,
            ));
        }
        Ok(statements)
    }
}
