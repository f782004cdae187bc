//! 图空间语句

use super::NgqlCompiler;
use crate::core::error::{SchemaError, SchemaResult};
use crate::core::keywords::check_identifier;
use crate::core::types::VidType;
use crate::utils::string_utils::quote;

impl NgqlCompiler {
    pub fn create_space(
        &self,
        name: &str,
        partition_num: u32,
        replica_factor: u32,
        vid_type: VidType,
        if_not_exists: bool,
        comment: &str,
    ) -> SchemaResult<String> {
        check_identifier(name)?;
        if partition_num == 0 || replica_factor == 0 {
            return Err(SchemaError::InvalidArgument(format!(
                "partition_num and replica_factor of space {} must be > 0",
                name
            )));
        }
        let comment = if comment.is_empty() {
            String::new()
        } else {
            format!(" COMMENT={}", quote(comment))
        };
        Ok(format!(
            "CREATE SPACE {}{}(partition_num={}, replica_factor={}, vid_type={}){};",
            Self::if_not_exists(if_not_exists),
            name,
            partition_num,
            replica_factor,
            vid_type,
            comment
        ))
    }

    /// 以已有图空间的 Schema 创建新图空间
    pub fn clone_space(&self, new_space: &str, old_space: &str, if_not_exists: bool) -> SchemaResult<String> {
        check_identifier(new_space)?;
        check_identifier(old_space)?;
        Ok(format!(
            "CREATE SPACE {}{} AS {};",
            Self::if_not_exists(if_not_exists),
            new_space,
            old_space
        ))
    }

    pub fn drop_space(&self, name: &str) -> SchemaResult<String> {
        Ok(format!("DROP SPACE IF EXISTS {};", check_identifier(name)?))
    }

    /// 清空点和边，保留 Schema 与索引
    pub fn clear_space(&self, name: &str) -> SchemaResult<String> {
        Ok(format!("CLEAR SPACE IF EXISTS {};", check_identifier(name)?))
    }

    pub fn use_space(&self, name: &str) -> SchemaResult<String> {
        Ok(format!("USE {};", check_identifier(name)?))
    }

    pub fn describe_space(&self, name: &str) -> SchemaResult<String> {
        Ok(format!("DESCRIBE SPACE {};", check_identifier(name)?))
    }

    pub fn show_spaces(&self) -> String {
        "SHOW SPACES;".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_space() {
        let compiler = NgqlCompiler::default();
        assert_eq!(
            compiler.create_space("basketball", 10, 1, VidType::default(), true, ""),
            Ok("CREATE SPACE IF NOT EXISTS basketball(partition_num=10, replica_factor=1, \
                vid_type=FIXED_STRING(32));"
                .to_string())
        );
        assert_eq!(
            compiler.create_space("s", 1, 3, VidType::Int64, false, "测试"),
            Ok("CREATE SPACE s(partition_num=1, replica_factor=3, vid_type=INT64) COMMENT=\"测试\";"
                .to_string())
        );
        assert!(matches!(
            compiler.create_space("s", 0, 1, VidType::Int64, false, ""),
            Err(SchemaError::InvalidArgument(_))
        ));
        assert_eq!(
            compiler.create_space("tag", 1, 1, VidType::Int64, false, ""),
            Err(SchemaError::ReservedWord("tag".to_string()))
        );
    }

    #[test]
    fn test_space_templates() {
        let compiler = NgqlCompiler::default();
        assert_eq!(compiler.clone_space("b", "a", true), Ok("CREATE SPACE IF NOT EXISTS b AS a;".to_string()));
        assert_eq!(compiler.drop_space("a"), Ok("DROP SPACE IF EXISTS a;".to_string()));
        assert_eq!(compiler.clear_space("a"), Ok("CLEAR SPACE IF EXISTS a;".to_string()));
        assert_eq!(compiler.use_space("a"), Ok("USE a;".to_string()));
        assert_eq!(compiler.describe_space("a"), Ok("DESCRIBE SPACE a;".to_string()));
        assert_eq!(compiler.show_spaces(), "SHOW SPACES;");
        assert!(matches!(compiler.use_space(""), Err(SchemaError::InvalidArgument(_))));
    }
}
