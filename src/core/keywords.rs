//! nGQL 保留关键字
//!
//! 保留字不能作为图空间、Tag、Edge Type 或属性的名称，比较时不区分大小写

use crate::core::error::{SchemaError, SchemaResult};

/// nGQL 3.2 保留关键字表（全部大写）
pub const RESERVED_KEYWORDS: &[&str] = &[
    "ACROSS", "ADD", "ALTER", "AND", "AS", "ASC", "ASCENDING", "BALANCE", "BOOL", "BY", "CASE",
    "CHANGE", "COMPACT", "CREATE", "DATE", "DATETIME", "DELETE", "DESC", "DESCENDING", "DESCRIBE",
    "DISTINCT", "DOUBLE", "DOWNLOAD", "DROP", "EDGE", "EDGES", "EXISTS", "EXPLAIN", "FETCH",
    "FIND", "FIXED_STRING", "FLOAT", "FLUSH", "FORMAT", "FROM", "GET", "GO", "GRANT", "IF",
    "IGNORE_EXISTED_INDEX", "IN", "INDEX", "INDEXES", "INGEST", "INSERT", "INT", "INT16", "INT32",
    "INT64", "INT8", "INTERSECT", "IS", "LIMIT", "LIST", "LOOKUP", "MAP", "MATCH", "MINUS", "NO",
    "NOT", "NOT_IN", "NULL", "OF", "OFFSET", "ON", "OR", "ORDER", "OVER", "OVERWRITE", "PROFILE",
    "PROP", "REBUILD", "RECOVER", "REMOVE", "RESTART", "RETURN", "REVERSELY", "REVOKE", "SET",
    "SHOW", "STEP", "STEPS", "STOP", "STRING", "SUBMIT", "TAG", "TAGS", "TIME", "TIMESTAMP", "TO",
    "UNION", "UPDATE", "UPSERT", "UPTO", "USE", "VERTEX", "VERTICES", "WHEN", "WHERE", "WITH",
    "XOR", "YIELD",
];

/// 判断是否为保留关键字
pub fn is_reserved(word: &str) -> bool {
    let upper = word.to_uppercase();
    RESERVED_KEYWORDS.iter().any(|k| *k == upper)
}

/// 校验标识符，合法时原样返回
pub fn check_identifier(word: &str) -> SchemaResult<&str> {
    if word.is_empty() {
        return Err(SchemaError::InvalidArgument("标识符不能为空".to_string()));
    }
    if is_reserved(word) {
        return Err(SchemaError::ReservedWord(word.to_string()));
    }
    Ok(word)
}
