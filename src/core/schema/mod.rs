//! Schema 模型
//!
//! 属性定义、Tag/Edge Type 定义、索引命名与点 ID 生成

pub mod definition;
pub mod id;
pub mod index;
pub mod property;

pub use definition::{EdgeSchema, SchemaBuilder, SchemaDef, SchemaKind, SchemaVariant, TagSchema};
pub use id::{IdBuilder, JoinIdBuilder, DEFAULT_VID_JOINER};
pub use index::{DefaultIndexNameBuilder, IndexNameBuilder, IndexRegistry};
pub use property::{Property, PropertyBuilder};
