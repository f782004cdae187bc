pub mod codec;
pub mod error;
pub mod instance;
pub mod keywords;
pub mod schema;
pub mod types;
pub mod value;

// 错误和结果类型
pub use error::{SchemaError, SchemaResult};

// 核心数据类型
pub use types::{DataType, VidType};
pub use value::{EdgeKey, Value, VertexKey, WireValue};

// Schema 与实例
pub use instance::{Edge, Edges, Instance, SchemaInstances, Vertex, Vertexes};
pub use schema::{
    EdgeSchema, IdBuilder, IndexNameBuilder, JoinIdBuilder, Property, SchemaDef, SchemaKind,
    TagSchema,
};

// 编解码
pub use codec::{DecodedProperties, ValueCodec};
