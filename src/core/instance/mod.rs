//! 实例模型
//!
//! 绑定到 Schema 的点、边实例，以及按 Schema 分组的实例集

pub mod collection;
pub mod edge;
pub mod vertex;

pub use collection::{Edges, Instance, SchemaInstances, Vertexes};
pub use edge::Edge;
pub use vertex::Vertex;
