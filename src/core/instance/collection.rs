//! 某个 Schema 下的实例集合

use super::edge::Edge;
use super::vertex::Vertex;
use crate::core::error::{SchemaError, SchemaResult};
use crate::core::schema::{EdgeSchema, SchemaDef, TagSchema};
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// 绑定到某个 Schema 的实例
pub trait Instance {
    type Schema: Deref<Target = SchemaDef>;

    fn schema(&self) -> &Arc<Self::Schema>;
}

impl Instance for Vertex {
    type Schema = TagSchema;

    fn schema(&self) -> &Arc<TagSchema> {
        Vertex::schema(self)
    }
}

impl Instance for Edge {
    type Schema = EdgeSchema;

    fn schema(&self) -> &Arc<EdgeSchema> {
        Edge::schema(self)
    }
}

/// 同一 Schema 下的实例集，成员类别由类型参数保证
pub struct SchemaInstances<I: Instance> {
    schema: Arc<I::Schema>,
    members: Vec<I>,
}

/// 某 Tag 下的点实例集
pub type Vertexes = SchemaInstances<Vertex>;

/// 某 Edge Type 下的边实例集
pub type Edges = SchemaInstances<Edge>;

impl<I: Instance> SchemaInstances<I> {
    pub fn new(schema: Arc<I::Schema>) -> Self {
        Self {
            schema,
            members: Vec::new(),
        }
    }

    pub fn schema(&self) -> &Arc<I::Schema> {
        &self.schema
    }

    /// 添加成员，成员必须属于同一个 Schema
    pub fn add(&mut self, member: I) -> SchemaResult<()> {
        if member.schema().name() != self.schema.name() {
            return Err(SchemaError::InvalidArgument(format!(
                "member of {} can not be added to instances of {}",
                member.schema().name(),
                self.schema.name()
            )));
        }
        self.members.push(member);
        Ok(())
    }

    /// 合并同一 Schema 的另一个实例集
    pub fn union(&mut self, other: SchemaInstances<I>) -> SchemaResult<()> {
        if other.schema.name() != self.schema.name() {
            return Err(SchemaError::InvalidArgument(format!(
                "can not union instances of {} into {}",
                other.schema.name(),
                self.schema.name()
            )));
        }
        self.members.extend(other.members);
        Ok(())
    }

    pub fn members(&self) -> &[I] {
        &self.members
    }

    pub fn iter(&self) -> std::slice::Iter<'_, I> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<I: Instance + fmt::Debug> fmt::Debug for SchemaInstances<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaInstances")
            .field("schema", &self.schema.name())
            .field("members", &self.members)
            .finish()
    }
}

impl<I: Instance + Clone> Clone for SchemaInstances<I> {
    fn clone(&self) -> Self {
        Self {
            schema: Arc::clone(&self.schema),
            members: self.members.clone(),
        }
    }
}

impl<'a, I: Instance> IntoIterator for &'a SchemaInstances<I> {
    type Item = &'a I;
    type IntoIter = std::slice::Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
