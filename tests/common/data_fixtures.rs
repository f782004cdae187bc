//! 测试数据生成模块
//!
//! 提供各种测试 Schema 与实例的生成函数

use graphdb_schema::core::instance::{Edge, Vertex};
use graphdb_schema::core::schema::{EdgeSchema, Property, TagSchema};
use graphdb_schema::core::types::DataType;
use graphdb_schema::core::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// 属性表
pub fn props(items: &[(&str, Value)]) -> HashMap<String, Value> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

/// Tag A：p1 STRING NOT NULL，p2 BOOL DEFAULT true
pub fn tag_a() -> Arc<TagSchema> {
    Arc::new(
        TagSchema::builder("A")
            .property(
                Property::builder("p1", DataType::String)
                    .not_null()
                    .build()
                    .expect("p1 定义应该合法"),
            )
            .property(
                Property::builder("p2", DataType::Bool)
                    .default_value(true)
                    .build()
                    .expect("p2 定义应该合法"),
            )
            .build()
            .expect("Tag A 定义应该合法"),
    )
}

/// 人员标签，带隐藏的 uid 与可索引的 name
pub fn person_tag() -> Arc<TagSchema> {
    Arc::new(
        TagSchema::builder("person")
            .property(
                Property::builder("uid", DataType::String)
                    .not_null()
                    .hidden()
                    .build()
                    .expect("uid 定义应该合法"),
            )
            .property(
                Property::builder("name", DataType::String)
                    .index(true)
                    .display("姓名")
                    .build()
                    .expect("name 定义应该合法"),
            )
            .property(
                Property::builder("age", DataType::Int)
                    .index(true)
                    .build()
                    .expect("age 定义应该合法"),
            )
            .compound_index(["name", "age"])
            .comment("人员")
            .build()
            .expect("person 定义应该合法"),
    )
}

/// 关注边类型
pub fn follow_edge() -> Arc<EdgeSchema> {
    Arc::new(
        EdgeSchema::builder("follow")
            .property(
                Property::builder("degree", DataType::Double)
                    .build()
                    .expect("degree 定义应该合法"),
            )
            .property(
                Property::builder("since", DataType::Timestamp)
                    .build()
                    .expect("since 定义应该合法"),
            )
            .build()
            .expect("follow 定义应该合法"),
    )
}

/// 创建 Tag A 的点
pub fn vertex_a(vid: &str, p1: &str) -> Vertex {
    Vertex::new(vid, tag_a(), props(&[("p1", Value::from(p1))])).expect("点实例应该合法")
}

/// 创建人员点
pub fn person_vertex(schema: &Arc<TagSchema>, uid: &str, name: &str, age: i64) -> Vertex {
    Vertex::new(
        uid,
        schema.clone(),
        props(&[
            ("uid", Value::from(uid)),
            ("name", Value::from(name)),
            ("age", Value::Int(age)),
        ]),
    )
    .expect("人员点实例应该合法")
}

/// 创建关注边
pub fn follow(schema: &Arc<EdgeSchema>, src: &str, dst: &str, degree: f64) -> Edge {
    Edge::new(src, dst, schema.clone(), props(&[("degree", Value::Double(degree))]))
        .expect("边实例应该合法")
}
