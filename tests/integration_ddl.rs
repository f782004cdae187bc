//! 数据定义语言(DDL)集成测试
//!
//! 测试范围:
//! - Schema 构造校验（保留字、属性查找、复合索引）
//! - CREATE TAG / CREATE EDGE
//! - CREATE INDEX 与索引名登记
//! - REBUILD INDEX
//! - 图空间语句

mod common;

use common::{
    assertions::{assert_count, assert_err_with, assert_none, assert_ok, assert_some},
    data_fixtures::{follow_edge, person_tag, tag_a},
    TestContext,
};

use graphdb_schema::core::keywords::RESERVED_KEYWORDS;
use graphdb_schema::core::schema::{EdgeSchema, Property, TagSchema};
use graphdb_schema::core::types::{DataType, VidType};
use graphdb_schema::SchemaError;
use std::sync::Arc;
use std::thread;

// ==================== Schema 构造测试 ====================

#[test]
fn test_reserved_keywords_rejected_any_case() {
    for keyword in RESERVED_KEYWORDS {
        let lower = keyword.to_lowercase();
        for name in [keyword.to_string(), lower] {
            assert_eq!(
                Property::builder(name.as_str(), DataType::Int).build().err(),
                Some(SchemaError::ReservedWord(name.clone())),
            );
            assert_eq!(
                TagSchema::builder(name.as_str()).build().err(),
                Some(SchemaError::ReservedWord(name.clone())),
            );
        }
    }
}

#[test]
fn test_property_type_lookup() {
    let types = DataType::values();
    let properties: Vec<Property> = types
        .iter()
        .enumerate()
        .map(|(i, t)| assert_ok(Property::builder(format!("p{}", i), *t).build()))
        .collect();
    let tag = assert_ok(TagSchema::builder("all_types").properties(properties).build());

    for (i, t) in types.iter().enumerate() {
        assert_eq!(tag.property_type(&format!("p{}", i)), Ok(*t));
    }
    assert_eq!(
        tag.property_type("missing"),
        Err(SchemaError::property_not_found("missing", "all_types"))
    );
}

#[test]
fn test_compound_index_construction_errors() {
    let one = TagSchema::builder("c")
        .property(assert_ok(Property::builder("x", DataType::Int).build()))
        .compound_index(["x"])
        .build();
    assert!(matches!(one, Err(SchemaError::InvalidSchema(_))));

    let absent = TagSchema::builder("c")
        .property(assert_ok(Property::builder("x", DataType::Int).build()))
        .property(assert_ok(Property::builder("y", DataType::Int).build()))
        .compound_index(["x", "nope"])
        .build();
    assert_err_with(absent, "nope");
}

#[test]
fn test_not_null_without_default_value() {
    let result = Property::builder("p", DataType::Int)
        .not_null()
        .set_default(true)
        .build();
    assert!(matches!(result, Err(SchemaError::InvalidSchema(_))));
}

// ==================== CREATE TAG / EDGE 测试 ====================

#[test]
fn test_create_tag_end_to_end() {
    let ctx = TestContext::new();
    assert_eq!(
        assert_ok(ctx.compiler.create_tag(&tag_a(), false)),
        "CREATE TAG A(p1 STRING NOT NULL, p2 BOOL DEFAULT true);"
    );
}

#[test]
fn test_create_tag_with_comment() {
    let ctx = TestContext::new();
    assert_eq!(
        assert_ok(ctx.compiler.create_tag(&person_tag(), true)),
        "CREATE TAG IF NOT EXISTS person(uid STRING NOT NULL, name STRING, age INT) COMMENT=\"人员\";"
    );
}

#[test]
fn test_create_edge_type() {
    let ctx = TestContext::new();
    assert_eq!(
        assert_ok(ctx.compiler.create_edge_type(&follow_edge(), false)),
        "CREATE EDGE follow(degree DOUBLE, since TIMESTAMP);"
    );
}

#[test]
fn test_unified_properties_appended() {
    let created = assert_ok(Property::builder("created", DataType::Timestamp).build());
    let edge = assert_ok(
        EdgeSchema::builder("likes")
            .property(assert_ok(Property::builder("score", DataType::Float).build()))
            .unified_properties([created])
            .build(),
    );
    let ctx = TestContext::new();
    assert_eq!(
        assert_ok(ctx.compiler.create_edge_type(&edge, false)),
        "CREATE EDGE likes(score FLOAT, created TIMESTAMP);"
    );
}

// ==================== CREATE INDEX 测试 ====================

#[test]
fn test_create_all_indexes_and_rebuild() {
    let ctx = TestContext::new();
    let person = person_tag();

    let statements = assert_ok(ctx.compiler.create_all_indexes(&person, 20, true));
    assert_count(&statements, 4, "索引语句");
    assert_eq!(statements[0], "CREATE TAG INDEX IF NOT EXISTS i_T_person on person();");
    assert_eq!(
        statements[1],
        "CREATE TAG INDEX IF NOT EXISTS i_T_person_P_name on person(name(20));"
    );
    assert_eq!(statements[2], "CREATE TAG INDEX IF NOT EXISTS i_T_person_P_age on person(age);");
    assert_eq!(
        statements[3],
        "CREATE TAG INDEX IF NOT EXISTS i_T_person_P_name_age on person(name(20), age);"
    );

    assert_eq!(
        assert_ok(ctx.compiler.rebuild_tag_index(&person, true)),
        "REBUILD TAG INDEX i_T_person,i_T_person_P_name,i_T_person_P_age,i_T_person_P_name_age;"
    );
    assert_eq!(
        assert_ok(ctx.compiler.rebuild_tag_index(&person, false)),
        "REBUILD TAG INDEX i_T_person;"
    );
}

#[test]
fn test_index_skipped_when_disabled() {
    let ctx = TestContext::new();
    let tag = assert_ok(TagSchema::builder("plain").index(false).build());
    assert_none(&ctx.compiler.create_schema_index(&tag, false));
    // 不生成不带索引名的语句，避免重建整个图空间的索引
    assert_err_with(ctx.compiler.rebuild_tag_index(&tag, false), "plain");
    assert_err_with(ctx.compiler.rebuild_tag_index(&tag, true), "plain");
    assert_err_with(ctx.compiler.rebuild_indexes(&tag, &[]), "plain");

    let a = tag_a();
    let stmt = assert_ok(ctx.compiler.create_property_index(&a, "p1", 8, false));
    assert_none(&stmt);
}

#[test]
fn test_edge_index() {
    let ctx = TestContext::new();
    let edge = follow_edge();
    let stmt = ctx.compiler.create_schema_index(&edge, false);
    assert_eq!(assert_some(&stmt), "CREATE EDGE INDEX i_E_follow on follow();");
    assert_eq!(
        assert_ok(ctx.compiler.create_compound_property_index(&edge, &["degree", "since"], 8, false)),
        "CREATE EDGE INDEX i_E_follow_P_degree_since on follow(degree, since);"
    );
    assert_eq!(
        assert_ok(ctx.compiler.rebuild_edge_index(&edge, true)),
        "REBUILD EDGE INDEX i_E_follow,i_E_follow_P_degree_since;"
    );
}

#[test]
fn test_concurrent_index_registration() {
    let ctx = TestContext::new();
    let person = person_tag();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let schema = Arc::clone(&person);
            let compiler = ctx.compiler.clone();
            thread::spawn(move || {
                for _ in 0..25 {
                    assert_ok(compiler.create_property_index(&schema, "age", 0, false));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("线程应正常结束");
    }

    let names = person.index_names();
    assert_count(&names, 100, "索引名");
    assert!(names.iter().all(|n| n == "i_T_person_P_age"));
}

// ==================== 图空间语句测试 ====================

#[test]
fn test_space_statements() {
    let ctx = TestContext::new();
    assert_eq!(
        assert_ok(ctx.compiler.create_space("nba", 10, 1, VidType::FixedString(64), false, "")),
        "CREATE SPACE nba(partition_num=10, replica_factor=1, vid_type=FIXED_STRING(64));"
    );
    assert_eq!(assert_ok(ctx.compiler.use_space("nba")), "USE nba;");
    assert_err_with(ctx.compiler.drop_space("Drop"), "保留字冲突: Drop");
}
