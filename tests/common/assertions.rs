//! 自定义断言辅助模块
//!
//! 提供测试中的常用断言函数

use graphdb_schema::ngql::Statements;

/// 断言结果成功，返回内部值
pub fn assert_ok<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
    result.expect("操作应该成功")
}

/// 断言结果失败并匹配错误消息
pub fn assert_err_with<T: std::fmt::Debug, E: std::fmt::Display>(result: Result<T, E>, expected_msg: &str) {
    let err = result.expect_err("操作应该失败");
    let err_str = err.to_string();
    assert!(
        err_str.contains(expected_msg),
        "错误消息应包含 '{}', 实际是 '{}'",
        expected_msg,
        err_str
    );
}

/// 断言集合包含指定数量的元素
pub fn assert_count<T>(collection: &[T], expected: usize, item_name: &str) {
    assert_eq!(
        collection.len(),
        expected,
        "{}数量不匹配: 期望 {}, 实际 {}",
        item_name,
        expected,
        collection.len()
    );
}

/// 断言 Option 是 Some 并返回内部值
pub fn assert_some<T>(opt: &Option<T>) -> &T {
    opt.as_ref().expect("值应该是 Some")
}

/// 断言 Option 是 None
pub fn assert_none<T>(opt: &Option<T>) {
    assert!(opt.is_none(), "值应该是 None");
}

/// 断言每条语句都以相同前缀开头、以分号结尾
pub fn assert_statements_shape(statements: &Statements, prefix: &str) {
    for stmt in statements.iter() {
        assert!(
            stmt.starts_with(prefix),
            "语句应以 '{}' 开头, 实际是 '{}'",
            prefix,
            stmt
        );
        assert!(stmt.ends_with(';'), "语句应以 ';' 结尾, 实际是 '{}'", stmt);
    }
}

/// 去掉前缀与结尾分号后拆出各片段
pub fn fragments_of(statements: &Statements, prefix: &str) -> Vec<String> {
    statements
        .iter()
        .flat_map(|stmt| {
            stmt.trim_start_matches(prefix)
                .trim_end_matches(';')
                .split("), ")
                .map(|f| if f.ends_with(')') { f.to_string() } else { format!("{})", f) })
                .collect::<Vec<_>>()
        })
        .collect()
}
