//! 日志系统集成测试
//!
//! `shutdown` 之后全局 `log` 门面仍指向已停止的异步写线程，
//! 因此初始化测试单独成为一个测试二进制，不与生成语句的测试共用进程。

use graphdb_schema::config::LogConfig;
use graphdb_schema::utils::logging;
use serial_test::serial;

#[test]
#[serial]
fn test_logging_init_and_shutdown() {
    let dir = tempfile::tempdir().expect("Failed to create temporary dir");
    let config = LogConfig {
        dir: dir.path().to_string_lossy().into_owned(),
        level: "debug".to_string(),
        ..LogConfig::default()
    };

    let result = logging::init(&config);
    assert!(result.is_ok(), "日志初始化失败: {:?}", result.err());
    assert!(logging::is_initialized());

    log::debug!("测试日志消息");

    logging::shutdown();
    assert!(!logging::is_initialized());
}
