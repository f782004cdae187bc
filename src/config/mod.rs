use crate::core::schema::{JoinIdBuilder, DEFAULT_VID_JOINER};
use crate::core::types::VidType;
use crate::ngql::batch::SplitStrategy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// 单条语句最大长度：nGQL 消息上限 4194304 的一半
pub const DEFAULT_MAX_STATEMENT_LENGTH: usize = 4_194_304 / 2;

/// 空值展示占位符
pub const DEFAULT_NULL_PLACEHOLDER: &str = "-";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置解析错误: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("配置序列化错误: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("配置无效: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub ngql: NgqlConfig,
    pub log: LogConfig,
}

/// 语句生成相关配置，随 nGQL 版本可调整
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct NgqlConfig {
    pub max_statement_length: usize,
    pub vid_joiner: String,
    pub null_placeholder: String,
    pub split_strategy: SplitStrategy,
    pub vid_type: VidType,
}

impl Default for NgqlConfig {
    fn default() -> Self {
        Self {
            max_statement_length: DEFAULT_MAX_STATEMENT_LENGTH,
            vid_joiner: DEFAULT_VID_JOINER.to_string(),
            null_placeholder: DEFAULT_NULL_PLACEHOLDER.to_string(),
            split_strategy: SplitStrategy::default(),
            vid_type: VidType::default(),
        }
    }
}

impl NgqlConfig {
    /// 按配置的连接符生成点 ID
    pub fn id_builder(&self) -> JoinIdBuilder {
        JoinIdBuilder::new(self.vid_joiner.clone())
    }

    pub fn with_max_statement_length(mut self, max_statement_length: usize) -> Self {
        self.max_statement_length = max_statement_length;
        self
    }

    pub fn with_vid_type(mut self, vid_type: VidType) -> Self {
        self.vid_type = vid_type;
        self
    }

    pub fn with_split_strategy(mut self, split_strategy: SplitStrategy) -> Self {
        self.split_strategy = split_strategy;
        self
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "graphdb-schema".to_string(),
            max_file_size: 100 * 1024 * 1024, // 100MB
            max_files: 5,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.ngql.max_statement_length == 0 {
            return Err(ConfigError::Invalid(
                "ngql.max_statement_length must be > 0".to_string(),
            ));
        }
        if self.ngql.vid_joiner.is_empty() {
            return Err(ConfigError::Invalid("ngql.vid_joiner must not be empty".to_string()));
        }
        Ok(())
    }
}
