//! nGQL 语句生成
//!
//! `NgqlCompiler` 根据 Schema 与实例生成语句文本，不执行语句，也不持有连接。
//! 可能超长的语句（插入、删除）经由 `batch` 拆分为多条。

pub mod batch;
mod create;
mod edge;
mod insert;
mod rebuild;
mod space;

use crate::config::NgqlConfig;
use crate::core::error::SchemaResult;
use batch::SplitStrategy;
use log::{debug, warn};

/// 片段分隔符
const FRAGMENT_SEPARATOR: &str = ", ";

/// 语句长度按字符计，与图数据库对语句长度的限制一致
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// 生成结果：单条语句或拆分后的多条语句
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statements {
    Single(String),
    Batched(Vec<String>),
}

impl Statements {
    pub fn len(&self) -> usize {
        match self {
            Statements::Single(_) => 1,
            Statements::Batched(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_batched(&self) -> bool {
        matches!(self, Statements::Batched(_))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        match self {
            Statements::Single(s) => std::slice::from_ref(s).iter(),
            Statements::Batched(v) => v.iter(),
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        match self {
            Statements::Single(s) => vec![s],
            Statements::Batched(v) => v,
        }
    }
}

impl IntoIterator for Statements {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

/// 语句生成器
#[derive(Debug, Clone, Default)]
pub struct NgqlCompiler {
    config: NgqlConfig,
}

impl NgqlCompiler {
    pub fn new(config: NgqlConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NgqlConfig {
        &self.config
    }

    fn if_not_exists(flag: bool) -> &'static str {
        if flag {
            "IF NOT EXISTS "
        } else {
            ""
        }
    }

    /// 前缀 + 片段 + 后缀 + `;`，必要时拆分；片段为空返回 None
    fn assemble(
        &self,
        fixed: &str,
        fragments: Vec<String>,
        suffix: &str,
    ) -> SchemaResult<Option<Statements>> {
        if fragments.is_empty() {
            return Ok(None);
        }
        let max_len = self.config.max_statement_length;
        let fixed_len = char_len(fixed) + char_len(suffix);

        let groups = match self.config.split_strategy {
            SplitStrategy::RoundRobin => {
                let lens: Vec<usize> = fragments.iter().map(|f| char_len(f)).collect();
                let parts = batch::parts_needed(fixed_len, &lens, max_len)?;
                if parts == 1 {
                    return Ok(Some(Statements::Single(join_statement(fixed, &fragments, suffix))));
                }
                batch::distribute(fragments, parts)?
            }
            SplitStrategy::Greedy => {
                let mut packs =
                    batch::pack_by_length(fixed_len, fragments, char_len(FRAGMENT_SEPARATOR), max_len)?;
                if packs.len() == 1 {
                    let only = packs.remove(0);
                    return Ok(Some(Statements::Single(join_statement(fixed, &only, suffix))));
                }
                packs
            }
        };

        let statements: Vec<String> = groups
            .iter()
            .filter(|g| !g.is_empty())
            .map(|g| join_statement(fixed, g, suffix))
            .collect();
        debug!(
            "语句超过长度上限 {}，拆分为 {} 条: {}",
            max_len,
            statements.len(),
            fixed.trim_end()
        );
        for len in statements.iter().map(|s| char_len(s)).filter(|len| *len > max_len) {
            warn!("拆分后的语句长度 {} 仍超过上限 {}", len, max_len);
        }
        Ok(Some(Statements::Batched(statements)))
    }
}

fn join_statement(fixed: &str, fragments: &[String], suffix: &str) -> String {
    let mut stmt = String::with_capacity(fixed.len() + suffix.len() + 1);
    stmt.push_str(fixed);
    stmt.push_str(&fragments.join(FRAGMENT_SEPARATOR));
    stmt.push_str(suffix);
    stmt.push(';');
    stmt
}
