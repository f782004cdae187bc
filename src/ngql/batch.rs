//! 语句分批
//!
//! 插入、删除等语句由固定前缀与若干片段组成，总长度超过单条语句上限时
//! 需要拆成多条完整语句，每条都带相同的前缀。长度一律按字符计。

use crate::core::error::{SchemaError, SchemaResult};
use serde::{Deserialize, Serialize};

/// 分批策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitStrategy {
    /// 先按总长度估算份数，再按下标轮转分配片段
    #[default]
    RoundRobin,
    /// 按顺序装填，每条语句尽量填满但不超过上限
    Greedy,
}

/// 需要拆成的份数：`max(1, ceil((fixed + Σ片段) / max_len))`
pub fn parts_needed(fixed_len: usize, fragment_lens: &[usize], max_len: usize) -> SchemaResult<usize> {
    if max_len == 0 {
        return Err(SchemaError::InvalidArgument(
            "max statement length must be > 0".to_string(),
        ));
    }
    let total = fixed_len + fragment_lens.iter().sum::<usize>();
    Ok(total.div_ceil(max_len).max(1))
}

/// 轮转分配：第 i 个元素进入第 `i % parts` 份，每份内保持原有顺序
pub fn distribute<T>(items: Vec<T>, parts: usize) -> SchemaResult<Vec<Vec<T>>> {
    if parts < 1 {
        return Err(SchemaError::InvalidArgument(format!(
            "parts require integer > 0, got {} instead",
            parts
        )));
    }
    let mut buckets: Vec<Vec<T>> = (0..parts).map(|_| Vec::new()).collect();
    for (i, item) in items.into_iter().enumerate() {
        buckets[i % parts].push(item);
    }
    Ok(buckets)
}

/// 顺序装填：每份长度（前缀 + 片段 + 分隔符 + 结尾 `;`）不超过 `max_len`
///
/// 单个片段本身超限时独占一份。
pub fn pack_by_length(
    fixed_len: usize,
    fragments: Vec<String>,
    separator_len: usize,
    max_len: usize,
) -> SchemaResult<Vec<Vec<String>>> {
    if max_len == 0 {
        return Err(SchemaError::InvalidArgument(
            "max statement length must be > 0".to_string(),
        ));
    }
    let mut packs: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut current_len = fixed_len + 1;

    for fragment in fragments {
        let fragment_len = fragment.chars().count();
        let extra = if current.is_empty() {
            fragment_len
        } else {
            separator_len + fragment_len
        };
        if !current.is_empty() && current_len + extra > max_len {
            packs.push(std::mem::take(&mut current));
            current_len = fixed_len + 1 + fragment_len;
        } else {
            current_len += extra;
        }
        current.push(fragment);
    }
    if !current.is_empty() {
        packs.push(current);
    }
    Ok(packs)
}
