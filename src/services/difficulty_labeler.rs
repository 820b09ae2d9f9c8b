//! 难度标注 - 按题目位置为主题文件写入 `difficulty` 字段
//!
//! 前 N 道为 easy，接下来 N 道为 intermediate，其余全部为 advanced

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::path::Path;
use tokio::fs;
use tracing::{info, warn};

pub const EASY: &str = "easy";
pub const INTERMEDIATE: &str = "intermediate";
pub const ADVANCED: &str = "advanced";

/// 每个难度等级的题目数量统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyTally {
    pub easy: usize,
    pub intermediate: usize,
    pub advanced: usize,
}

impl DifficultyTally {
    pub fn total(&self) -> usize {
        self.easy + self.intermediate + self.advanced
    }
}

fn level_for(position: usize, per_level: usize) -> &'static str {
    if position < per_level {
        EASY
    } else if position < per_level * 2 {
        INTERMEDIATE
    } else {
        ADVANCED
    }
}

/// 为文档中的每道题写入难度标签，保留其它字段
pub fn assign_difficulties(document: &mut Value, per_level: usize) -> Result<DifficultyTally> {
    let questions = document
        .get_mut("questions")
        .and_then(Value::as_array_mut)
        .context("文件中没有 questions 数组")?;

    let mut tally = DifficultyTally::default();
    for (position, question) in questions.iter_mut().enumerate() {
        let Some(fields) = question.as_object_mut() else {
            warn!("第 {} 道题不是对象，跳过", position + 1);
            continue;
        };

        let level = level_for(position, per_level);
        fields.insert("difficulty".to_string(), Value::from(level));
        match level {
            EASY => tally.easy += 1,
            INTERMEDIATE => tally.intermediate += 1,
            _ => tally.advanced += 1,
        }
    }

    Ok(tally)
}

/// 读取主题文件，标注难度后以 4 空格缩进写回
pub async fn label_file(path: &Path, per_level: usize) -> Result<DifficultyTally> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取主题文件: {}", path.display()))?;
    let mut document: Value = serde_json::from_str(&content)
        .with_context(|| format!("无法解析主题文件: {}", path.display()))?;

    let tally = assign_difficulties(&mut document, per_level)?;

    let mut output = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut output, PrettyFormatter::with_indent(b"    "));
    document.serialize(&mut serializer)?;

    fs::write(path, output)
        .await
        .with_context(|| format!("无法写入主题文件: {}", path.display()))?;

    info!("难度分布:");
    info!("  - easy: {} 道", tally.easy);
    info!("  - intermediate: {} 道", tally.intermediate);
    info!("  - advanced: {} 道", tally.advanced);
    info!("✓ 文件已更新: {} (共 {} 道)", path.display(), tally.total());

    Ok(tally)
}
