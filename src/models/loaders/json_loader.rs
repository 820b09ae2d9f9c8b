use crate::error::{QuizError, QuizResult};
use crate::models::question::QuestionSet;
use crate::models::theme::ThemeCatalog;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// 加载主题目录文件
///
/// 目录是服务的前提，失败时由调用方终止进程
pub async fn load_theme_catalog(catalog_path: &Path) -> Result<ThemeCatalog> {
    let content = fs::read_to_string(catalog_path)
        .await
        .with_context(|| format!("无法读取主题目录文件: {}", catalog_path.display()))?;

    let catalog: ThemeCatalog = serde_json::from_str(&content)
        .with_context(|| format!("无法解析主题目录文件: {}", catalog_path.display()))?;

    tracing::info!("成功加载 {} 个主题", catalog.len());

    Ok(catalog)
}

/// 从 JSON 文件加载一个主题的题目集合（未过滤）
///
/// # 错误
/// - 读取失败：`SourceUnavailable`
/// - 结构不符：`MalformedData`
pub async fn load_question_set(file_path: &Path) -> QuizResult<QuestionSet> {
    let content = fs::read_to_string(file_path)
        .await
        .map_err(|source| QuizError::SourceUnavailable {
            path: file_path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&content).map_err(|e| QuizError::malformed(file_path, e))
}
