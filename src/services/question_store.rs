//! 题目集合缓存
//!
//! 每个主题首次请求时从磁盘加载、过滤无效题目并缓存，之后一直复用。
//! 缓存没有失效、过期或淘汰机制：主题文件在进程生命周期内视为不变。

use crate::error::{QuizError, QuizResult};
use crate::models::{load_question_set, QuestionSet, ThemeCatalog};
use crate::utils::logging::truncate_text;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info, warn};

/// 题目集合存储
///
/// 同一主题的并发首次请求可能各自加载一次，后写入者覆盖；
/// 加载是幂等的，因此不需要按主题加锁。读写锁只在访问 map 时短暂持有，
/// 从不跨越文件读取。
pub struct QuestionSetStore {
    catalog: Arc<ThemeCatalog>,
    themes_dir: PathBuf,
    cache: RwLock<HashMap<String, Arc<QuestionSet>>>,
}

impl QuestionSetStore {
    /// 创建新的存储，缓存为空
    pub fn new(catalog: Arc<ThemeCatalog>, themes_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog,
            themes_dir: themes_dir.into(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// 获取主题的有效题目集合
    ///
    /// 命中缓存时直接返回，不访问磁盘
    pub async fn get(&self, theme_id: &str) -> QuizResult<Arc<QuestionSet>> {
        if let Some(set) = self.cached(theme_id) {
            debug!("缓存命中: {}", theme_id);
            return Ok(set);
        }

        let path = self
            .source_path(theme_id)
            .ok_or_else(|| QuizError::theme_not_found(theme_id))?;

        let mut set = load_question_set(&path).await?;
        let total = set.questions.len();
        let dropped = set.retain_valid();

        if dropped > 0 {
            warn!(
                "主题 {} 中有 {} 道无效题目被丢弃 (题干为空或 ID 非正数)",
                theme_id, dropped
            );
        }
        info!(
            "✓ 题目已加载: {} ({}) - 有效 {}/{}",
            truncate_text(&set.title, 60),
            theme_id,
            set.questions.len(),
            total
        );

        let set = Arc::new(set);
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(theme_id.to_string(), Arc::clone(&set));

        Ok(set)
    }

    /// 主题题目文件的路径，主题不存在时返回 `None`
    pub fn source_path(&self, theme_id: &str) -> Option<PathBuf> {
        self.catalog
            .find(theme_id)
            .map(|theme| self.themes_dir.join(&theme.file))
    }

    /// 已缓存的主题数量
    pub fn cached_count(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn cached(&self, theme_id: &str) -> Option<Arc<QuestionSet>> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(theme_id)
            .cloned()
    }
}
