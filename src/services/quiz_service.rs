/// 题库服务
///
/// 对 HTTP 层暴露的三个操作：主题列表、题目投影、答案判分
use crate::error::{QuizError, QuizResult};
use crate::models::{GradeResult, ProjectedQuestions, ProjectionOptions, ThemeCatalog};
use crate::services::grader;
use crate::services::projector;
use crate::services::question_store::QuestionSetStore;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// 题库服务，启动时创建一次，通过 `Arc` 共享给所有请求
pub struct QuizService {
    catalog: Arc<ThemeCatalog>,
    store: QuestionSetStore,
}

impl QuizService {
    /// 创建新的题库服务
    pub fn new(catalog: ThemeCatalog, themes_dir: impl Into<PathBuf>) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            store: QuestionSetStore::new(Arc::clone(&catalog), themes_dir),
            catalog,
        }
    }

    /// 主题目录（原样返回）
    pub fn list_themes(&self) -> &ThemeCatalog {
        &self.catalog
    }

    /// 获取主题题目并按选项投影
    pub async fn get_projected_questions(
        &self,
        theme_id: &str,
        options: &ProjectionOptions,
    ) -> QuizResult<ProjectedQuestions> {
        let set = self.store.get(theme_id).await?;
        let projected = projector::project(&set, options);

        debug!(
            "主题 {} 投影: {} 道题 (选项: {:?})",
            theme_id, projected.total, options
        );

        Ok(projected)
    }

    /// 对主题中的某道题判分
    ///
    /// # 参数
    /// - `theme_id`: 主题ID
    /// - `question_id`: 题目ID
    /// - `answer`: 提交的原始答案（数字或数字数组）
    pub async fn grade_answer(
        &self,
        theme_id: &str,
        question_id: i64,
        answer: &Value,
    ) -> QuizResult<GradeResult> {
        let set = self.store.get(theme_id).await?;
        let question = set
            .find(question_id)
            .ok_or_else(|| QuizError::QuestionNotFound {
                theme: theme_id.to_string(),
                question_id,
            })?;

        let expected = question.correct.parsed().ok_or_else(|| {
            QuizError::malformed(
                self.store.source_path(theme_id).unwrap_or_default(),
                format!("题目 {} 没有可用的正确答案", question_id),
            )
        })?;

        let correct = grader::grade_json(expected, answer)?;
        debug!(
            "主题 {} 题目 {} 判分: {}",
            theme_id,
            question_id,
            if correct { "正确" } else { "错误" }
        );

        Ok(GradeResult {
            correct,
            correct_answer: question.correct.raw().clone(),
            explanation: question.explanation.clone(),
        })
    }
}
