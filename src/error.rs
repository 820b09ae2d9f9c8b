use std::path::PathBuf;
use thiserror::Error;

/// 题库核心错误类型
///
/// 所有变体都是可恢复的，由调用方（HTTP 层）决定如何响应
#[derive(Debug, Error)]
pub enum QuizError {
    /// 主题不存在于主题目录中
    #[error("主题不存在: {theme}")]
    ThemeNotFound { theme: String },

    /// 主题题目文件无法读取
    #[error("无法读取主题文件 ({}): {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 主题题目文件格式错误
    #[error("主题文件格式错误 ({}): {reason}", .path.display())]
    MalformedData { path: PathBuf, reason: String },

    /// 题目不存在于该主题的有效题目中
    #[error("题目不存在: 主题 {theme} 中没有 ID 为 {question_id} 的题目")]
    QuestionNotFound { theme: String, question_id: i64 },

    /// 提交答案的形状与正确答案不匹配
    #[error("答案格式无效: 期望 {expected}, {reason}")]
    InvalidAnswerShape {
        expected: &'static str,
        reason: String,
    },
}

impl QuizError {
    pub fn theme_not_found(theme: impl Into<String>) -> Self {
        QuizError::ThemeNotFound {
            theme: theme.into(),
        }
    }

    pub fn malformed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        QuizError::MalformedData {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// 题库结果类型
pub type QuizResult<T> = Result<T, QuizError>;
