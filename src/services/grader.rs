//! 答案判分
//!
//! 多选题的比较规则：数量相同，且每个提交的索引都出现在正确答案中。
//! 提交的索引不做去重：正确答案 `[1, 3]` 对提交 `[3, 3]` 判对，
//! 对提交 `[1, 3, 3]` 因数量不同判错。

use crate::error::{QuizError, QuizResult};
use crate::models::AnswerValue;
use serde_json::Value;

/// 比较提交答案与正确答案
///
/// # 错误
/// 两者变体不同时返回 `InvalidAnswerShape`，而不是 `false`
pub fn grade(correct: &AnswerValue, submitted: &AnswerValue) -> QuizResult<bool> {
    match (correct, submitted) {
        (AnswerValue::Single(expected), AnswerValue::Single(given)) => Ok(expected == given),
        (AnswerValue::Multiple(expected), AnswerValue::Multiple(given)) => {
            Ok(given.len() == expected.len() && given.iter().all(|g| expected.contains(g)))
        }
        (expected, given) => Err(QuizError::InvalidAnswerShape {
            expected: expected.kind(),
            reason: format!("收到的是{}", given.kind()),
        }),
    }
}

/// 从原始 JSON 解析提交答案后判分
pub fn grade_json(correct: &AnswerValue, submitted: &Value) -> QuizResult<bool> {
    let given = AnswerValue::from_json(submitted).ok_or_else(|| QuizError::InvalidAnswerShape {
        expected: correct.kind(),
        reason: format!("无法识别的答案: {}", submitted),
    })?;
    grade(correct, &given)
}
