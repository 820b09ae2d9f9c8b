//! 题目集合投影：难度筛选 → 打乱 → 截断
//!
//! 始终在副本上操作，缓存中的题目顺序不会被修改。

use crate::models::{ProjectedQuestions, ProjectionOptions, QuestionSet};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// 不筛选难度的哨兵值
pub const ALL_DIFFICULTIES: &str = "all";

/// 按选项生成响应用的题目列表，每次调用使用独立的随机源
pub fn project(set: &QuestionSet, options: &ProjectionOptions) -> ProjectedQuestions {
    let mut rng = StdRng::from_os_rng();
    project_with_rng(set, options, &mut rng)
}

/// 同 [`project`]，使用调用方提供的随机源
pub fn project_with_rng<R: Rng + ?Sized>(
    set: &QuestionSet,
    options: &ProjectionOptions,
    rng: &mut R,
) -> ProjectedQuestions {
    let mut questions = set.questions.clone();

    if let Some(difficulty) = options
        .difficulty
        .as_deref()
        .filter(|d| !d.is_empty() && *d != ALL_DIFFICULTIES)
    {
        questions.retain(|q| q.has_difficulty(difficulty));
    }

    if options.random {
        questions.shuffle(rng);
    }

    if let Some(count) = parse_count(options.count.as_deref()) {
        if count < questions.len() {
            questions.truncate(count);
        }
    }

    ProjectedQuestions {
        title: set.title.clone(),
        total: questions.len(),
        questions,
    }
}

// 无法解析或非正数的数量被忽略
fn parse_count(raw: Option<&str>) -> Option<usize> {
    let count: i64 = raw?.parse().ok()?;
    usize::try_from(count).ok().filter(|c| *c > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CorrectAnswer, Question};
    use serde_json::json;

    fn question(id: i64, difficulty: Option<&str>) -> Question {
        Question {
            id,
            question: format!("Question {}", id),
            options: vec!["a".to_string(), "b".to_string()],
            correct: CorrectAnswer::from(json!(0)),
            explanation: String::new(),
            difficulty: difficulty.map(str::to_string),
        }
    }

    fn sample_set() -> QuestionSet {
        QuestionSet {
            title: "Kubernetes".to_string(),
            questions: vec![
                question(1, Some("easy")),
                question(2, Some("intermediate")),
                question(3, Some("Easy")),
                question(4, Some("advanced")),
                question(5, None),
                question(6, Some("EASY")),
            ],
        }
    }

    fn ids(projected: &ProjectedQuestions) -> Vec<i64> {
        projected.questions.iter().map(|q| q.id).collect()
    }

    fn with_count(count: &str) -> ProjectionOptions {
        ProjectionOptions {
            count: Some(count.to_string()),
            ..ProjectionOptions::default()
        }
    }

    #[test]
    fn test_no_options_is_identity() {
        let set = sample_set();
        let projected = project(&set, &ProjectionOptions::default());
        assert_eq!(ids(&projected), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(projected.total, 6);
        assert_eq!(projected.title, "Kubernetes");
    }

    #[test]
    fn test_difficulty_filter_case_insensitive_keeps_order() {
        let set = sample_set();
        let options = ProjectionOptions {
            difficulty: Some("EaSy".to_string()),
            ..ProjectionOptions::default()
        };
        let projected = project(&set, &options);
        assert_eq!(ids(&projected), vec![1, 3, 6]);
        assert!(projected.questions.iter().all(|q| q.has_difficulty("easy")));
    }

    #[test]
    fn test_difficulty_all_and_empty_do_not_filter() {
        let set = sample_set();
        for difficulty in ["all", ""] {
            let options = ProjectionOptions {
                difficulty: Some(difficulty.to_string()),
                ..ProjectionOptions::default()
            };
            assert_eq!(project(&set, &options).total, 6);
        }
    }

    #[test]
    fn test_count_truncates_only_when_smaller() {
        let set = sample_set();
        assert_eq!(ids(&project(&set, &with_count("2"))), vec![1, 2]);
        assert_eq!(project(&set, &with_count("5")).total, 5);
        for ignored in ["6", "999", "0", "-3", "abc", "2.5", ""] {
            assert_eq!(project(&set, &with_count(ignored)).total, 6, "count={ignored}");
        }
    }

    #[test]
    fn test_count_applies_after_difficulty_filter() {
        let set = sample_set();
        let options = ProjectionOptions {
            difficulty: Some("easy".to_string()),
            count: Some("3".to_string()),
            ..ProjectionOptions::default()
        };
        assert_eq!(ids(&project(&set, &options)), vec![1, 3, 6]);
    }

    #[test]
    fn test_shuffle_is_permutation_and_leaves_source_untouched() {
        let set = sample_set();
        let before = set.clone();
        let options = ProjectionOptions {
            random: true,
            ..ProjectionOptions::default()
        };
        let mut rng = StdRng::seed_from_u64(7);

        let projected = project_with_rng(&set, &options, &mut rng);
        let mut shuffled = ids(&projected);
        shuffled.sort_unstable();

        assert_eq!(shuffled, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(set, before);
    }

    #[test]
    fn test_shuffle_then_truncate() {
        let set = sample_set();
        let options = ProjectionOptions {
            random: true,
            count: Some("3".to_string()),
            ..ProjectionOptions::default()
        };
        let mut rng = StdRng::seed_from_u64(42);

        let projected = project_with_rng(&set, &options, &mut rng);
        assert_eq!(projected.total, 3);
        assert!(projected
            .questions
            .iter()
            .all(|q| set.questions.iter().any(|s| s.id == q.id)));
    }
}
