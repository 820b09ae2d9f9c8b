use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

/// 正确答案 / 提交答案
///
/// 单选题为单个选项索引，多选题为选项索引集合。
/// 变体在出题时确定，加载后不会改变。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    /// 单选：一个选项索引
    Single(i64),
    /// 多选：多个选项索引
    Multiple(Vec<i64>),
}

impl AnswerValue {
    /// 从 JSON 值解析答案
    ///
    /// 数字按截断取整（`2.9` → `2`）；数组中的非数字元素被忽略；
    /// 其它形状返回 `None`
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => number_to_index(n).map(AnswerValue::Single),
            Value::Array(items) => Some(AnswerValue::Multiple(
                items
                    .iter()
                    .filter_map(|item| match item {
                        Value::Number(n) => number_to_index(n),
                        _ => None,
                    })
                    .collect(),
            )),
            _ => None,
        }
    }

    /// 变体名称（用于错误信息）
    pub fn kind(&self) -> &'static str {
        match self {
            AnswerValue::Single(_) => "单个选项索引",
            AnswerValue::Multiple(_) => "选项索引数组",
        }
    }
}

fn number_to_index(n: &Number) -> Option<i64> {
    n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64))
}

/// 题目文件中的正确答案
///
/// 保留出题时的原始 JSON 用于响应，同时保存解析后的答案用于判分。
/// 无法识别的形状不会让整个文件解析失败，而是留到判分时报告。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct CorrectAnswer {
    raw: Value,
    parsed: Option<AnswerValue>,
}

impl CorrectAnswer {
    /// 原始答案（与文件中一致）
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// 可用于判分的答案
    pub fn parsed(&self) -> Option<&AnswerValue> {
        self.parsed.as_ref()
    }

    pub fn is_absent(&self) -> bool {
        self.raw.is_null()
    }
}

impl From<Value> for CorrectAnswer {
    fn from(raw: Value) -> Self {
        let parsed = AnswerValue::from_json(&raw);
        Self { raw, parsed }
    }
}

impl Serialize for CorrectAnswer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

// 显式的 null 与缺失字段一样取默认值，由有效性过滤丢弃
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 单道选择题
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: Vec<String>,
    #[serde(default, alias = "answer", skip_serializing_if = "CorrectAnswer::is_absent")]
    pub correct: CorrectAnswer,
    #[serde(default, deserialize_with = "null_as_default")]
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

impl Question {
    /// 题干去除空白后非空，且 ID 为正数
    pub fn is_valid(&self) -> bool {
        !self.question.trim().is_empty() && self.id > 0
    }

    /// 难度标签是否与给定值匹配（忽略大小写）
    pub fn has_difficulty(&self, difficulty: &str) -> bool {
        self.difficulty.as_deref().unwrap_or_default().to_lowercase() == difficulty.to_lowercase()
    }
}

/// 一个主题的题目集合
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuestionSet {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub questions: Vec<Question>,
}

impl QuestionSet {
    /// 丢弃无效题目，保持原有顺序
    ///
    /// # 返回
    /// 被丢弃的题目数量
    pub fn retain_valid(&mut self) -> usize {
        let before = self.questions.len();
        self.questions.retain(Question::is_valid);
        before - self.questions.len()
    }

    /// 按 ID 查找题目
    pub fn find(&self, question_id: i64) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }
}

/// 题目集合的投影选项
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectionOptions {
    /// 难度筛选，`"all"` 表示不筛选
    pub difficulty: Option<String>,
    /// 是否打乱顺序
    pub random: bool,
    /// 题目数量（原始字符串，无法解析时忽略）
    pub count: Option<String>,
}

/// 投影后的题目列表
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProjectedQuestions {
    pub title: String,
    pub questions: Vec<Question>,
    pub total: usize,
}

/// 提交的答案
#[derive(Debug, Clone, Deserialize)]
pub struct SubmittedAnswer {
    #[serde(rename = "questionId")]
    pub question_id: i64,
    #[serde(default)]
    pub answer: Value,
    #[serde(default, alias = "themeId")]
    pub theme: Option<String>,
}

/// 判分结果
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GradeResult {
    pub correct: bool,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: Value,
    pub explanation: String,
}
