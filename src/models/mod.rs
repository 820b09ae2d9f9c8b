pub mod loaders;
pub mod question;
pub mod theme;

pub use loaders::{load_question_set, load_theme_catalog};
pub use question::{
    AnswerValue, CorrectAnswer, GradeResult, ProjectedQuestions, ProjectionOptions, Question, QuestionSet,
    SubmittedAnswer,
};
pub use theme::{ThemeCatalog, ThemeDescriptor};
