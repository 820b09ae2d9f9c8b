pub mod difficulty_labeler;
pub mod grader;
pub mod projector;
pub mod question_store;
pub mod quiz_service;

pub use question_store::QuestionSetStore;
pub use quiz_service::QuizService;
