pub mod json_loader;

pub use json_loader::{load_question_set, load_theme_catalog};
