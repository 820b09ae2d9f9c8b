//! # QCM Server
//!
//! 按主题提供选择题题库的 HTTP 服务
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - 主题目录、题目、答案等数据结构，以及 JSON 文件加载
//! - `AnswerValue` - 单选 / 多选答案的统一表示
//!
//! ### ② 业务能力层（Services）
//! - `QuestionSetStore` - 首次请求时加载并校验主题题目，之后从缓存读取
//! - `projector` - 难度筛选、打乱、截断（不修改缓存）
//! - `grader` - 单选 / 多选判分
//! - `QuizService` - 对外暴露的三个操作
//!
//! ### ③ 服务层（Server）
//! - `server/` - axum 路由、CORS、静态页面
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{QuizError, QuizResult};
pub use models::{AnswerValue, Question, QuestionSet, ThemeCatalog};
pub use server::create_router;
pub use services::{QuestionSetStore, QuizService};
