//! HTTP 服务层（axum）
//!
//! | 方法 | 路径 | 说明 |
//! |------|------|------|
//! | GET | `/api/themes` | 主题目录 |
//! | GET | `/api/qcm?theme=&count=&random=&difficulty=` | 主题题目（可筛选、打乱、截断） |
//! | POST | `/api/check` | 判分 `{questionId, answer, theme}` |
//! | GET | `/`, `/style.css`, `/script.js` | 静态页面 |
//!
//! 所有请求共享同一个 `Arc<QuizService>`。

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{header, Method, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeFile;
use tracing::warn;

use crate::error::QuizError;
use crate::models::{GradeResult, ProjectedQuestions, ProjectionOptions, SubmittedAnswer, ThemeCatalog};
use crate::services::QuizService;

pub type AppState = Arc<QuizService>;

type ApiError = (StatusCode, Json<Value>);

pub fn create_router(service: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/themes", get(handle_list_themes))
        .route("/api/qcm", get(handle_get_questions))
        .route("/api/check", post(handle_check_answer))
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route_service("/style.css", ServeFile::new(static_dir.join("style.css")))
        .route_service("/script.js", ServeFile::new(static_dir.join("script.js")))
        .layer(cors)
        .with_state(service)
}

// ── Request types ───────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct QcmQuery {
    theme: Option<String>,
    count: Option<String>,
    random: Option<String>,
    difficulty: Option<String>,
}

impl QcmQuery {
    fn options(&self) -> ProjectionOptions {
        ProjectionOptions {
            difficulty: self.difficulty.clone(),
            random: self.random.as_deref() == Some("true"),
            count: self.count.clone(),
        }
    }
}

fn error_response(status: StatusCode, msg: &str) -> ApiError {
    (status, Json(serde_json::json!({ "error": msg })))
}

fn quiz_error_response(err: QuizError) -> ApiError {
    let status = match &err {
        QuizError::ThemeNotFound { .. } | QuizError::QuestionNotFound { .. } => {
            StatusCode::NOT_FOUND
        }
        QuizError::InvalidAnswerShape { .. } => StatusCode::BAD_REQUEST,
        QuizError::SourceUnavailable { .. } | QuizError::MalformedData { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    warn!("请求失败 ({}): {}", status, err);
    error_response(status, &err.to_string())
}

// ── Handlers ────────────────────────────────────────────────────────

async fn handle_list_themes(State(service): State<AppState>) -> Json<ThemeCatalog> {
    Json(service.list_themes().clone())
}

async fn handle_get_questions(
    State(service): State<AppState>,
    Query(params): Query<QcmQuery>,
) -> Result<Json<ProjectedQuestions>, ApiError> {
    let theme = match params.theme.as_deref() {
        Some(theme) if !theme.is_empty() => theme,
        _ => return Err(error_response(StatusCode::BAD_REQUEST, "缺少 theme 参数")),
    };

    service
        .get_projected_questions(theme, &params.options())
        .await
        .map(Json)
        .map_err(quiz_error_response)
}

async fn handle_check_answer(
    State(service): State<AppState>,
    payload: Result<Json<SubmittedAnswer>, JsonRejection>,
) -> Result<Json<GradeResult>, ApiError> {
    let Json(submitted) = payload.map_err(|rejection| {
        warn!("无法解析判分请求: {}", rejection);
        error_response(StatusCode::BAD_REQUEST, "请求数据无效")
    })?;

    let theme = match submitted.theme.as_deref() {
        Some(theme) if !theme.is_empty() => theme,
        _ => return Err(error_response(StatusCode::BAD_REQUEST, "缺少 theme 参数")),
    };

    service
        .grade_answer(theme, submitted.question_id, &submitted.answer)
        .await
        .map(Json)
        .map_err(quiz_error_response)
}
