use axum::Json;
use axum::extract::{Path, Query};
use axum::routing::{delete, post, put};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{AttendanceReport, Course};
use crate::services::{EditorAction, EditorId, LoadStats};
use crate::state::AppState;

#[derive(Deserialize)]
struct CourseQueryParams {
    classroom: Option<String>,
    days: Option<String>,
}

#[derive(Deserialize)]
struct OpenEditorRequest {
    course_id: Option<i64>,
}

#[derive(Serialize)]
struct CloneResponse {
    course: Course,
    editor: EditorId,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/reload", post(reload))
        .route("/courses", get(list_courses).post(create_course))
        .route("/courses/{id}", put(update_course).delete(delete_course))
        .route("/courses/{id}/clone", post(clone_course))
        .route("/courses/{id}/report", get(course_report))
        .route("/classrooms", get(list_classrooms))
        .route("/day-patterns", get(list_day_patterns))
        .route("/editors", post(open_editor))
        .route("/editors/{id}", delete(close_editor))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.session.lock().await.ping().await?;
    Ok(StatusCode::OK)
}

async fn reload(State(state): State<AppState>) -> Result<Json<LoadStats>, AppError> {
    let stats = state.session.lock().await.load().await?;
    Ok(Json(stats))
}

async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<CourseQueryParams>,
) -> Result<Json<Vec<Course>>, AppError> {
    let session = state.session.lock().await;
    let courses = session.filter(params.classroom.as_deref(), params.days.as_deref());
    Ok(Json(courses))
}

async fn create_course(
    State(state): State<AppState>,
    Json(mut course): Json<Course>,
) -> Result<Json<Course>, AppError> {
    course.id = 0;
    let saved = state.session.lock().await.commit(course).await?;
    Ok(Json(saved))
}

async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(mut course): Json<Course>,
) -> Result<Json<Course>, AppError> {
    course.id = id;
    let saved = state.session.lock().await.commit(course).await?;
    Ok(Json(saved))
}

async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let removed = state.session.lock().await.delete(id).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}

async fn clone_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CloneResponse>, AppError> {
    let (course, editor) = state.session.lock().await.clone_course(id)?;
    Ok(Json(CloneResponse { course, editor }))
}

async fn course_report(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AttendanceReport>, AppError> {
    let report = state.session.lock().await.report(id).await?;
    Ok(Json(report))
}

async fn list_classrooms(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let session = state.session.lock().await;
    Ok(Json(session.classrooms().to_vec()))
}

async fn list_day_patterns(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let session = state.session.lock().await;
    Ok(Json(session.day_patterns().to_vec()))
}

async fn open_editor(
    State(state): State<AppState>,
    Json(req): Json<OpenEditorRequest>,
) -> Result<Json<EditorAction>, AppError> {
    let action = state.session.lock().await.open_editor(req.course_id)?;
    Ok(Json(action))
}

async fn close_editor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let closed = state.session.lock().await.close_editor(EditorId::from(id));
    if closed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}
