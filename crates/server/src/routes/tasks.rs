use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use serde_json::json;

use crate::errors::ApiError;
use crate::routes::auth::ServerState;
use crate::routes::catalog::IdQuery;
use crate::routes::reports::StatusBody;
use models::task;
use service::task_service::{self, NewTask};

/// Feed entry shape shared with reports; status goes out lower-case.
#[derive(Debug, Serialize)]
struct TaskView {
    id: i32,
    title: String,
    desc: String,
    status: String,
    #[serde(rename = "createdAt")]
    created_at: DateTime<FixedOffset>,
    from: &'static str,
}

impl From<task::Model> for TaskView {
    fn from(t: task::Model) -> Self {
        Self {
            id: t.id,
            title: t.title,
            desc: t.description,
            status: t.status.to_lowercase(),
            created_at: t.created_at,
            from: "secondary",
        }
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<impl IntoResponse, ApiError> {
    let tasks: Vec<TaskView> = task_service::list_tasks(&state.db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(tasks))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewTask>,
) -> Result<impl IntoResponse, ApiError> {
    let t = task_service::create_task(&state.db, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Task created successfully", "id": t.id })),
    ))
}

pub async fn update(
    State(state): State<ServerState>,
    Query(q): Query<IdQuery>,
    Json(body): Json<StatusBody>,
) -> Result<impl IntoResponse, ApiError> {
    let id = q.id.ok_or_else(|| ApiError::BadRequest("Task ID required".into()))?;
    let status = body
        .status
        .ok_or_else(|| ApiError::BadRequest("Status required".into()))?;
    task_service::update_status(&state.db, id, &status).await?;
    Ok(Json(json!({ "message": "Task updated successfully" })))
}

pub async fn delete(
    State(state): State<ServerState>,
    Query(q): Query<IdQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let id = q.id.ok_or_else(|| ApiError::BadRequest("Task ID required".into()))?;
    task_service::delete_task(&state.db, id).await?;
    Ok(Json(json!({ "message": "Task deleted successfully" })))
}
