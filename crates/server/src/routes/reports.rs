use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::errors::ApiError;
use crate::routes::auth::ServerState;
use crate::routes::catalog::IdQuery;
use models::report;
use service::report_service::{self, NewReport};

#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub status: Option<String>,
}

/// The dashboard renders reports and tasks in one feed; `from` tags the
/// origin and `title`/`desc` both carry the report text.
#[derive(Debug, Serialize)]
struct ReportView {
    id: i32,
    title: String,
    desc: String,
    reporter_name: String,
    is_important: bool,
    status: String,
    #[serde(rename = "createdAt")]
    created_at: DateTime<FixedOffset>,
    from: &'static str,
}

impl From<report::Model> for ReportView {
    fn from(r: report::Model) -> Self {
        Self {
            id: r.id,
            title: r.about_text.clone(),
            desc: r.about_text,
            reporter_name: r.reporter_name,
            is_important: r.is_important,
            status: r.status,
            created_at: r.created_at,
            from: "user",
        }
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<impl IntoResponse, ApiError> {
    let reports: Vec<ReportView> = report_service::list_reports(&state.db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(reports))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewReport>,
) -> Result<impl IntoResponse, ApiError> {
    let r = report_service::create_report(&state.db, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Report created successfully", "id": r.id })),
    ))
}

pub async fn update(
    State(state): State<ServerState>,
    Query(q): Query<IdQuery>,
    Json(body): Json<StatusBody>,
) -> Result<impl IntoResponse, ApiError> {
    let id = q.id.ok_or_else(|| ApiError::BadRequest("Report ID required".into()))?;
    let status = body
        .status
        .ok_or_else(|| ApiError::BadRequest("Status required".into()))?;
    report_service::update_status(&state.db, id, &status).await?;
    Ok(Json(json!({ "message": "Report updated successfully" })))
}

pub async fn delete(
    State(state): State<ServerState>,
    Query(q): Query<IdQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let id = q.id.ok_or_else(|| ApiError::BadRequest("Report ID required".into()))?;
    report_service::delete_report(&state.db, id).await?;
    Ok(Json(json!({ "message": "Report deleted successfully" })))
}
