use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::services::AuthUser,
    error::AppError,
    reports::{
        dto::{
            CreateReportRequest, GenerateRequest, GenerateResponse, ReportCreated, ReportItem,
            ReportMessage,
        },
        repo, services,
    },
    state::AppState,
    templates,
};

pub fn generate_routes() -> Router<AppState> {
    Router::new().route("/generate", post(generate))
}

pub fn history_routes() -> Router<AppState> {
    Router::new()
        .route("/reports", get(list_reports).post(create_report))
        .route("/reports/:id", delete(delete_report))
}

#[instrument(skip(state, payload))]
pub async fn generate(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let generated_text = services::generate_report(&state, user_id, &payload).await?;
    info!(user_id = %user_id, chars = generated_text.len(), "report generated");
    Ok(Json(GenerateResponse { generated_text }))
}

#[instrument(skip(state))]
pub async fn list_reports(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<ReportItem>>, AppError> {
    let reports = repo::list_by_owner(&state.db, user_id).await?;
    Ok(Json(reports.into_iter().map(ReportItem::from).collect()))
}

#[instrument(skip(state, payload))]
pub async fn create_report(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateReportRequest>,
) -> Result<(StatusCode, Json<ReportCreated>), AppError> {
    let title = payload.title.trim();
    if title.is_empty() || payload.content.trim().is_empty() {
        return Err(AppError::Validation(
            "Report title and content are required".into(),
        ));
    }

    // A referenced template must belong to the caller; anything else reads
    // as absent.
    if let Some(template_id) = payload.template_id {
        templates::repo::find_owned(&state.db, template_id, user_id)
            .await?
            .ok_or(AppError::NotFound("Template"))?;
    }

    let report = repo::insert(
        &state.db,
        user_id,
        title,
        payload.template_id,
        &payload.content,
    )
    .await?;
    info!(user_id = %user_id, report_id = %report.id, "report saved");
    Ok((
        StatusCode::CREATED,
        Json(ReportCreated {
            message: "Report saved".into(),
            report_id: report.id,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn delete_report(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ReportMessage>, AppError> {
    let deleted = repo::delete_owned(&state.db, id, user_id).await?;
    if !deleted {
        return Err(AppError::NotFound("Report"));
    }
    info!(user_id = %user_id, report_id = %id, "report deleted");
    Ok(Json(ReportMessage {
        message: "Report deleted".into(),
    }))
}
