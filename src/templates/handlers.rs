use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::services::AuthUser,
    error::AppError,
    state::AppState,
    templates::{
        dto::{TemplateCreated, TemplateItem, TemplateMessage, TemplatePayload},
        repo,
    },
};

pub fn template_routes() -> Router<AppState> {
    Router::new()
        .route("/templates", get(list_templates).post(create_template))
        .route("/templates/:id", put(update_template).delete(delete_template))
}

fn validated(payload: &TemplatePayload) -> Result<(&str, &str), AppError> {
    let name = payload.template_name.trim();
    let content = payload.template_content.trim();
    if name.is_empty() || content.is_empty() {
        return Err(AppError::Validation(
            "Template name and content are required".into(),
        ));
    }
    Ok((name, content))
}

#[instrument(skip(state))]
pub async fn list_templates(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<TemplateItem>>, AppError> {
    let templates = repo::list_by_owner(&state.db, user_id).await?;
    Ok(Json(templates.into_iter().map(TemplateItem::from).collect()))
}

#[instrument(skip(state, payload))]
pub async fn create_template(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<TemplatePayload>,
) -> Result<(StatusCode, Json<TemplateCreated>), AppError> {
    let (name, content) = validated(&payload)?;
    let template = repo::insert(&state.db, user_id, name, content).await?;
    info!(user_id = %user_id, template_id = %template.id, "template created");
    Ok((
        StatusCode::CREATED,
        Json(TemplateCreated {
            message: "Template created".into(),
            template_id: template.id,
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn update_template(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<TemplatePayload>,
) -> Result<Json<TemplateMessage>, AppError> {
    let (name, content) = validated(&payload)?;
    let updated = repo::update_owned(&state.db, id, user_id, name, content).await?;
    if !updated {
        // Absent and foreign-owned are indistinguishable on purpose.
        return Err(AppError::NotFound("Template"));
    }
    info!(user_id = %user_id, template_id = %id, "template updated");
    Ok(Json(TemplateMessage {
        message: "Template updated".into(),
    }))
}

#[instrument(skip(state))]
pub async fn delete_template(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<TemplateMessage>, AppError> {
    let deleted = repo::delete_owned(&state.db, id, user_id).await?;
    if !deleted {
        return Err(AppError::NotFound("Template"));
    }
    info!(user_id = %user_id, template_id = %id, "template deleted");
    Ok(Json(TemplateMessage {
        message: "Template deleted".into(),
    }))
}
