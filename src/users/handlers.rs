use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use bytes::Bytes;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::{repo_types::User, services::verify_password, services::AuthUser},
    error::AppError,
    state::AppState,
    users::{
        dto::{
            AvatarResponse, DeleteAccountRequest, PlanResponse, ProfileResponse,
            UpdatePlanRequest, UpdateProfileRequest, UserMessage,
        },
        repo,
    },
};

const AVATAR_URL_TTL_SECS: u64 = 30 * 60;
const PLANS: [&str; 2] = ["basic", "pro"];

pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/user/profile", get(get_profile).put(update_profile))
}

pub fn avatar_routes() -> Router<AppState> {
    Router::new()
        .route("/user/avatar", post(upload_avatar))
        .layer(DefaultBodyLimit::max(5 * 1024 * 1024)) // 5MB
}

pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/user/plan", put(update_plan))
        .route("/user", delete(delete_account))
}

/// A valid token whose user row is gone (deleted account) reads as 401, so
/// stale clients fall back to the login flow.
async fn current_user(state: &AppState, user_id: Uuid) -> Result<User, AppError> {
    User::find_by_id(&state.db, user_id)
        .await?
        .ok_or(AppError::Unauthenticated)
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<ProfileResponse>, AppError> {
    let user = current_user(&state, user_id).await?;
    let avatar_url = match &user.avatar_key {
        Some(key) => Some(state.storage.presign_get(key, AVATAR_URL_TTL_SECS).await?),
        None => None,
    };
    Ok(Json(ProfileResponse {
        id: user.id,
        email: user.email,
        name: user.name,
        role: user.role,
        plan: user.plan,
        avatar_url,
    }))
}

#[instrument(skip(state, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<UserMessage>, AppError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Name is required".into()));
    }
    if !repo::update_name(&state.db, user_id, name).await? {
        return Err(AppError::Unauthenticated);
    }
    info!(user_id = %user_id, "profile updated");
    Ok(Json(UserMessage {
        message: "Profile updated".into(),
    }))
}

/// Multipart upload under the field name `avatar`.
#[instrument(skip(state, mp))]
pub async fn upload_avatar(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    mut mp: Multipart,
) -> Result<Json<AvatarResponse>, AppError> {
    let mut upload: Option<(Bytes, String, &'static str)> = None;
    while let Some(field) = mp
        .next_field()
        .await
        .map_err(|_| AppError::Validation("Malformed multipart body".into()))?
    {
        let name = field.name().map(|s| s.to_string());
        if name.as_deref() != Some("avatar") {
            continue;
        }
        let content_type = field
            .content_type()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "application/octet-stream".into());
        let ext = ext_from_mime(&content_type)
            .ok_or_else(|| AppError::Validation("Unsupported avatar format".into()))?;
        let data = field
            .bytes()
            .await
            .map_err(|_| AppError::Validation("Failed to read avatar upload".into()))?;
        upload = Some((data, content_type, ext));
        break;
    }

    let Some((data, content_type, ext)) = upload else {
        return Err(AppError::Validation("avatar field is required".into()));
    };
    if data.is_empty() {
        return Err(AppError::Validation("avatar file is empty".into()));
    }

    let key = format!("avatars/{}/{}.{}", user_id, Uuid::new_v4(), ext);
    state.storage.put_object(&key, data, &content_type).await?;

    let previous = current_user(&state, user_id).await?.avatar_key;
    repo::set_avatar_key(&state.db, user_id, &key).await?;
    if let Some(old) = previous {
        if let Err(e) = state.storage.delete_object(&old).await {
            warn!(error = %e, key = %old, "failed to delete previous avatar");
        }
    }

    let avatar_url = state.storage.presign_get(&key, AVATAR_URL_TTL_SECS).await?;
    info!(user_id = %user_id, key = %key, "avatar uploaded");
    Ok(Json(AvatarResponse {
        message: "Avatar updated".into(),
        avatar_url,
    }))
}

#[instrument(skip(state, payload))]
pub async fn update_plan(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<UpdatePlanRequest>,
) -> Result<Json<PlanResponse>, AppError> {
    let plan = payload.plan.trim().to_lowercase();
    if !PLANS.contains(&plan.as_str()) {
        return Err(AppError::Validation("Unknown plan".into()));
    }
    if !repo::set_plan(&state.db, user_id, &plan).await? {
        return Err(AppError::Unauthenticated);
    }
    info!(user_id = %user_id, plan = %plan, order_id = %payload.order_id, "plan updated after checkout");
    Ok(Json(PlanResponse {
        message: "Plan updated".into(),
        plan,
    }))
}

/// Account deletion requires re-entering the password even with a valid
/// token.
#[instrument(skip(state, payload))]
pub async fn delete_account(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<DeleteAccountRequest>,
) -> Result<Json<UserMessage>, AppError> {
    let user = current_user(&state, user_id).await?;
    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(user_id = %user_id, "account deletion with wrong password");
        return Err(AppError::InvalidCredentials);
    }
    repo::delete_user(&state.db, user_id).await?;
    info!(user_id = %user_id, "account deleted");
    Ok(Json(UserMessage {
        message: "Account deleted".into(),
    }))
}

fn ext_from_mime(ct: &str) -> Option<&'static str> {
    match ct {
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}
