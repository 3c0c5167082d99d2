use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Saved report history record. Ownership rules mirror templates: all access
/// goes through `(id, user_id)`-filtered queries.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Report {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub template_id: Option<Uuid>,
    pub content: String,
    pub created_at: OffsetDateTime,
}
