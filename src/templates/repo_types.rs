use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Prompt template owned by a single user. Every query touching this table
/// filters on `(id, user_id)`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Template {
    pub id: Uuid,
    pub user_id: Uuid,
    pub template_name: String,
    pub template_content: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}
