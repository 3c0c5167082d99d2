use crate::templates::repo_types::Template;
use sqlx::PgPool;
use uuid::Uuid;

pub async fn insert(
    db: &PgPool,
    user_id: Uuid,
    name: &str,
    content: &str,
) -> anyhow::Result<Template> {
    let template = sqlx::query_as::<_, Template>(
        r#"
        INSERT INTO templates (user_id, template_name, template_content)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, template_name, template_content, created_at, updated_at
        "#,
    )
    .bind(user_id)
    .bind(name)
    .bind(content)
    .fetch_one(db)
    .await?;
    Ok(template)
}

pub async fn list_by_owner(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Template>> {
    let rows = sqlx::query_as::<_, Template>(
        r#"
        SELECT id, user_id, template_name, template_content, created_at, updated_at
        FROM templates
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn find_owned(db: &PgPool, id: Uuid, user_id: Uuid) -> anyhow::Result<Option<Template>> {
    let template = sqlx::query_as::<_, Template>(
        r#"
        SELECT id, user_id, template_name, template_content, created_at, updated_at
        FROM templates
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(db)
    .await?;
    Ok(template)
}

/// Owner filter lives in the statement itself, not in a prior read, so there
/// is no window between the ownership check and the mutation. Returns false
/// when no owned row matched.
pub async fn update_owned(
    db: &PgPool,
    id: Uuid,
    user_id: Uuid,
    name: &str,
    content: &str,
) -> anyhow::Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE templates
        SET template_name = $3, template_content = $4, updated_at = now()
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(name)
    .bind(content)
    .execute(db)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Same single-statement ownership semantics as [`update_owned`].
pub async fn delete_owned(db: &PgPool, id: Uuid, user_id: Uuid) -> anyhow::Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM templates
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(id)
    .bind(user_id)
    .execute(db)
    .await?;
    Ok(result.rows_affected() > 0)
}
