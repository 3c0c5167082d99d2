use crate::reports::repo_types::Report;
use sqlx::PgPool;
use uuid::Uuid;

pub async fn insert(
    db: &PgPool,
    user_id: Uuid,
    title: &str,
    template_id: Option<Uuid>,
    content: &str,
) -> anyhow::Result<Report> {
    let report = sqlx::query_as::<_, Report>(
        r#"
        INSERT INTO reports (user_id, title, template_id, content)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, title, template_id, content, created_at
        "#,
    )
    .bind(user_id)
    .bind(title)
    .bind(template_id)
    .bind(content)
    .fetch_one(db)
    .await?;
    Ok(report)
}

pub async fn list_by_owner(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Report>> {
    let rows = sqlx::query_as::<_, Report>(
        r#"
        SELECT id, user_id, title, template_id, content, created_at
        FROM reports
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// Single ownership-filtered statement; false when no owned row matched.
pub async fn delete_owned(db: &PgPool, id: Uuid, user_id: Uuid) -> anyhow::Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM reports
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(id)
    .bind(user_id)
    .execute(db)
    .await?;
    Ok(result.rows_affected() > 0)
}
