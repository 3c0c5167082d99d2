use sqlx::PgPool;
use uuid::Uuid;

pub async fn update_name(db: &PgPool, id: Uuid, name: &str) -> anyhow::Result<bool> {
    let result = sqlx::query(r#"UPDATE users SET name = $2 WHERE id = $1"#)
        .bind(id)
        .bind(name)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn set_avatar_key(db: &PgPool, id: Uuid, key: &str) -> anyhow::Result<bool> {
    let result = sqlx::query(r#"UPDATE users SET avatar_key = $2 WHERE id = $1"#)
        .bind(id)
        .bind(key)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn set_plan(db: &PgPool, id: Uuid, plan: &str) -> anyhow::Result<bool> {
    let result = sqlx::query(r#"UPDATE users SET plan = $2 WHERE id = $1"#)
        .bind(id)
        .bind(plan)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Owned templates and reports go with the user via ON DELETE CASCADE.
pub async fn delete_user(db: &PgPool, id: Uuid) -> anyhow::Result<bool> {
    let result = sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}
