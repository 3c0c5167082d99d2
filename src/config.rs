use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub generation: GenerationConfig,
    pub minio_endpoint: String,
    pub minio_bucket: String,
    pub minio_access_key: String,
    pub minio_secret_key: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is required")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET").context("JWT_SECRET is required")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "reportforge".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "reportforge-users".into()),
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60 * 24),
        };
        let generation = GenerationConfig {
            api_key: std::env::var("GEMINI_API_KEY").context("GEMINI_API_KEY is required")?,
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".into()),
            base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".into()),
        };
        Ok(Self {
            database_url,
            jwt,
            generation,
            minio_endpoint: std::env::var("MINIO_ENDPOINT").context("MINIO_ENDPOINT is required")?,
            minio_bucket: std::env::var("MINIO_BUCKET").context("MINIO_BUCKET is required")?,
            minio_access_key: std::env::var("MINIO_ACCESS_KEY")
                .context("MINIO_ACCESS_KEY is required")?,
            minio_secret_key: std::env::var("MINIO_SECRET_KEY")
                .context("MINIO_SECRET_KEY is required")?,
        })
    }
}
