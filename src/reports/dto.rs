use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::reports::repo_types::Report;

/// Body for POST /api/generate. `user_prompt` carries the key points;
/// `template` names the report type used on the default path;
/// `selected_template_id` switches to the stored-template path unless it is
/// absent or the sentinel "default".
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub user_prompt: String,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub detail_level: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub selected_template_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub generated_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportRequest {
    pub title: String,
    #[serde(default)]
    pub template_id: Option<Uuid>,
    pub content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportItem {
    pub id: Uuid,
    pub title: String,
    pub template_id: Option<Uuid>,
    pub content: String,
    pub created_at: OffsetDateTime,
}

impl From<Report> for ReportItem {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            title: r.title,
            template_id: r.template_id,
            content: r.content,
            created_at: r.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCreated {
    pub message: String,
    pub report_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ReportMessage {
    pub message: String,
}
