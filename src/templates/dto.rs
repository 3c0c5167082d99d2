use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::templates::repo_types::Template;

/// Body for create and update; both fields required non-empty.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatePayload {
    pub template_name: String,
    pub template_content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateItem {
    pub id: Uuid,
    pub template_name: String,
    pub template_content: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<Template> for TemplateItem {
    fn from(t: Template) -> Self {
        Self {
            id: t.id,
            template_name: t.template_name,
            template_content: t.template_content,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateCreated {
    pub message: String,
    pub template_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct TemplateMessage {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_serializes_camel_case() {
        let now = OffsetDateTime::now_utc();
        let item = TemplateItem {
            id: Uuid::new_v4(),
            template_name: "Weekly status".into(),
            template_content: "1. Done\n2. Next".into(),
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("templateName"));
        assert!(json.contains("templateContent"));
        assert!(json.contains("createdAt"));
    }

    #[test]
    fn payload_accepts_camel_case_keys() {
        let payload: TemplatePayload =
            serde_json::from_str(r#"{"templateName":"T1","templateContent":"C1"}"#).unwrap();
        assert_eq!(payload.template_name, "T1");
        assert_eq!(payload.template_content, "C1");
    }
}
