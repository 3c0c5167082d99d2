use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
    pub plan: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarResponse {
    pub message: String,
    pub avatar_url: String,
}

/// Sent after the payment provider's checkout completes on the client; the
/// order id is recorded for reconciliation, not verified here.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlanRequest {
    pub plan: String,
    pub order_id: String,
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub message: String,
    pub plan: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteAccountRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserMessage {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_serializes_camel_case_avatar_url() {
        let response = ProfileResponse {
            id: Uuid::new_v4(),
            email: "a@x.com".into(),
            name: Some("Ann".into()),
            role: "user".into(),
            plan: "basic".into(),
            avatar_url: Some("https://assets.local/avatars/x.png".into()),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("avatarUrl"));
        assert!(json.contains("a@x.com"));
    }

    #[test]
    fn plan_request_accepts_camel_case_order_id() {
        let payload: UpdatePlanRequest =
            serde_json::from_str(r#"{"plan":"pro","orderId":"ORD-42"}"#).unwrap();
        assert_eq!(payload.plan, "pro");
        assert_eq!(payload.order_id, "ORD-42");
    }
}
