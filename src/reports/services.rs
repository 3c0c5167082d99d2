use tracing::error;
use uuid::Uuid;

use crate::error::AppError;
use crate::generation::GenerationError;
use crate::reports::dto::GenerateRequest;
use crate::reports::prompt;
use crate::state::AppState;
use crate::templates;

/// Clients send this sentinel when no stored template should be used.
const DEFAULT_TEMPLATE_SENTINEL: &str = "default";

fn stored_template_ref(req: &GenerateRequest) -> Option<&str> {
    req.selected_template_id
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != DEFAULT_TEMPLATE_SENTINEL)
}

/// Validate, optionally resolve the caller's stored template, assemble the
/// prompt and make the single generation call.
pub async fn generate_report(
    state: &AppState,
    user_id: Uuid,
    req: &GenerateRequest,
) -> Result<String, AppError> {
    if req.user_prompt.trim().is_empty() {
        return Err(AppError::Validation("Key points must not be empty".into()));
    }

    let stored = match stored_template_ref(req) {
        Some(raw) => {
            // A non-UUID reference behaves exactly like a missing template.
            let id = Uuid::parse_str(raw).map_err(|_| AppError::NotFound("Template"))?;
            let template = templates::repo::find_owned(&state.db, id, user_id)
                .await?
                .ok_or(AppError::NotFound("Template"))?;
            Some(template)
        }
        None => None,
    };

    let assembled = match &stored {
        Some(t) => prompt::build_template_prompt(req, &t.template_content),
        None => prompt::build_default_prompt(req),
    };

    state
        .generator
        .generate_text(&assembled)
        .await
        .map_err(|e| match e {
            GenerationError::ModelNotFound(detail) => {
                error!(detail = %detail, "generation model not found upstream");
                AppError::ModelMisconfigured
            }
            other => {
                error!(error = %other, "generation call failed");
                AppError::GenerationFailed
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::GenerationClient;
    use axum::async_trait;
    use std::sync::{Arc, Mutex};

    /// Captures every outbound prompt; the vector doubles as a call counter.
    #[derive(Clone, Default)]
    struct RecordingClient {
        prompts: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingClient {
        fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
        fn last_prompt(&self) -> String {
            self.prompts.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl GenerationClient for RecordingClient {
        async fn generate_text(&self, prompt: &str) -> Result<String, GenerationError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok("stub output".to_string())
        }
    }

    struct FailingClient(fn() -> GenerationError);

    #[async_trait]
    impl GenerationClient for FailingClient {
        async fn generate_text(&self, _prompt: &str) -> Result<String, GenerationError> {
            Err((self.0)())
        }
    }

    fn request(user_prompt: &str, selected: Option<&str>) -> GenerateRequest {
        GenerateRequest {
            user_prompt: user_prompt.into(),
            template: Some("status report".into()),
            detail_level: None,
            role: None,
            tone: None,
            language: None,
            selected_template_id: selected.map(String::from),
        }
    }

    #[tokio::test]
    async fn empty_key_points_fail_before_any_external_call() {
        let recorder = RecordingClient::default();
        let mut state = crate::state::AppState::fake();
        state.generator = Arc::new(recorder.clone());

        let err = generate_report(&state, Uuid::new_v4(), &request("   ", None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(recorder.calls(), 0);
    }

    // The fake state's pool cannot reach a database, so success here also
    // proves no template lookup happened on the default path.
    #[tokio::test]
    async fn absent_template_id_uses_default_path() {
        let recorder = RecordingClient::default();
        let mut state = crate::state::AppState::fake();
        state.generator = Arc::new(recorder.clone());

        let text = generate_report(&state, Uuid::new_v4(), &request("Revenue up 12%", None))
            .await
            .unwrap();
        assert_eq!(text, "stub output");
        assert_eq!(recorder.calls(), 1);
        assert!(recorder.last_prompt().contains("Revenue up 12%"));
        assert!(recorder.last_prompt().contains("status report"));
    }

    #[tokio::test]
    async fn default_sentinel_skips_template_lookup() {
        let recorder = RecordingClient::default();
        let mut state = crate::state::AppState::fake();
        state.generator = Arc::new(recorder.clone());

        let text = generate_report(
            &state,
            Uuid::new_v4(),
            &request("Revenue up 12%", Some("default")),
        )
        .await
        .unwrap();
        assert_eq!(text, "stub output");
        assert_eq!(recorder.calls(), 1);
    }

    #[tokio::test]
    async fn non_uuid_template_ref_is_not_found() {
        let recorder = RecordingClient::default();
        let mut state = crate::state::AppState::fake();
        state.generator = Arc::new(recorder.clone());

        let err = generate_report(
            &state,
            Uuid::new_v4(),
            &request("Revenue up 12%", Some("not-a-uuid")),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound("Template")));
        assert_eq!(recorder.calls(), 0);
    }

    #[tokio::test]
    async fn model_not_found_maps_to_misconfigured() {
        let mut state = crate::state::AppState::fake();
        state.generator = Arc::new(FailingClient(|| {
            GenerationError::ModelNotFound("models/x is not found".into())
        }));

        let err = generate_report(&state, Uuid::new_v4(), &request("points", None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ModelMisconfigured));
    }

    #[tokio::test]
    async fn upstream_rejection_maps_to_generation_failed() {
        let mut state = crate::state::AppState::fake();
        state.generator = Arc::new(FailingClient(|| {
            GenerationError::Upstream("500: boom".into())
        }));

        let err = generate_report(&state, Uuid::new_v4(), &request("points", None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::GenerationFailed));
    }
}
