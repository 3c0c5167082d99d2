use crate::reports::dto::GenerateRequest;

const DEFAULT_ROLE: &str = "professional report writer";
const DEFAULT_TONE: &str = "neutral";
const DEFAULT_DETAIL: &str = "standard";
const DEFAULT_LANGUAGE: &str = "English";
const DEFAULT_REPORT_TYPE: &str = "report";

fn opt<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => fallback,
    }
}

/// Default path: report type, detail level, tone and language embedded into
/// a fixed instructional scaffold.
pub fn build_default_prompt(req: &GenerateRequest) -> String {
    let role = opt(&req.role, DEFAULT_ROLE);
    let tone = opt(&req.tone, DEFAULT_TONE);
    let detail = opt(&req.detail_level, DEFAULT_DETAIL);
    let language = opt(&req.language, DEFAULT_LANGUAGE);
    let report_type = opt(&req.template, DEFAULT_REPORT_TYPE);

    format!(
        "You are acting as a {role}. Write a complete {report_type} in {language}, \
with a {detail} level of detail and a {tone} tone.\n\
Expand the key points below into full, flowing prose. Do not answer with an \
outline, a list of headings, or bare bullet points: the result must be a \
complete, ready-to-submit document.\n\n\
Key points:\n{key_points}",
        key_points = req.user_prompt.trim()
    )
}

/// Template path: the stored template content becomes the structural
/// skeleton the key points are expanded into.
pub fn build_template_prompt(req: &GenerateRequest, template_content: &str) -> String {
    let role = opt(&req.role, DEFAULT_ROLE);
    let tone = opt(&req.tone, DEFAULT_TONE);
    let detail = opt(&req.detail_level, DEFAULT_DETAIL);
    let language = opt(&req.language, DEFAULT_LANGUAGE);

    format!(
        "You are acting as a {role}. Write in {language}, with a {detail} level \
of detail and a {tone} tone.\n\
Use the following structure as the skeleton of the document and expand the \
key points below within it, keeping its sections and order. Do not return \
the structure itself or a bare outline: every section must be written out as \
full prose, producing a complete, ready-to-submit document.\n\n\
Structure:\n{template_content}\n\n\
Key points:\n{key_points}",
        key_points = req.user_prompt.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerateRequest {
        GenerateRequest {
            user_prompt: "Q3 revenue grew 12%\nChurn fell to 2%".into(),
            template: Some("business report".into()),
            detail_level: Some("high".into()),
            role: Some("financial analyst".into()),
            tone: Some("formal".into()),
            language: Some("German".into()),
            selected_template_id: None,
        }
    }

    #[test]
    fn default_prompt_embeds_all_preferences() {
        let prompt = build_default_prompt(&request());
        assert!(prompt.contains("financial analyst"));
        assert!(prompt.contains("business report"));
        assert!(prompt.contains("German"));
        assert!(prompt.contains("high"));
        assert!(prompt.contains("formal"));
        assert!(prompt.contains("Q3 revenue grew 12%"));
        assert!(prompt.contains("ready-to-submit"));
    }

    #[test]
    fn default_prompt_falls_back_when_preferences_missing() {
        let req = GenerateRequest {
            user_prompt: "only key points".into(),
            template: None,
            detail_level: Some("  ".into()),
            role: None,
            tone: None,
            language: None,
            selected_template_id: None,
        };
        let prompt = build_default_prompt(&req);
        assert!(prompt.contains("professional report writer"));
        assert!(prompt.contains("standard"));
        assert!(prompt.contains("English"));
        assert!(prompt.contains("only key points"));
    }

    #[test]
    fn template_prompt_embeds_skeleton_verbatim() {
        let skeleton = "1. Summary\n2. Findings\n3. Recommendations";
        let prompt = build_template_prompt(&request(), skeleton);
        assert!(prompt.contains(skeleton));
        assert!(prompt.contains("Q3 revenue grew 12%"));
        assert!(prompt.contains("financial analyst"));
    }

    #[test]
    fn both_paths_forbid_outline_output() {
        let default = build_default_prompt(&request());
        let templated = build_template_prompt(&request(), "1. A\n2. B");
        assert!(default.contains("Do not answer with an outline"));
        assert!(templated.contains("bare outline"));
    }
}
