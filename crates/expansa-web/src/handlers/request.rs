//! "Request full analysis" form. Accepted requests are logged, never stored.

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    Form,
};
use expansa_common::ApiError;
use minijinja::context;
use regex::Regex;
use uuid::Uuid;

use crate::handlers::indication_href;
use crate::state::SharedState;

pub const ROLES: &[&str] = &[
    "VP/Head of Discovery",
    "Head of BD/Licensing",
    "CSO/CTO",
    "Principal Scientist",
    "Other",
];

pub const INTERESTS: &[&str] = &[
    "Full Indication Dossier",
    "Competitive Intelligence",
    "Biomarker Strategy",
    "Clinical Development Plan",
    "Commercial Assessment",
    "Platform Demo",
];

#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    pub role: Option<String>,
    /// Zero or more entries from [`INTERESTS`].
    pub interests: Vec<String>,
    pub indication: Option<String>,
    pub message: Option<String>,
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl AnalysisRequest {
    /// Collect a urlencoded form. `interest` may repeat; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut req = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "name" => req.name = value,
                "email" => req.email = value,
                "company" => req.company = value,
                "role" => req.role = non_empty(value),
                "interest" => req.interests.extend(non_empty(value)),
                "indication" => req.indication = non_empty(value),
                "message" => req.message = non_empty(value),
                _ => {}
            }
        }
        req
    }
}

/// Human-readable problems with the submission; empty when acceptable.
pub fn validate(req: &AnalysisRequest, email_pattern: &Regex) -> Vec<&'static str> {
    let mut errors = Vec::new();
    if req.name.trim().is_empty() {
        errors.push("Name is required.");
    }
    if req.email.trim().is_empty() {
        errors.push("Email is required.");
    } else if !email_pattern.is_match(req.email.trim()) {
        errors.push("Email address does not look valid.");
    }
    if req.company.trim().is_empty() {
        errors.push("Company is required.");
    }
    if req.role.as_deref().is_some_and(|r| !ROLES.contains(&r)) {
        errors.push("Please choose a role from the list.");
    }
    if req.interests.iter().any(|i| !INTERESTS.contains(&i.as_str())) {
        errors.push("Unknown area of interest.");
    }
    errors
}

/// POST /request-analysis
pub async fn request_analysis(
    State(state): State<SharedState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<(StatusCode, Html<String>), ApiError> {
    let req = AnalysisRequest::from_pairs(pairs);
    let back_href = req.indication.as_deref().map(indication_href).unwrap_or_else(|| "/".to_string());

    let errors = validate(&req, &state.email_pattern);
    if !errors.is_empty() {
        tracing::debug!(?errors, "analysis request rejected");
        let body = state.render(
            "request.html",
            context! {
                active => "deep_dive",
                target => expansa_data::target(),
                accepted => false,
                errors => errors,
                back_href => back_href,
            },
        )?;
        return Ok((StatusCode::BAD_REQUEST, Html(body)));
    }

    let reference = Uuid::new_v4();
    tracing::info!(
        %reference,
        company = req.company.trim(),
        role = req.role.as_deref().unwrap_or("(none)"),
        interests = ?req.interests,
        indication = req.indication.as_deref().unwrap_or("(none)"),
        has_message = req.message.is_some(),
        "analysis request received"
    );
    tracing::debug!(%reference, name = req.name.trim(), email = req.email.trim(), "analysis request contact");

    let body = state.render(
        "request.html",
        context! {
            active => "deep_dive",
            target => expansa_data::target(),
            accepted => true,
            reference => reference.to_string(),
            name => req.name.trim(),
            indication => req.indication.as_deref(),
            back_href => back_href,
        },
    )?;
    Ok((StatusCode::OK, Html(body)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pattern() -> Regex {
        Regex::new(crate::state::EMAIL_PATTERN).unwrap()
    }

    fn request(name: &str, email: &str, company: &str) -> AnalysisRequest {
        AnalysisRequest {
            name: name.into(),
            email: email.into(),
            company: company.into(),
            ..AnalysisRequest::default()
        }
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_complete_request_is_valid() {
        assert!(validate(&request("Ada", "ada@example.com", "Acme"), &pattern()).is_empty());
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let errors = validate(&request(" ", "", ""), &pattern());
        assert_eq!(errors, vec!["Name is required.", "Email is required.", "Company is required."]);
    }

    #[test]
    fn test_bad_email_shape() {
        for email in ["ada", "ada@", "ada@example", "a da@example.com"] {
            let errors = validate(&request("Ada", email, "Acme"), &pattern());
            assert_eq!(errors, vec!["Email address does not look valid."], "{email}");
        }
    }

    #[test]
    fn test_repeated_interest_keys_accumulate() {
        let req = AnalysisRequest::from_pairs(pairs(&[
            ("name", "Ada"),
            ("role", "CSO/CTO"),
            ("interest", "Biomarker Strategy"),
            ("interest", "Commercial Assessment"),
            ("indication", "  "),
            ("utm_source", "mail"),
        ]));
        assert_eq!(req.role.as_deref(), Some("CSO/CTO"));
        assert_eq!(req.interests, vec!["Biomarker Strategy", "Commercial Assessment"]);
        assert!(req.indication.is_none());
    }

    #[test]
    fn test_blank_role_is_optional() {
        let req = AnalysisRequest::from_pairs(pairs(&[
            ("name", "Ada"),
            ("email", "ada@example.com"),
            ("company", "Acme"),
            ("role", ""),
        ]));
        assert!(req.role.is_none());
        assert!(validate(&req, &pattern()).is_empty());
    }

    #[test]
    fn test_unlisted_role_and_interest_rejected() {
        let mut req = request("Ada", "ada@example.com", "Acme");
        req.role = Some("Intern".into());
        req.interests = vec!["Free lunch".into()];
        assert_eq!(
            validate(&req, &pattern()),
            vec!["Please choose a role from the list.", "Unknown area of interest."]
        );
    }
}
