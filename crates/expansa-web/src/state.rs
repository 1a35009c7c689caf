//! Shared application state for the web server.

use std::sync::Arc;

use expansa_common::{ApiError, Indication, RelationshipEdge};
use expansa_config::Config;
use expansa_ranker::TierThresholds;
use minijinja::Environment;
use regex::Regex;
use serde::Serialize;

use crate::templates;

/// Loose `local@domain.tld` shape check for the request form.
pub(crate) const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub thresholds: TierThresholds,
    pub indications: Vec<Indication>,
    pub edges: Vec<RelationshipEdge>,
    pub email_pattern: Regex,
    templates: Environment<'static>,
}

impl AppState {
    /// State over the compiled-in dataset.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Self::with_data(
            config,
            expansa_data::indications().to_vec(),
            expansa_data::relationships().to_vec(),
        )
    }

    pub fn with_data(
        config: &Config,
        indications: Vec<Indication>,
        edges: Vec<RelationshipEdge>,
    ) -> anyhow::Result<Self> {
        let thresholds = TierThresholds::new(config.scoring.tier1_min, config.scoring.tier2_min);
        Ok(Self {
            thresholds,
            indications,
            edges,
            email_pattern: Regex::new(EMAIL_PATTERN)?,
            templates: templates::environment()?,
        })
    }

    /// Render a named page template.
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, ApiError> {
        self.templates
            .get_template(name)
            .and_then(|t| t.render(ctx))
            .map_err(|e| ApiError::Internal(format!("failed to render {name}: {e}")))
    }
}

pub type SharedState = Arc<AppState>;
