//! Configuration for ranking evaluation.
//!
//! Uses `figment` for layered configuration: defaults -> user config -> workspace config
//! -> environment -> explicit overrides. Configuration is loaded from the user config
//! directory (`config.toml`) and/or `.rankeval/config.toml` in the workspace directory.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::MetricError;

/// How items with equal scores are ordered in the ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Tied items keep their original relative order.
    #[default]
    InputOrder,
    /// Tied items appear in reverse of their original order, as produced by a stable
    /// ascending sort followed by a reversal.
    ReverseInputOrder,
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TieBreak::InputOrder => write!(f, "input_order"),
            TieBreak::ReverseInputOrder => write!(f, "reverse_input_order"),
        }
    }
}

/// Evaluation settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Number of top-ranked items the normalized AUC is computed over.
    /// `None` uses the whole ranking.
    #[serde(default)]
    pub cutoff: Option<usize>,
    /// Ordering of items with equal scores.
    #[serde(default)]
    pub tie_break: TieBreak,
}

impl EvalConfig {
    /// Validate the configuration, returning a list of problems. Empty means valid.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if let Some(cutoff) = self.cutoff.filter(|&c| c < 2) {
            problems.push(format!(
                "cutoff must be at least 2 to form an area under the recall curve, got {cutoff}"
            ));
        }
        problems
    }
}

/// Load configuration from layered sources.
///
/// Priority (highest to lowest):
/// 1. Explicit overrides (passed as argument)
/// 2. Environment variables (prefixed with `RANKEVAL_`)
/// 3. Workspace-local config (`.rankeval/config.toml`)
/// 4. User config (`<config dir>/rankeval/config.toml`)
/// 5. Built-in defaults
///
/// `overrides` is merged as a whole struct, so its `tie_break` replaces the value from
/// lower layers even when left at its default. Build overrides from a loaded config
/// (`EvalConfig { cutoff: Some(5), ..loaded }`) to change a single field.
pub fn load_config(
    workspace: Option<&Path>,
    overrides: Option<&EvalConfig>,
) -> Result<EvalConfig, MetricError> {
    let mut figment = Figment::from(Serialized::defaults(EvalConfig::default()));

    if let Some(config_dir) = directories::ProjectDirs::from("dev", "rankeval", "rankeval") {
        let user_config = config_dir.config_dir().join("config.toml");
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }
    }

    if let Some(ws) = workspace {
        let ws_config = ws.join(".rankeval").join("config.toml");
        if ws_config.exists() {
            figment = figment.merge(Toml::file(&ws_config));
        }
    }

    // RANKEVAL_CUTOFF, RANKEVAL_TIE_BREAK
    figment = figment.merge(Env::prefixed("RANKEVAL_").split("__"));

    if let Some(overrides) = overrides {
        figment = figment.merge(Serialized::defaults(overrides));
    }

    let config: EvalConfig = figment.extract()?;
    tracing::debug!(
        cutoff = ?config.cutoff,
        tie_break = %config.tie_break,
        "Loaded evaluation config"
    );
    Ok(config)
}
