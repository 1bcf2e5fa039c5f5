//! CLI subcommands, one module per command, plus shared helpers.

pub mod analyze;
pub mod batch;
pub mod patterns;
pub mod status;
pub mod suggest;
pub mod synthesize;

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use trivium_config::AppConfig;
use trivium_core::lens::LensKind;
use trivium_core::result::ProcessResult;
use trivium_engine::TriviumEngine;

/// Build an engine from the loaded configuration. Never fails: an
/// unreachable service degrades the engine to its local fallback.
pub(crate) async fn build_engine(config: &AppConfig) -> TriviumEngine {
    TriviumEngine::connect_with_timeout(
        &config.api_url,
        config.session_id.clone(),
        Duration::from_secs(config.timeout_secs),
    )
    .await
}

/// Read the analysis input from `--file` or `--text`.
pub(crate) fn read_input(
    file: Option<PathBuf>,
    text: Option<String>,
) -> Result<String, Box<dyn std::error::Error>> {
    match (file, text) {
        (Some(path), _) => Ok(std::fs::read_to_string(path)?),
        (None, Some(text)) => Ok(text),
        (None, None) => Err("Must provide either --file or --text".into()),
    }
}

/// Parse a comma-separated lens list like `ethical,logical`.
pub(crate) fn parse_lenses(spec: &str) -> Result<Vec<LensKind>, Box<dyn std::error::Error>> {
    spec.split(',')
        .map(|name| {
            LensKind::parse(name).ok_or_else(|| format!("Unknown lens: {}", name.trim()).into())
        })
        .collect()
}

/// Display form of a pattern name: `CODE_REVIEW` → `code-review`.
pub(crate) fn kebab(name: &str) -> String {
    name.to_lowercase().replace('_', "-")
}

/// The JSON report emitted by `analyze`, `synthesize`, and `batch`.
#[derive(Debug, Serialize)]
pub(crate) struct AnalysisReport {
    pub timestamp: DateTime<Utc>,

    /// Pattern name, or "custom" for an explicit lens list.
    pub pattern: String,

    /// A 200-character excerpt of the analyzed content.
    pub content: String,

    pub analysis: BTreeMap<LensKind, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub synthesis: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blend: Option<f64>,
}

impl AnalysisReport {
    pub fn from_result(content: &str, result: &ProcessResult) -> Self {
        Self {
            timestamp: Utc::now(),
            pattern: result
                .pattern
                .as_ref()
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "custom".into()),
            content: content_excerpt(content),
            analysis: result.outputs.clone(),
            synthesis: result.synthesis().map(str::to_string),
            blend: result.synthesis_blend(),
        }
    }
}

fn content_excerpt(content: &str) -> String {
    let excerpt: String = content.chars().take(200).collect();
    if content.chars().count() > 200 {
        format!("{excerpt}...")
    } else {
        excerpt
    }
}

/// Print the report, or save it when an output path was given.
pub(crate) fn emit_report(
    report: &AnalysisReport,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(report)?;
    match output {
        Some(path) => {
            std::fs::write(&path, json)?;
            println!("Analysis saved to: {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
