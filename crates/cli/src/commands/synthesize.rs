//! `trivium synthesize` — Analyze and blend the outputs into one narrative.

use std::path::PathBuf;

use trivium_config::AppConfig;
use trivium_core::lens::LensKind;

use super::{build_engine, emit_report, parse_lenses, read_input, AnalysisReport};

pub async fn run(
    file: Option<PathBuf>,
    text: Option<String>,
    lenses: Option<String>,
    pattern: Option<String>,
    blend: Option<f64>,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    let content = read_input(file, text)?;
    let blend = blend.unwrap_or(config.default_blend);
    let engine = build_engine(&config).await;

    // Resolve which lenses to blend and how to label the report.
    let pattern_name = pattern.unwrap_or_else(|| config.default_pattern.clone());
    let (label, lenses): (String, Vec<LensKind>) = match lenses {
        Some(spec) => ("custom".into(), parse_lenses(&spec)?),
        None => {
            let preset = engine.catalog().get(&pattern_name)?;
            (preset.name.clone(), preset.lenses.clone())
        }
    };

    let result = engine.process_and_synthesize(&content, &lenses, blend).await?;

    let mut report = AnalysisReport::from_result(&content, &result);
    report.pattern = label;
    emit_report(&report, output)
}
