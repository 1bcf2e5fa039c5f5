//! `trivium analyze` — Run text or a file through cognitive lenses.

use std::path::PathBuf;

use trivium_config::AppConfig;

use super::{build_engine, emit_report, parse_lenses, read_input, AnalysisReport};

pub async fn run(
    file: Option<PathBuf>,
    text: Option<String>,
    lenses: Option<String>,
    pattern: Option<String>,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    let content = read_input(file, text)?;
    let engine = build_engine(&config).await;

    let result = match (pattern, lenses) {
        (Some(name), _) => engine.process_with_pattern_name(&content, &name).await?,
        (None, Some(spec)) => {
            engine
                .process_text(&content, &parse_lenses(&spec)?)
                .await?
        }
        (None, None) => {
            engine
                .process_with_pattern_name(&content, &config.default_pattern)
                .await?
        }
    };

    let report = AnalysisReport::from_result(&content, &result);
    emit_report(&report, output)
}
