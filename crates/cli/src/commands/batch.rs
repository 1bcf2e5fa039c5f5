//! `trivium batch` — Analyze every matching file in a directory.
//!
//! Walks the directory recursively, filters by extension, and writes one
//! `<name>.analysis.json` per input. A file that fails to process is
//! reported and skipped; the batch keeps going.

use std::path::{Path, PathBuf};

use trivium_config::AppConfig;
use trivium_engine::TriviumEngine;

use super::{build_engine, AnalysisReport};

pub async fn run(
    dir: PathBuf,
    ext: String,
    pattern: String,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    let engine = build_engine(&config).await;

    let extensions: Vec<String> = ext.split(',').map(|e| e.trim().to_string()).collect();
    let mut files = Vec::new();
    collect_files(&dir, &extensions, &mut files)?;

    println!("Processing {} files with {} pattern...", files.len(), pattern);

    for file in files {
        match process_file(&engine, &file, &pattern, output.as_deref()).await {
            Ok(out_path) => println!("✓ {} -> {}", file.display(), out_path.display()),
            Err(err) => eprintln!("✗ Error processing {}: {err}", file.display()),
        }
    }

    Ok(())
}

async fn process_file(
    engine: &TriviumEngine,
    file: &Path,
    pattern: &str,
    output_dir: Option<&Path>,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(file)?;
    let result = engine.process_with_pattern_name(&content, pattern).await?;
    let report = AnalysisReport::from_result(&content, &result);

    let out_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "file".into());
            dir.join(format!("{name}.analysis.json"))
        }
        None => PathBuf::from(format!("{}.analysis.json", file.display())),
    };

    std::fs::write(&out_path, serde_json::to_string_pretty(&report)?)?;
    Ok(out_path)
}

/// Recursively collect files whose extension is in the allow-list.
fn collect_files(
    dir: &Path,
    extensions: &[String],
    files: &mut Vec<PathBuf>,
) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(&path, extensions, files)?;
        } else if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            if extensions.iter().any(|allowed| allowed == ext) {
                files.push(path);
            }
        }
    }
    Ok(())
}
