//! `trivium suggest` — Suggest a lens pattern for a task description.

use trivium_core::pattern::PatternCatalog;
use trivium_engine::suggest;

use super::kebab;

pub async fn run(context: &str) -> Result<(), Box<dyn std::error::Error>> {
    // Suggestion is pure catalog logic; no remote round trip is needed.
    let catalog = PatternCatalog::builtin();
    let pattern = suggest::suggest(&catalog, context);

    let lenses: Vec<&str> = pattern.lenses.iter().map(|l| l.as_str()).collect();
    println!("Suggested pattern: {}", kebab(&pattern.name));
    println!("  Lenses: {}", lenses.join(", "));
    println!("  Focus:  {}", pattern.focus);

    Ok(())
}
