//! `trivium patterns` — List the built-in lens patterns.

use trivium_core::pattern::PatternCatalog;

use super::kebab;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = PatternCatalog::builtin();

    println!("Available Cognitive Lens Patterns:\n");
    for pattern in catalog.all() {
        let lenses: Vec<&str> = pattern.lenses.iter().map(|l| l.as_str()).collect();
        println!("{}", kebab(&pattern.name));
        println!("  Lenses: {}", lenses.join(", "));
        println!("  Focus: {}", pattern.focus);
        println!("  Description: {}\n", pattern.description);
    }

    Ok(())
}
