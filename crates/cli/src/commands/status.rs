//! `trivium status` — Show configuration and remote service status.

use trivium_config::AppConfig;
use trivium_core::service::LOCAL_SESSION;

use super::build_engine;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let engine = build_engine(&config).await;

    println!("Trivium Status");
    println!("==============");
    println!("  Config dir:   {}", AppConfig::config_dir().display());
    println!("  API URL:      {}", config.api_url);
    println!("  Timeout:      {}s", config.timeout_secs);
    println!("  Pattern:      {}", config.default_pattern);
    println!("  Blend:        {}", config.default_blend);
    println!("  Patterns:     {} available", engine.catalog().all().len());

    if engine.session() == LOCAL_SESSION {
        println!("  Session:      offline (local fallback)");
    } else {
        println!("  Session:      {} (remote)", engine.session());
    }

    let config_path = AppConfig::config_dir().join("config.toml");
    if config_path.exists() {
        println!("\n  ✅ Config file found");
    } else {
        println!("\n  ⚠️  No config file — defaults in effect");
    }

    Ok(())
}
