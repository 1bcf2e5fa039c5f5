//! Trivium CLI — the main entry point.
//!
//! Commands:
//! - `analyze`    — Run text or a file through cognitive lenses
//! - `synthesize` — Analyze and blend the outputs into one narrative
//! - `suggest`    — Suggest a lens pattern for a task description
//! - `patterns`   — List the built-in lens patterns
//! - `batch`      — Analyze every matching file in a directory
//! - `status`     — Show configuration and remote service status

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "trivium",
    about = "Trivium — cognitive lens processing for developers",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a file or text through cognitive lenses
    Analyze {
        /// File to analyze
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Text content to analyze
        #[arg(short, long)]
        text: Option<String>,

        /// Comma-separated lens names (e.g. ethical,logical)
        #[arg(short, long)]
        lenses: Option<String>,

        /// Predefined pattern (e.g. code-review, debugging)
        #[arg(short, long)]
        pattern: Option<String>,

        /// Write the JSON report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Analyze and blend the outputs into one synthesis narrative
    Synthesize {
        /// File to analyze
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Text content to analyze
        #[arg(short, long)]
        text: Option<String>,

        /// Comma-separated lens names (e.g. ethical,logical)
        #[arg(short, long)]
        lenses: Option<String>,

        /// Predefined pattern (e.g. code-review, debugging)
        #[arg(short, long)]
        pattern: Option<String>,

        /// Blend ratio in [0.0, 1.0]
        #[arg(short, long)]
        blend: Option<f64>,

        /// Write the JSON report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Suggest a lens pattern for a task description
    Suggest {
        /// Free-text description of the task at hand
        context: String,
    },

    /// List available cognitive lens patterns
    Patterns,

    /// Analyze every matching file in a directory
    Batch {
        /// Directory to process
        #[arg(short, long)]
        dir: PathBuf,

        /// File extensions to include (comma-separated)
        #[arg(short, long, default_value = "js,ts,py,md,rs")]
        ext: String,

        /// Pattern to apply
        #[arg(short, long, default_value = "documentation")]
        pattern: String,

        /// Output directory for results (default: next to each input file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show configuration and remote service status
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Analyze {
            file,
            text,
            lenses,
            pattern,
            output,
        } => commands::analyze::run(file, text, lenses, pattern, output).await?,
        Commands::Synthesize {
            file,
            text,
            lenses,
            pattern,
            blend,
            output,
        } => commands::synthesize::run(file, text, lenses, pattern, blend, output).await?,
        Commands::Suggest { context } => commands::suggest::run(&context).await?,
        Commands::Patterns => commands::patterns::run().await?,
        Commands::Batch {
            dir,
            ext,
            pattern,
            output,
        } => commands::batch::run(dir, ext, pattern, output).await?,
        Commands::Status => commands::status::run().await?,
    }

    Ok(())
}
