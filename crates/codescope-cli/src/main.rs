use clap::{Parser, Subcommand};
use codescope_core::{AnalysisEngine, ScopeConfig};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "codescope")]
#[command(about = "CodeScope - code analysis engine", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single file and print the result as JSON
    File {
        path: PathBuf,
    },
    /// Analyze a snippet read from stdin; language is inferred from content
    Snippet {
        #[arg(long, help = "File name used as a detection hint")]
        name: Option<String>,
    },
    /// Analyze a project directory and print the result as JSON
    Project {
        root: PathBuf,

        #[arg(long, help = "Omit per-file analyses from the output")]
        summary: bool,
    },
    /// Print the effective configuration as TOML
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let engine = AnalysisEngine::new()?;
    init_tracing(engine.config());

    match cli.command {
        Commands::File { path } => {
            let analysis = engine.analyze_file(&path, None).await?;
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
        Commands::Snippet { name } => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            let analysis = engine.analyze_snippet(name.as_deref(), &content);
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
        Commands::Project { root, summary } => {
            let analysis = engine.analyze_project(&root).await?;
            if summary {
                let output = serde_json::json!({
                    "root": analysis.root,
                    "stats": analysis.stats,
                    "score": analysis.score,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            }
        }
        Commands::Config => {
            print!("{}", engine.config().to_toml_string()?);
        }
    }

    Ok(())
}

fn init_tracing(config: &ScopeConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
