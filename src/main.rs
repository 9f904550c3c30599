use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "readmegen")]
#[command(version, about = "AI-assisted README generator for codebases")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a README.md for a project directory
    Generate {
        #[arg(help = "Path to the project directory")]
        project_path: PathBuf,
        #[arg(long, short, help = "Path to YAML configuration file")]
        config: Option<PathBuf>,
        #[arg(
            long,
            value_delimiter = ',',
            help = "Section names to generate (per-section mode); omit for a single whole-document call"
        )]
        sections: Option<Vec<String>>,
        #[arg(long, short, help = "Output path (default: README.md inside the project)")]
        output: Option<PathBuf>,
        #[arg(long, help = "LLM provider (groq, openai)")]
        provider: Option<String>,
        #[arg(long, help = "Model to use")]
        model: Option<String>,
        #[arg(long, env = "GROQ_API_KEY", hide_env_values = true, help = "API key")]
        api_key: Option<String>,
    },

    /// Print collected project signals without calling the backend
    Scan {
        #[arg(help = "Path to the project directory")]
        project_path: PathBuf,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
        #[arg(long, help = "Full listings instead of quick-mode caps")]
        deep: bool,
    },
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", console::style("Error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Generate {
            project_path,
            config,
            sections,
            output,
            provider,
            model,
            api_key,
        } => {
            let rt = Runtime::new()?;
            rt.block_on(readmegen::cli::commands::generate::run(
                readmegen::cli::commands::generate::GenerateOptions {
                    project_path,
                    config_path: config,
                    sections,
                    output,
                    provider,
                    model,
                    api_key,
                },
            ))?;
        }
        Commands::Scan {
            project_path,
            format,
            deep,
        } => {
            readmegen::cli::commands::scan::run(project_path, &format, deep)?;
        }
    }

    Ok(())
}
