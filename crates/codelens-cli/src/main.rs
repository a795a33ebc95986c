use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codelens_core::{
    explain, render_lenses, Analyzer, ClientSettings, Event, HttpAnalysisClient, Lens,
    OutputFormat, Session, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "codelens",
    author,
    version,
    about = "Code quality lens dashboard"
)]
struct Cli {
    /// Analysis backend endpoint
    #[arg(
        long,
        value_name = "URL",
        default_value = DEFAULT_ENDPOINT,
        global = true
    )]
    endpoint: String,

    /// Request timeout in seconds
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        global = true
    )]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Submit a file to the analysis backend and print its lens views
    Analyze {
        /// Source file to analyze
        file: PathBuf,
        /// Show a single lens (security, complexity, dependency, refactor)
        #[arg(long, value_name = "LENS")]
        lens: Option<String>,
        /// Emit the dashboard as JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },
    /// Print the rationale attached to an issue message
    Explain {
        /// Issue text as reported by the backend
        text: String,
        /// Emit the rationale as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the available lenses
    Lenses {
        /// Emit the lens list as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze { file, lens, json } => {
            let settings = ClientSettings {
                endpoint: cli.endpoint,
                timeout_secs: cli.timeout_secs,
            };
            analyze(&file, lens.as_deref(), json, &settings).await?
        }
        Commands::Explain { text, json } => explain_issue(&text, json)?,
        Commands::Lenses { json } => list_lenses(json)?,
    }
    Ok(())
}

async fn analyze(
    file: &Path,
    lens_label: Option<&str>,
    json: bool,
    settings: &ClientSettings,
) -> Result<()> {
    let mut session = Session::default().apply(Event::FileSelected(file.to_path_buf()));

    // Precondition check before any network traffic.
    let bytes = std::fs::read(file)
        .with_context(|| format!("failed to read file {}", file.display()))?;
    let file_name = file
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload");

    let client = HttpAnalysisClient::new(settings)?;
    session = session.apply(Event::AnalysisStarted);
    let generation = session.generation;

    match client.analyze(file_name, bytes).await {
        Ok(result) => {
            session = session.apply(Event::AnalysisCompleted { generation, result });
            debug!(generation, "analysis result stored");
        }
        Err(err) => {
            let _ = session.apply(Event::AnalysisFailed { generation });
            return Err(err)
                .with_context(|| format!("analysis request to {} failed", settings.endpoint));
        }
    }

    let result = session
        .result
        .as_ref()
        .context("analysis completed without a result")?;

    let lenses: Vec<Lens> = match lens_label {
        // An unknown label shows an empty dashboard rather than failing.
        Some(label) => Lens::parse(label).into_iter().collect(),
        None => Lens::ALL.to_vec(),
    };

    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };
    print!("{}", render_lenses(result, &lenses, format)?);
    if json {
        println!();
    }
    Ok(())
}

fn explain_issue(text: &str, json: bool) -> Result<()> {
    let explanation = explain(text);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "text": text,
                "explanation": explanation,
            }))?
        );
        return Ok(());
    }
    println!("{explanation}");
    Ok(())
}

fn list_lenses(json: bool) -> Result<()> {
    if json {
        let labels: Vec<&str> = Lens::ALL.iter().map(|lens| lens.as_str()).collect();
        println!("{}", serde_json::to_string_pretty(&labels)?);
        return Ok(());
    }
    for lens in Lens::ALL {
        println!("{lens}");
    }
    Ok(())
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tokio=warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init();
}
