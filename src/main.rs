//! SolGuard - AI-assisted Solidity audit dashboard (terminal frontend)

mod api;
mod logic;
pub mod constants;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use api::commands::{self, AnalyzeOptions};
use logic::analyzer::AnalysisMode;
use logic::backend::{BackendClient, BackendConfig};

/// AI-assisted Solidity vulnerability audit dashboard.
///
/// This binary is a thin frontend over the `logic` layer: a typed client for
/// the inference backend plus the analyzer orchestration and report
/// rendering. All model inference runs on the backend; nothing is analyzed
/// locally.
#[derive(Parser)]
#[command(
    name = "solguard",
    version,
    about = "AI-assisted Solidity vulnerability audit dashboard",
    long_about = None
)]
struct Cli {
    /// Backend base URL (overrides the BACKEND_URL environment variable)
    #[arg(long, global = true)]
    backend: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show backend health, device, and model status
    Status,

    /// List the models the backend can run, best first
    Models {
        /// Emit the raw listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Describe the vulnerability classes the dashboard knows about
    Vulnerabilities {
        /// Emit the raw listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the bundled sample contracts and functions
    Samples {
        /// List function samples instead of contract samples
        #[arg(long)]
        function: bool,
    },

    /// Analyze a contract (default) or a single function
    Analyze {
        /// Solidity source file ("-" for stdin)
        input: Option<PathBuf>,

        /// Analyze as a single function instead of a whole contract
        #[arg(long)]
        function: bool,

        /// Contract name forwarded to the backend
        #[arg(long)]
        name: Option<String>,

        /// Model to use (defaults to backend auto-selection)
        #[arg(long)]
        model: Option<String>,

        /// Analyze a bundled sample instead of a file
        #[arg(long, conflicts_with = "input")]
        sample: Option<String>,

        /// Expand every function row in the report
        #[arg(long)]
        expand_all: bool,

        /// Emit the raw backend response as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    log::info!("Starting {} v{}", constants::APP_NAME, constants::APP_VERSION);

    let cli = Cli::parse();

    let mut config = BackendConfig::default();
    if let Some(backend) = cli.backend.clone() {
        config.base_url = backend;
    }
    let client = BackendClient::new(config);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(cli.command, &client))
}

async fn run(command: Command, client: &BackendClient) -> Result<()> {
    match command {
        Command::Status => commands::status(client).await,
        Command::Models { json } => commands::list_models(client, json).await,
        Command::Vulnerabilities { json } => commands::list_vulnerabilities(client, json).await,
        Command::Samples { function } => {
            let mode = if function { AnalysisMode::Function } else { AnalysisMode::Contract };
            commands::list_samples(mode)
        }
        Command::Analyze { input, function, name, model, sample, expand_all, json } => {
            let mode = if function { AnalysisMode::Function } else { AnalysisMode::Contract };
            commands::analyze(
                client,
                AnalyzeOptions {
                    mode,
                    input,
                    sample,
                    contract_name: name,
                    model,
                    expand_all,
                    json,
                },
            )
            .await
        }
    }
}
