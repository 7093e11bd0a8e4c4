//! Dashboard Commands
//!
//! The user-facing surface: each function backs one CLI subcommand, fetching
//! through the backend client and printing through the render layer. All
//! orchestration and presentation rules live in `logic`; this layer only
//! wires them to the terminal.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use colored::Colorize;

use crate::constants;
use crate::logic::analyzer::{AnalysisMode, AnalyzerSession, SubmitError};
use crate::logic::backend::{AnalysisOutcome, BackendClient};
use crate::logic::render::{self, format_confidence, ResultsView, RiskTier};
use crate::logic::{catalog, models, samples};

/// Inputs for one `analyze` invocation
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    pub mode: AnalysisMode,
    pub input: Option<PathBuf>,
    pub sample: Option<String>,
    pub contract_name: Option<String>,
    pub model: Option<String>,
    pub expand_all: bool,
    pub json: bool,
}

// ============================================================================
// STATUS PANEL
// ============================================================================

/// Show backend health, device, and model status (the dashboard header).
pub async fn status(client: &BackendClient) -> Result<()> {
    log::info!("Probing backend at {}", client.base_url());

    let (health, listing, info) =
        tokio::try_join!(client.get_health(), client.get_models(), client.get_info())
            .map_err(|e| anyhow!("Failed to connect to backend API: {}", e))?;

    let mode_label =
        if health.models_loaded { "Ready".green().bold() } else { "Demo Mode".yellow().bold() };

    println!("{} Dashboard Status", constants::APP_NAME);
    println!("{}", "=".repeat(40));
    println!("  Backend: {} ({} v{})", client.base_url(), info.name, info.version);
    println!("      {}", info.description);
    println!("  API status: {} (v{})", health.status, health.version);
    println!("  Mode: {}", mode_label);
    println!("  Device: {}", health.device);
    println!("  Models available: {}", listing.models.len());
    println!("  Current model: {}", info.current_model);
    println!("  Vulnerability types: {}", info.supported_vulnerabilities.len());
    println!("  Checked: {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));

    if !health.models_loaded {
        println!();
        println!("{}", "Models not loaded. Please train the models first".yellow());
    }

    Ok(())
}

// ============================================================================
// MODEL PANEL
// ============================================================================

/// List the models the backend can run, best first.
pub async fn list_models(client: &BackendClient, json: bool) -> Result<()> {
    let listing =
        client.get_models().await.map_err(|e| anyhow!("Failed to fetch models: {}", e))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    let mut sorted = listing.models.clone();
    models::sort_models(&mut sorted);

    println!("Available Models ({})", listing.total_models);
    println!("{}", "=".repeat(40));
    println!(
        "  {} {} - automatically selects the best available model",
        "auto".bold(),
        "[DEFAULT]".cyan()
    );

    for model in &sorted {
        let marker = if model.available { "●".green() } else { "○".bright_black() };
        let type_badge = model.model_type.replace('_', " ").to_uppercase();
        let availability = if model.available { "" } else { " - not available" };

        println!("  {} {} [{}]{}", marker, model.name.bold(), type_badge, availability);
        if let Some(description) = &model.description {
            println!("      {}", description);
        }
        if model.available {
            if let Some(perf) = model.performance {
                println!(
                    "      accuracy {}  f1 {}  precision {}  recall {}  overall {}",
                    format_confidence(perf.accuracy),
                    format_confidence(perf.f1_score),
                    format_confidence(perf.precision),
                    format_confidence(perf.recall),
                    format_confidence(models::overall_score(&perf))
                );
            }
        }
    }

    let (available, unavailable) = models::availability_counts(&sorted);
    println!();
    println!(
        "  {} available - {} unavailable - default model: {}",
        available, unavailable, listing.default_model
    );

    Ok(())
}

// ============================================================================
// VULNERABILITY PANEL
// ============================================================================

/// Describe the vulnerability classes, preferring the backend's listing and
/// falling back to the built-in catalog when it is unreachable.
pub async fn list_vulnerabilities(client: &BackendClient, json: bool) -> Result<()> {
    match client.get_vulnerabilities().await {
        Ok(listing) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&listing)?);
                return Ok(());
            }

            println!("Detectable Vulnerability Types ({})", listing.total_types);
            println!("{}", "=".repeat(40));
            for vulnerability in &listing.vulnerabilities {
                let tier = RiskTier::from_level(&vulnerability.severity);
                println!(
                    "  {} [{}]",
                    vulnerability.title.bold(),
                    vulnerability.severity.color(tier.color())
                );
                println!("      {}", vulnerability.description);
                if let Some(entry) = catalog::find(&vulnerability.kind) {
                    println!("      Fix: {}", entry.recommendation);
                }
            }
        }
        Err(err) => {
            log::warn!("Vulnerability listing unavailable from backend: {}", err);

            if json {
                println!("{}", serde_json::to_string_pretty(&*catalog::VULNERABILITY_CATALOG)?);
                return Ok(());
            }

            println!("{}", "Backend unreachable - showing the built-in catalog".yellow());
            println!();
            println!("Vulnerability Catalog ({})", catalog::VULNERABILITY_CATALOG.len());
            println!("{}", "=".repeat(40));
            for entry in catalog::VULNERABILITY_CATALOG.iter() {
                let tier = RiskTier::from_level(entry.severity);
                println!("  {} [{}]", entry.title.bold(), entry.severity.color(tier.color()));
                println!("      {}", entry.description);
                println!("      Fix: {}", entry.recommendation);
            }
        }
    }

    Ok(())
}

// ============================================================================
// SAMPLES
// ============================================================================

/// List the bundled sample contracts or functions.
pub fn list_samples(mode: AnalysisMode) -> Result<()> {
    let samples = samples::for_mode(mode);

    println!("Bundled {} samples ({})", mode.as_str(), samples.len());
    println!("{}", "=".repeat(40));
    for sample in samples {
        println!("  {} ({} lines)", sample.name.bold(), sample.code.lines().count());
    }

    let function_flag = if mode == AnalysisMode::Function { "--function " } else { "" };
    println!();
    println!("Analyze one with: solguard analyze {}--sample \"<name>\"", function_flag);

    Ok(())
}

// ============================================================================
// ANALYZE
// ============================================================================

/// Run one analysis submission and print the report.
pub async fn analyze(client: &BackendClient, opts: AnalyzeOptions) -> Result<()> {
    let (code, sample_name) = resolve_input(&opts)?;
    let contract_name = opts.contract_name.clone().or(sample_name);

    // Validate before touching the network at all; the session re-checks.
    if code.trim().is_empty() {
        return Err(anyhow!(SubmitError::EmptyCode.notification()));
    }

    // Optimistic probe only: the submission below proceeds either way.
    if !client.test_connection().await {
        println!("{}", "Backend probe failed - attempting analysis anyway".yellow());
    }

    let mut session = AnalyzerSession::new(client);
    let outcome = session
        .submit(opts.mode, &code, contract_name.as_deref(), opts.model.as_deref())
        .await
        .map_err(|err| anyhow!(err.notification()))?;

    if opts.json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }

    println!("{}", render::success_notification(outcome).green().bold());
    println!();

    let view = match outcome {
        AnalysisOutcome::Contract(response) => {
            if opts.expand_all {
                ResultsView::expand_all(response.functions.len())
            } else {
                // A one-shot report has no click-to-expand, so open the rows
                // the backend flagged vulnerable and leave the rest collapsed.
                let mut view = ResultsView::new();
                for (index, function) in response.functions.iter().enumerate() {
                    if function.vulnerable {
                        view.toggle(index);
                    }
                }
                view
            }
        }
        AnalysisOutcome::Function(_) => ResultsView::new(),
    };

    log::debug!("Rendering report with {} expanded rows", view.expanded_count());
    print!("{}", render::render_outcome(outcome, &view));

    Ok(())
}

/// Resolve the code to analyze and, for samples, a default contract name.
fn resolve_input(opts: &AnalyzeOptions) -> Result<(String, Option<String>)> {
    if let Some(sample_name) = &opts.sample {
        let sample = samples::find(opts.mode, sample_name).ok_or_else(|| {
            let names: Vec<&str> =
                samples::for_mode(opts.mode).iter().map(|s| s.name).collect();
            anyhow!(
                "Unknown {} sample '{}'. Available: {}",
                opts.mode.as_str(),
                sample_name,
                names.join(", ")
            )
        })?;
        return Ok((sample.code.to_string(), Some(sample.name.to_string())));
    }

    if let Some(path) = &opts.input {
        if path.as_os_str() == "-" {
            let code = std::io::read_to_string(std::io::stdin())
                .context("Failed to read code from stdin")?;
            return Ok((code, None));
        }
        let code = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        return Ok((code, None));
    }

    bail!("Provide a Solidity source file, \"-\" for stdin, or --sample <name>");
}
