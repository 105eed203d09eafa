//! CLI command implementations

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::chart;
use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::llm::{build_provider, AnalysisRequest};
use crate::report::{extract_scores, format_score, ScoreTable};

/// Run the full analysis pipeline: load transcript, request the report,
/// print it, then chart whatever scores can be extracted.
pub async fn analyze(
    settings: &Settings,
    transcript: Option<PathBuf>,
    no_chart: bool,
) -> Result<()> {
    let path = transcript.unwrap_or_else(|| settings.transcript.path.clone());

    let transcript_text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read transcript: {}", path.display()))?;

    let provider = build_provider(settings)?;

    tracing::info!("Requesting analysis from model {}", settings.llm.model);
    let response = provider
        .analyze(AnalysisRequest {
            transcript: &transcript_text,
        })
        .await?;

    println!("--- Full Model Response ---");
    println!("{}", response);
    println!("---------------------------");
    println!();

    // Extraction failures are not fatal: the text report above is the main
    // output, the chart is a bonus.
    match extract_scores(&response) {
        Ok(table) => {
            println!("Extracted scores:");
            print_score_table(&table);

            if no_chart {
                return Ok(());
            }

            chart::run(&table)?;
        }
        Err(err) => {
            tracing::warn!("Skipping chart: {}", err);
        }
    }

    Ok(())
}

/// Run the score extractor against a saved model response.
pub fn extract(response_path: &Path, json: bool) -> Result<()> {
    let text = std::fs::read_to_string(response_path).with_context(|| {
        format!(
            "Failed to read response file: {}",
            response_path.display()
        )
    })?;

    let table = extract_scores(&text).context("No score table extracted")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&table.to_json())?);
    } else {
        print_score_table(&table);
    }

    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

fn print_score_table(table: &ScoreTable) {
    for (metric, score) in table.entries() {
        println!("  {:<20} {:>5}", metric, format_score(*score));
    }
}
