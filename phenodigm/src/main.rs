use std::env;
use std::path::PathBuf;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use phenodigm::analysis::run_analysis;
use phenodigm::config::{default_config_path, RunConfig};
use phenodigm::data_handling::analysis_input::AnalysisInputFile;
use phenodigm::data_handling::Dataset;
use phenodigm::report::write_report;

fn main() -> anyhow::Result<()> {
    // Setup logging and run configuration
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting the PhenoDigm model scoring run");

    let config_path = env::args().nth(1).map(PathBuf::from).unwrap_or_else(default_config_path);
    let config = RunConfig::load(&config_path)
        .with_context(|| format!("Failed to load run configuration {}", config_path.display()))?;

    let input = AnalysisInputFile { path: config.input.clone() }
        .load()
        .context("Failed to load analysis input")?;

    let ranking = run_analysis(&config, &input)?;
    for entry in ranking.iter().take(10) {
        info!(
            "#{:<3} {:<12} {:<6} {:<10} {:.4}",
            entry.rank,
            entry.model.id(),
            entry.model.organism(),
            entry.model.human_gene_symbol(),
            entry.score.score()
        );
    }

    let report_path = write_report(&ranking, &config.output_dir).context("Failed to write ranking report")?;
    info!("Ranking saved to: {}", report_path.display());

    Ok(())
}
