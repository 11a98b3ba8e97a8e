use std::fs::{create_dir_all, File};
use std::path::{Path, PathBuf};

use polars::df;
use polars::prelude::*;
use tracing::info;

use crate::error::PhenodigmResult;
use crate::ranking::RankedModel;

pub const REPORT_FILE_NAME: &str = "phenodigm_ranking.csv";

/// Evidence column text: `query-match=score` pairs joined by `;`.
fn format_matches(entry: &RankedModel) -> String {
    entry
        .score
        .best_phenotype_matches()
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(";")
}

/// One row per ranked model, in ranking order.
pub fn ranking_to_dataframe(ranking: &[RankedModel]) -> PolarsResult<DataFrame> {
    let ranks: Vec<u64> = ranking.iter().map(|r| r.rank as u64).collect();
    let model_ids: Vec<&str> = ranking.iter().map(|r| r.model.id()).collect();
    let organisms: Vec<String> = ranking.iter().map(|r| r.model.organism().to_string()).collect();
    let gene_symbols: Vec<&str> = ranking.iter().map(|r| r.model.human_gene_symbol()).collect();
    let association_ids: Vec<&str> = ranking.iter().map(|r| r.model.association_id()).collect();
    let association_labels: Vec<&str> = ranking.iter().map(|r| r.model.association_label()).collect();
    let scores: Vec<f64> = ranking.iter().map(|r| r.score.score()).collect();
    let matches: Vec<String> = ranking.iter().map(format_matches).collect();

    df!(
        "rank" => ranks,
        "model_id" => model_ids,
        "organism" => organisms,
        "gene_symbol" => gene_symbols,
        "association_id" => association_ids,
        "association_label" => association_labels,
        "score" => scores,
        "best_phenotype_matches" => matches
    )
}

/// Writes the ranking as CSV into `output_dir`, creating it if needed.
pub fn write_report(ranking: &[RankedModel], output_dir: &Path) -> PhenodigmResult<PathBuf> {
    create_dir_all(output_dir)?;
    let report_path = output_dir.join(REPORT_FILE_NAME);

    let mut df = ranking_to_dataframe(ranking)?;
    let mut file = File::create(&report_path)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(b',')
        .finish(&mut df)?;

    info!("Wrote {} ranked models to {}", df.height(), report_path.display());
    Ok(report_path)
}
