use polars::error::PolarsError;

use crate::models::Organism;

#[derive(Debug, thiserror::Error)]
pub enum PhenodigmError {
    #[error("Model {model_id} is a {model_organism} model but the scorer holds {matcher_organism} phenotype matches")]
    OrganismMismatch {
        model_id: String,
        model_organism: Organism,
        matcher_organism: Organism,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Report error: {0}")]
    Report(#[from] PolarsError),
}

pub type PhenodigmResult<T> = Result<T, PhenodigmError>;
