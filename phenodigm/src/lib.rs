//! Cross-species phenotype similarity scoring of disease and gene models.
//!
//! Query phenotypes are matched against each organism's precomputed
//! phenotype similarities, candidate models are scored by their best
//! forward and reciprocal matches, and scores are normalised against the
//! best score the query could theoretically reach.

pub mod analysis;
pub mod config;
pub mod data_handling;
pub mod error;
pub mod models;
pub mod ranking;
pub mod report;
pub mod scoring;

pub use error::{PhenodigmError, PhenodigmResult};
pub use models::{GeneDiseaseModel, GeneOrthologModel, Model, Organism, PhenotypeMatch, PhenotypeTerm};
pub use scoring::{
    MatchIndex, ModelPhenotypeMatchScore, ModelScorer, OrganismPhenotypeMatcher, ScoringMode, TheoreticalModel,
};
