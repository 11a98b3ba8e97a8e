//! Phenotype matching and model scoring.
//!
//! A [`MatchIndex`] holds every precomputed match of the query terms in one
//! organism. [`OrganismPhenotypeMatcher`] pairs it with the organism's
//! [`TheoreticalModel`], and a [`ModelScorer`] turns the best forward and
//! reciprocal matches of a model into a score normalised by that model.

pub mod best_match;
pub mod match_index;
pub mod matcher;
pub mod model_scorer;
pub mod theoretical_model;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use best_match::best_forward_and_reciprocal_matches;
pub use match_index::MatchIndex;
pub use matcher::OrganismPhenotypeMatcher;
pub use model_scorer::{ModelPhenotypeMatchScore, ModelScorer, ScoringMode};
pub use theoretical_model::TheoreticalModel;
