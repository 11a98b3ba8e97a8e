use tracing::info;

use crate::models::{Organism, PhenotypeMatch};
use crate::scoring::best_match::best_forward_and_reciprocal_matches;
use crate::scoring::match_index::MatchIndex;
use crate::scoring::model_scorer::combined_match_score;

/// Best score the query terms could reach against an organism: the query's
/// best match in that organism for every term, scored as if it were a model.
/// Used only as the denominator when normalising model scores.
#[derive(Debug, Clone, PartialEq)]
pub struct TheoreticalModel {
    organism: Organism,
    best_phenotype_matches: Vec<PhenotypeMatch>,
    score: f64,
}

impl TheoreticalModel {
    pub fn from_index(index: &MatchIndex) -> Self {
        let best_phenotype_matches: Vec<PhenotypeMatch> =
            index.best_phenotype_matches().into_iter().cloned().collect();

        let best_phenotype_ids: Vec<&str> = best_phenotype_matches
            .iter()
            .map(PhenotypeMatch::match_phenotype_id)
            .collect();
        let self_matches = best_forward_and_reciprocal_matches(index, &best_phenotype_ids);
        let score = combined_match_score(&self_matches).unwrap_or(0.0);

        info!(
            "Best theoretical {} model scores {} from {} phenotypes",
            index.organism(),
            score,
            best_phenotype_ids.len()
        );

        TheoreticalModel {
            organism: index.organism(),
            best_phenotype_matches,
            score,
        }
    }

    pub fn organism(&self) -> Organism {
        self.organism
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn best_phenotype_matches(&self) -> &[PhenotypeMatch] {
        &self.best_phenotype_matches
    }

    /// Organism phenotype ids of the best matches, one per matched query
    /// term, so the same id can appear more than once. A model annotated
    /// with exactly these phenotypes reaches the theoretical score.
    pub fn best_phenotype_ids(&self) -> Vec<String> {
        self.best_phenotype_matches
            .iter()
            .map(|m| m.match_phenotype_id().to_string())
            .collect()
    }
}
