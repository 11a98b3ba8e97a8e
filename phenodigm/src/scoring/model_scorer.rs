use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{PhenodigmError, PhenodigmResult};
use crate::models::{Model, PhenotypeMatch};
use crate::scoring::matcher::OrganismPhenotypeMatcher;
use crate::scoring::theoretical_model::TheoreticalModel;

/// Normalised score of one model and the matches it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelPhenotypeMatchScore {
    score: f64,
    best_phenotype_matches: Vec<PhenotypeMatch>,
}

impl ModelPhenotypeMatchScore {
    pub fn new(score: f64, best_phenotype_matches: Vec<PhenotypeMatch>) -> Self {
        ModelPhenotypeMatchScore {
            score,
            best_phenotype_matches,
        }
    }

    pub fn empty() -> Self {
        Self::new(0.0, Vec::new())
    }

    /// In `[0, 1]`.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Forward matches then reciprocal matches.
    pub fn best_phenotype_matches(&self) -> &[PhenotypeMatch] {
        &self.best_phenotype_matches
    }
}

/// Which theoretical model a score is normalised against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoringMode<'a> {
    /// Query and model come from the same organism.
    SameSpecies,
    /// A single non-reference organism, scored against its own best case.
    SingleCrossSpecies,
    /// Several organisms ranked together, all normalised against one
    /// reference organism's theoretical model.
    MultiCrossSpecies(&'a TheoreticalModel),
}

#[derive(Debug, Clone, Copy)]
pub struct ModelScorer<'a> {
    matcher: &'a OrganismPhenotypeMatcher,
    mode: ScoringMode<'a>,
}

impl<'a> ModelScorer<'a> {
    /// Models must come from the matcher's organism.
    pub fn for_same_species(matcher: &'a OrganismPhenotypeMatcher) -> Self {
        ModelScorer {
            matcher,
            mode: ScoringMode::SameSpecies,
        }
    }

    /// Models must come from the matcher's organism.
    pub fn for_single_cross_species(matcher: &'a OrganismPhenotypeMatcher) -> Self {
        ModelScorer {
            matcher,
            mode: ScoringMode::SingleCrossSpecies,
        }
    }

    pub fn for_multi_cross_species(
        reference_model: &'a TheoreticalModel,
        matcher: &'a OrganismPhenotypeMatcher,
    ) -> Self {
        ModelScorer {
            matcher,
            mode: ScoringMode::MultiCrossSpecies(reference_model),
        }
    }

    pub fn mode(&self) -> ScoringMode<'a> {
        self.mode
    }

    pub fn matcher(&self) -> &'a OrganismPhenotypeMatcher {
        self.matcher
    }

    fn theoretical_model(&self) -> &'a TheoreticalModel {
        match self.mode {
            ScoringMode::SameSpecies | ScoringMode::SingleCrossSpecies => {
                self.matcher.best_theoretical_model()
            }
            ScoringMode::MultiCrossSpecies(reference) => reference,
        }
    }

    pub fn score_model(&self, model: &Model) -> PhenodigmResult<ModelPhenotypeMatchScore> {
        if !matches!(self.mode, ScoringMode::MultiCrossSpecies(_))
            && model.organism() != self.matcher.organism()
        {
            return Err(PhenodigmError::OrganismMismatch {
                model_id: model.id().to_string(),
                model_organism: model.organism(),
                matcher_organism: self.matcher.organism(),
            });
        }

        let matches = self
            .matcher
            .best_forward_and_reciprocal_matches(model.phenotype_ids());

        let Some(raw_score) = combined_match_score(&matches) else {
            return Ok(ModelPhenotypeMatchScore::empty());
        };
        let score = normalise(model.id(), raw_score, self.theoretical_model().score());
        debug!(
            "{} scored {} (raw {}) from {} matches",
            model.id(),
            score,
            raw_score,
            matches.len()
        );

        Ok(ModelPhenotypeMatchScore::new(
            score,
            matches.into_iter().cloned().collect(),
        ))
    }
}

/// `sqrt(mean * max)` of the match scores, `None` when there are no matches.
pub(crate) fn combined_match_score(matches: &[&PhenotypeMatch]) -> Option<f64> {
    if matches.is_empty() {
        return None;
    }
    let sum: f64 = matches.iter().map(|m| m.score()).sum();
    let max = matches.iter().map(|m| m.score()).fold(0.0, f64::max);
    let mean = sum / matches.len() as f64;
    Some((mean * max).sqrt())
}

/// Raw score over the theoretical score, kept in `[0, 1]`.
///
/// A model annotated with only part of the theoretical phenotype set can
/// still beat its raw score, since its reciprocal half holds fewer and
/// stronger matches. Those ratios are logged and capped at 1.
fn normalise(model_id: &str, raw_score: f64, theoretical_score: f64) -> f64 {
    if !(theoretical_score > 0.0 && theoretical_score.is_finite()) {
        return 0.0;
    }
    let score = raw_score / theoretical_score;
    if !score.is_finite() {
        warn!("Discarding non-finite score {} / {} for {}", raw_score, theoretical_score, model_id);
        return 0.0;
    }
    if score > 1.0 {
        warn!(
            "{} raw score {} exceeds the theoretical score {}, capping at 1",
            model_id, raw_score, theoretical_score
        );
    }
    score.clamp(0.0, 1.0)
}
