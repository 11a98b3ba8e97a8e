use rayon::prelude::*;
use serde::Serialize;
use tracing::{error, info};

use crate::models::Model;
use crate::scoring::{ModelPhenotypeMatchScore, ModelScorer};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedModel {
    /// 1-based.
    pub rank: usize,
    pub model: Model,
    pub score: ModelPhenotypeMatchScore,
}

/// Scores every model in parallel and ranks them by descending score.
///
/// A model that cannot be scored is logged and left out; the others are
/// unaffected.
pub fn rank_models(scorer: &ModelScorer<'_>, models: &[Model]) -> Vec<RankedModel> {
    let scored: Vec<RankedModel> = models
        .par_iter()
        .filter_map(|model| match scorer.score_model(model) {
            Ok(score) => Some(RankedModel {
                rank: 0,
                model: model.clone(),
                score,
            }),
            Err(e) => {
                error!("Failed to score model {}: {}", model.id(), e);
                None
            }
        })
        .collect();

    info!(
        "Scored {} of {} {} models",
        scored.len(),
        models.len(),
        scorer.matcher().organism()
    );
    assign_ranks(scored)
}

/// Combines rankings from several organisms into one, re-ranked.
pub fn merge_rankings<I>(rankings: I) -> Vec<RankedModel>
where
    I: IntoIterator<Item = Vec<RankedModel>>,
{
    assign_ranks(rankings.into_iter().flatten().collect())
}

// Highest score first, ties by model id.
fn assign_ranks(mut ranked: Vec<RankedModel>) -> Vec<RankedModel> {
    ranked.sort_by(|a, b| {
        b.score
            .score()
            .total_cmp(&a.score.score())
            .then_with(|| a.model.id().cmp(b.model.id()))
    });
    for (i, entry) in ranked.iter_mut().enumerate() {
        entry.rank = i + 1;
    }
    ranked
}
