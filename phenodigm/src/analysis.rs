//! Runs one scoring pass over the analysis input as the run configuration
//! asks for it.

use tracing::info;

use crate::config::{RunConfig, ScoringStrategy};
use crate::data_handling::analysis_input::AnalysisInput;
use crate::error::PhenodigmResult;
use crate::ranking::{merge_rankings, rank_models, RankedModel};
use crate::scoring::{ModelScorer, OrganismPhenotypeMatcher};

pub fn run_analysis(config: &RunConfig, input: &AnalysisInput) -> PhenodigmResult<Vec<RankedModel>> {
    config.validate()?;
    info!(
        "Scoring {:?} models for {} query terms",
        config.strategy,
        input.query_terms.len()
    );

    // The organism whose theoretical model every score is divided by.
    let normalising_organism = match config.strategy {
        ScoringStrategy::SingleCrossSpecies => config.scored_organisms()[0],
        ScoringStrategy::SameSpecies | ScoringStrategy::MultiCrossSpecies => config.reference_organism,
    };
    input.require_matches_for(normalising_organism)?;

    let ranking = match config.strategy {
        ScoringStrategy::SameSpecies => {
            let matcher = input.matcher_for(config.reference_organism);
            let scorer = ModelScorer::for_same_species(&matcher);
            rank_models(&scorer, &input.models_for(config.reference_organism))
        }
        ScoringStrategy::SingleCrossSpecies => {
            let organism = normalising_organism;
            let matcher = input.matcher_for(organism);
            let scorer = ModelScorer::for_single_cross_species(&matcher);
            rank_models(&scorer, &input.models_for(organism))
        }
        ScoringStrategy::MultiCrossSpecies => {
            let reference = input.matcher_for(config.reference_organism);
            let targets: Vec<OrganismPhenotypeMatcher> = config
                .target_organisms
                .iter()
                .map(|organism| input.matcher_for(*organism))
                .collect();

            let reference_model = reference.best_theoretical_model();
            let rankings = std::iter::once(&reference)
                .chain(targets.iter())
                .map(|matcher| {
                    let scorer = ModelScorer::for_multi_cross_species(reference_model, matcher);
                    rank_models(&scorer, &input.models_for(matcher.organism()))
                });
            merge_rankings(rankings)
        }
    };

    info!("Ranked {} models", ranking.len());
    Ok(ranking)
}
