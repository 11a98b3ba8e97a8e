use crate::models::{Organism, PhenotypeMatch, PhenotypeTerm};
use crate::scoring::best_match::best_forward_and_reciprocal_matches;
use crate::scoring::match_index::MatchIndex;
use crate::scoring::theoretical_model::TheoreticalModel;

/// A [`MatchIndex`] together with the theoretical model derived from it.
///
/// Built once per organism and query term set, then shared read-only by
/// every scorer of that organism.
#[derive(Debug, Clone, PartialEq)]
pub struct OrganismPhenotypeMatcher {
    index: MatchIndex,
    best_theoretical_model: TheoreticalModel,
}

impl OrganismPhenotypeMatcher {
    pub fn new<I, M>(organism: Organism, term_phenotype_matches: I) -> Self
    where
        I: IntoIterator<Item = (PhenotypeTerm, M)>,
        M: IntoIterator<Item = PhenotypeMatch>,
    {
        Self::from_index(MatchIndex::build(organism, term_phenotype_matches))
    }

    pub fn from_index(index: MatchIndex) -> Self {
        let best_theoretical_model = TheoreticalModel::from_index(&index);
        OrganismPhenotypeMatcher {
            index,
            best_theoretical_model,
        }
    }

    pub fn organism(&self) -> Organism {
        self.index.organism()
    }

    pub fn index(&self) -> &MatchIndex {
        &self.index
    }

    pub fn best_theoretical_model(&self) -> &TheoreticalModel {
        &self.best_theoretical_model
    }

    pub fn best_phenotype_matches(&self) -> &[PhenotypeMatch] {
        self.best_theoretical_model.best_phenotype_matches()
    }

    pub fn best_forward_and_reciprocal_matches<S: AsRef<str>>(
        &self,
        model_phenotype_ids: &[S],
    ) -> Vec<&PhenotypeMatch> {
        best_forward_and_reciprocal_matches(&self.index, model_phenotype_ids)
    }
}
