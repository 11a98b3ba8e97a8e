use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::debug;

use crate::models::{Organism, PhenotypeMatch, PhenotypeTerm};

/// All precomputed phenotype matches of one query term set against one
/// organism, indexed for pairwise lookup.
///
/// Every query term supplied at construction is kept, including those
/// without any match. A term's matches form a set: duplicates are dropped
/// and the rest are held sorted by match id, so nothing observable depends
/// on the order the input arrived in.
#[derive(Debug, Clone)]
pub struct MatchIndex {
    organism: Organism,
    term_matches: BTreeMap<PhenotypeTerm, Vec<PhenotypeMatch>>,
    matched_query_ids: BTreeSet<String>,
    matched_organism_ids: BTreeSet<String>,
    // query id -> match id -> match
    compound_index: HashMap<String, HashMap<String, PhenotypeMatch>>,
    // organism phenotype id -> best score any query term reaches on it
    reciprocal_best_scores: HashMap<String, f64>,
}

impl MatchIndex {
    pub fn build<I, M>(organism: Organism, term_phenotype_matches: I) -> Self
    where
        I: IntoIterator<Item = (PhenotypeTerm, M)>,
        M: IntoIterator<Item = PhenotypeMatch>,
    {
        let mut term_matches: BTreeMap<PhenotypeTerm, Vec<PhenotypeMatch>> = BTreeMap::new();
        for (term, matches) in term_phenotype_matches {
            let set = term_matches.entry(term).or_default();
            for phenotype_match in matches {
                if !set.contains(&phenotype_match) {
                    set.push(phenotype_match);
                }
            }
        }
        for set in term_matches.values_mut() {
            set.sort_by(canonical_order);
        }

        let matched_query_ids: BTreeSet<String> = term_matches
            .iter()
            .filter(|(_, matches)| !matches.is_empty())
            .map(|(term, _)| term.id().to_string())
            .collect();

        let matched_organism_ids: BTreeSet<String> = term_matches
            .values()
            .flatten()
            .map(|m| m.match_phenotype_id().to_string())
            .collect();

        // Pairs are unique in the precomputed data; a repeated pair keeps the
        // last one in canonical order, the highest scoring.
        let mut compound_index: HashMap<String, HashMap<String, PhenotypeMatch>> = HashMap::new();
        let mut reciprocal_best_scores: HashMap<String, f64> = HashMap::new();
        for phenotype_match in term_matches.values().flatten() {
            compound_index
                .entry(phenotype_match.query_phenotype_id().to_string())
                .or_default()
                .insert(phenotype_match.match_phenotype_id().to_string(), phenotype_match.clone());
            reciprocal_best_scores
                .entry(phenotype_match.match_phenotype_id().to_string())
                .and_modify(|best| *best = best.max(phenotype_match.score()))
                .or_insert(phenotype_match.score());
        }

        debug!(
            "{} query phenotypes with a {} phenotype match: {:?}",
            matched_query_ids.len(),
            organism,
            matched_query_ids
        );

        MatchIndex {
            organism,
            term_matches,
            matched_query_ids,
            matched_organism_ids,
            compound_index,
            reciprocal_best_scores,
        }
    }

    pub fn organism(&self) -> Organism {
        self.organism
    }

    /// Every query term, matched or not, in id order.
    pub fn query_terms(&self) -> Vec<&PhenotypeTerm> {
        self.term_matches.keys().collect()
    }

    pub fn term_phenotype_matches(&self) -> &BTreeMap<PhenotypeTerm, Vec<PhenotypeMatch>> {
        &self.term_matches
    }

    /// Ids of the query terms with at least one match.
    pub fn matched_query_ids(&self) -> &BTreeSet<String> {
        &self.matched_query_ids
    }

    /// Organism phenotype ids matched by any query term.
    pub fn matched_organism_ids(&self) -> &BTreeSet<String> {
        &self.matched_organism_ids
    }

    pub fn lookup(&self, query_id: &str, match_id: &str) -> Option<&PhenotypeMatch> {
        self.compound_index.get(query_id)?.get(match_id)
    }

    /// Number of distinct (query, match) pairs held in the lookup index.
    pub fn indexed_pair_count(&self) -> usize {
        self.compound_index.values().map(HashMap::len).sum()
    }

    /// Highest score any query term reaches on an organism phenotype.
    pub fn reciprocal_best_score(&self, match_id: &str) -> Option<f64> {
        self.reciprocal_best_scores.get(match_id).copied()
    }

    /// The highest scoring match of every matched query term, in query id
    /// order. Equal scores go to the organism phenotype that scores best
    /// against the whole query, then to the smallest match id.
    pub fn best_phenotype_matches(&self) -> Vec<&PhenotypeMatch> {
        self.term_matches
            .values()
            .filter_map(|matches| matches.iter().max_by(|a, b| self.compare_best_candidates(a, b)))
            .collect()
    }

    fn compare_best_candidates(&self, a: &PhenotypeMatch, b: &PhenotypeMatch) -> Ordering {
        let reciprocal = |m: &PhenotypeMatch| {
            self.reciprocal_best_score(m.match_phenotype_id())
                .unwrap_or(m.score())
        };
        a.score()
            .total_cmp(&b.score())
            .then_with(|| reciprocal(a).total_cmp(&reciprocal(b)))
            .then_with(|| b.match_phenotype_id().cmp(a.match_phenotype_id()))
    }
}

/// Sort order of a term's match set: match id, then score and lcs score
/// ascending, then common ancestor.
fn canonical_order(a: &PhenotypeMatch, b: &PhenotypeMatch) -> Ordering {
    a.match_phenotype_id()
        .cmp(b.match_phenotype_id())
        .then_with(|| a.score().total_cmp(&b.score()))
        .then_with(|| a.lcs_score().total_cmp(&b.lcs_score()))
        .then_with(|| a.common_ancestor().cmp(&b.common_ancestor()))
}

impl PartialEq for MatchIndex {
    fn eq(&self, other: &Self) -> bool {
        self.organism == other.organism && self.term_matches == other.term_matches
    }
}

/// Highest scoring match, keeping the first of equally scored ones.
pub(crate) fn first_max_by_score<'a, I>(matches: I) -> Option<&'a PhenotypeMatch>
where
    I: IntoIterator<Item = &'a PhenotypeMatch>,
{
    matches.into_iter().fold(None, |best, candidate| match best {
        Some(current) if current.score() >= candidate.score() => Some(current),
        _ => Some(candidate),
    })
}
