use crate::models::PhenotypeMatch;
use crate::scoring::match_index::{first_max_by_score, MatchIndex};

/// Best forward matches followed by best reciprocal matches of a model's
/// phenotypes against the query.
///
/// Model phenotypes never matched by any query term are dropped first.
/// The forward pass walks the matched query ids in sorted order and keeps,
/// for each, the highest scoring match among the remaining model phenotypes.
/// The reciprocal pass walks the model phenotypes in their given order and
/// keeps, for each, the highest scoring match among the query ids. Ties go to
/// the first candidate met and ids without any match contribute nothing.
///
/// This is a best-of-row/best-of-column selection rather than a bipartite
/// matching: the same match may be picked by both passes, and several rows
/// may pick the same column.
pub fn best_forward_and_reciprocal_matches<'a, S: AsRef<str>>(
    index: &'a MatchIndex,
    model_phenotype_ids: &[S],
) -> Vec<&'a PhenotypeMatch> {
    let matched_model_ids: Vec<&str> = model_phenotype_ids
        .iter()
        .map(AsRef::as_ref)
        .filter(|id| index.matched_organism_ids().contains(*id))
        .collect();

    if matched_model_ids.is_empty() {
        return Vec::new();
    }

    let forward_matches = index.matched_query_ids().iter().filter_map(|query_id| {
        first_max_by_score(
            matched_model_ids
                .iter()
                .filter_map(|model_id| index.lookup(query_id, model_id)),
        )
    });

    // Same shape as above with the loops swapped: rows are now model phenotypes.
    let reciprocal_matches = matched_model_ids.iter().filter_map(|model_id| {
        first_max_by_score(
            index
                .matched_query_ids()
                .iter()
                .filter_map(|query_id| index.lookup(query_id, model_id)),
        )
    });

    forward_matches.chain(reciprocal_matches).collect()
}
