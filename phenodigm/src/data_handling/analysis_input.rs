use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::data_handling::Dataset;
use crate::error::{PhenodigmError, PhenodigmResult};
use crate::models::{Model, Organism, PhenotypeMatch, PhenotypeTerm};
use crate::scoring::OrganismPhenotypeMatcher;

/// Precomputed matches of the query terms against one organism's ontology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganismMatches {
    pub organism: Organism,
    pub matches: Vec<PhenotypeMatch>,
}

/// Everything a scoring run consumes, as handed over by the loaders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub query_terms: Vec<PhenotypeTerm>,
    #[serde(default)]
    pub organism_matches: Vec<OrganismMatches>,
    #[serde(default)]
    pub models: Vec<Model>,
}

impl AnalysisInput {
    /// Matches of `organism` grouped under their query term. Every query
    /// term gets an entry, empty when it has no match.
    pub fn term_phenotype_matches(&self, organism: Organism) -> BTreeMap<PhenotypeTerm, Vec<PhenotypeMatch>> {
        let matches = self
            .organism_matches
            .iter()
            .filter(|set| set.organism == organism)
            .flat_map(|set| set.matches.iter());
        group_by_query_term(&self.query_terms, matches)
    }

    pub fn has_matches_for(&self, organism: Organism) -> bool {
        self.organism_matches.iter().any(|set| set.organism == organism)
    }

    /// Fails when `organism` has no match set at all. Scores normalised
    /// against such an organism would all be zero.
    pub fn require_matches_for(&self, organism: Organism) -> PhenodigmResult<()> {
        if self.has_matches_for(organism) {
            return Ok(());
        }
        error!("No {} phenotype matches in the input", organism);
        Err(PhenodigmError::Config(format!(
            "analysis input holds no {} phenotype matches to normalise against",
            organism
        )))
    }

    pub fn matcher_for(&self, organism: Organism) -> OrganismPhenotypeMatcher {
        if !self.has_matches_for(organism) {
            warn!("No {} phenotype matches in the input, all {} models will score 0", organism, organism);
        }
        OrganismPhenotypeMatcher::new(organism, self.term_phenotype_matches(organism))
    }

    pub fn models_for(&self, organism: Organism) -> Vec<Model> {
        self.models
            .iter()
            .filter(|model| model.organism() == organism)
            .cloned()
            .collect()
    }
}

/// Groups flat matches under the query term they start from. Matches whose
/// query phenotype is not among `query_terms` are dropped.
pub fn group_by_query_term<'a, I>(
    query_terms: &[PhenotypeTerm],
    matches: I,
) -> BTreeMap<PhenotypeTerm, Vec<PhenotypeMatch>>
where
    I: IntoIterator<Item = &'a PhenotypeMatch>,
{
    let mut grouped: BTreeMap<PhenotypeTerm, Vec<PhenotypeMatch>> =
        query_terms.iter().map(|term| (term.clone(), Vec::new())).collect();
    let by_id: BTreeMap<&str, &PhenotypeTerm> = query_terms.iter().map(|term| (term.id(), term)).collect();

    let mut dropped = 0usize;
    for phenotype_match in matches {
        match by_id.get(phenotype_match.query_phenotype_id()) {
            Some(term) => {
                if let Some(set) = grouped.get_mut(*term) {
                    set.push(phenotype_match.clone());
                }
            }
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        debug!("Dropped {} matches for phenotypes outside the query", dropped);
    }
    grouped
}

pub struct AnalysisInputFile {
    pub path: PathBuf,
}

impl Dataset for AnalysisInputFile {
    type Output = AnalysisInput;

    fn load(&self) -> PhenodigmResult<AnalysisInput> {
        info!("Reading analysis input from {}", self.path.display());
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) => {
                error!("Failed to open analysis input {}: {}", self.path.display(), e);
                return Err(e.into());
            }
        };
        let input: AnalysisInput = serde_json::from_reader(BufReader::new(file))?;
        info!(
            "Loaded {} query terms, {} organism match sets and {} models",
            input.query_terms.len(),
            input.organism_matches.len(),
            input.models.len()
        );
        Ok(input)
    }
}
