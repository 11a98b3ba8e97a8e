use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Species context a phenotype ontology (and so a model) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Organism {
    Human,
    Mouse,
    Fish,
}

impl Organism {
    pub fn ncbi_taxon_id(&self) -> &'static str {
        match self {
            Organism::Human => "9606",
            Organism::Mouse => "10090",
            Organism::Fish => "7955",
        }
    }

    pub fn species_name(&self) -> &'static str {
        match self {
            Organism::Human => "Homo sapiens",
            Organism::Mouse => "Mus musculus",
            Organism::Fish => "Danio rerio",
        }
    }
}

impl fmt::Display for Organism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Organism::Human => "HUMAN",
            Organism::Mouse => "MOUSE",
            Organism::Fish => "FISH",
        };
        f.pad(name)
    }
}

//───────────────────────────── ontology terms ─────────────────────────────//

/// An ontology term. Two terms are the same term when their ids agree,
/// whatever their label or information content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhenotypeTerm {
    id: String,
    label: String,
    #[serde(default)]
    information_content: f64,
}

impl PhenotypeTerm {
    pub fn new(id: impl Into<String>, label: impl Into<String>, information_content: f64) -> Self {
        PhenotypeTerm {
            id: id.into(),
            label: label.into(),
            information_content,
        }
    }

    /// Term without a known information content.
    pub fn of(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label, 0.0)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn information_content(&self) -> f64 {
        self.information_content
    }
}

impl PartialEq for PhenotypeTerm {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PhenotypeTerm {}

impl Hash for PhenotypeTerm {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for PhenotypeTerm {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PhenotypeTerm {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for PhenotypeTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.label)
    }
}

//──────────────────────────── phenotype matches ────────────────────────────//

/// A precomputed similarity between a query phenotype and a phenotype of
/// the target organism's ontology. The score is opaque input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhenotypeMatch {
    query_phenotype_id: String,
    match_phenotype_id: String,
    score: f64,
    #[serde(default)]
    lcs_score: f64,
    #[serde(default)]
    common_ancestor: Option<PhenotypeTerm>,
}

impl PhenotypeMatch {
    pub fn new(
        query_phenotype_id: impl Into<String>,
        match_phenotype_id: impl Into<String>,
        score: f64,
        lcs_score: f64,
    ) -> Self {
        PhenotypeMatch {
            query_phenotype_id: query_phenotype_id.into(),
            match_phenotype_id: match_phenotype_id.into(),
            score,
            lcs_score,
            common_ancestor: None,
        }
    }

    /// Match between two terms through their lowest common subsumer.
    pub fn between(
        query: &PhenotypeTerm,
        matched: &PhenotypeTerm,
        score: f64,
        lcs_score: f64,
        common_ancestor: &PhenotypeTerm,
    ) -> Self {
        Self::new(query.id(), matched.id(), score, lcs_score).with_common_ancestor(common_ancestor.clone())
    }

    pub fn with_common_ancestor(mut self, common_ancestor: PhenotypeTerm) -> Self {
        self.common_ancestor = Some(common_ancestor);
        self
    }

    pub fn query_phenotype_id(&self) -> &str {
        &self.query_phenotype_id
    }

    pub fn match_phenotype_id(&self) -> &str {
        &self.match_phenotype_id
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn lcs_score(&self) -> f64 {
        self.lcs_score
    }

    pub fn common_ancestor(&self) -> Option<&PhenotypeTerm> {
        self.common_ancestor.as_ref()
    }
}

// Scores compare bitwise so that Eq and Hash stay consistent.
impl PartialEq for PhenotypeMatch {
    fn eq(&self, other: &Self) -> bool {
        self.query_phenotype_id == other.query_phenotype_id
            && self.match_phenotype_id == other.match_phenotype_id
            && self.score.to_bits() == other.score.to_bits()
            && self.lcs_score.to_bits() == other.lcs_score.to_bits()
            && self.common_ancestor == other.common_ancestor
    }
}

impl Eq for PhenotypeMatch {}

impl Hash for PhenotypeMatch {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.query_phenotype_id.hash(state);
        self.match_phenotype_id.hash(state);
        self.score.to_bits().hash(state);
        self.lcs_score.to_bits().hash(state);
        self.common_ancestor.hash(state);
    }
}

impl fmt::Display for PhenotypeMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}={}", self.query_phenotype_id, self.match_phenotype_id, self.score)
    }
}

//───────────────────────────────── models ─────────────────────────────────//

/// Phenotypes annotated to a human disease associated with a gene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneDiseaseModel {
    pub model_id: String,
    pub organism: Organism,
    pub entrez_gene_id: u32,
    pub human_gene_symbol: String,
    pub disease_id: String,
    pub disease_term: String,
    pub phenotype_ids: Vec<String>,
}

/// Phenotypes observed in a model organism carrying a mutation in the
/// ortholog of a human gene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneOrthologModel {
    pub model_id: String,
    pub organism: Organism,
    pub entrez_gene_id: u32,
    pub human_gene_symbol: String,
    pub model_gene_id: String,
    pub model_gene_symbol: String,
    pub phenotype_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Model {
    Disease(GeneDiseaseModel),
    Ortholog(GeneOrthologModel),
}

impl Model {
    pub fn id(&self) -> &str {
        match self {
            Model::Disease(m) => &m.model_id,
            Model::Ortholog(m) => &m.model_id,
        }
    }

    pub fn organism(&self) -> Organism {
        match self {
            Model::Disease(m) => m.organism,
            Model::Ortholog(m) => m.organism,
        }
    }

    pub fn entrez_gene_id(&self) -> u32 {
        match self {
            Model::Disease(m) => m.entrez_gene_id,
            Model::Ortholog(m) => m.entrez_gene_id,
        }
    }

    pub fn human_gene_symbol(&self) -> &str {
        match self {
            Model::Disease(m) => &m.human_gene_symbol,
            Model::Ortholog(m) => &m.human_gene_symbol,
        }
    }

    /// Disease id for disease models, the organism's gene id for orthologs.
    pub fn association_id(&self) -> &str {
        match self {
            Model::Disease(m) => &m.disease_id,
            Model::Ortholog(m) => &m.model_gene_id,
        }
    }

    pub fn association_label(&self) -> &str {
        match self {
            Model::Disease(m) => &m.disease_term,
            Model::Ortholog(m) => &m.model_gene_symbol,
        }
    }

    pub fn phenotype_ids(&self) -> &[String] {
        match self {
            Model::Disease(m) => &m.phenotype_ids,
            Model::Ortholog(m) => &m.phenotype_ids,
        }
    }
}

impl From<GeneDiseaseModel> for Model {
    fn from(model: GeneDiseaseModel) -> Self {
        Model::Disease(model)
    }
}

impl From<GeneOrthologModel> for Model {
    fn from(model: GeneOrthologModel) -> Self {
        Model::Ortholog(model)
    }
}
