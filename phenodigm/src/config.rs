use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PhenodigmError, PhenodigmResult};
use crate::models::Organism;

pub const CONFIG_ENV_VAR: &str = "PHENODIGM_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "phenodigm.json";

pub fn project_root() -> PathBuf {
    match env::var_os("PROJECT_ROOT") {
        Some(val) => PathBuf::from(val),
        None => {
            // Fall back to current directory if PROJECT_ROOT not set
            env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        }
    }
}

/// `$PHENODIGM_CONFIG`, else `phenodigm.json` under the project root.
pub fn default_config_path() -> PathBuf {
    match env::var_os(CONFIG_ENV_VAR) {
        Some(val) => PathBuf::from(val),
        None => project_root().join(DEFAULT_CONFIG_FILE),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringStrategy {
    /// Reference organism models only.
    SameSpecies,
    /// Exactly one target organism, normalised against itself.
    SingleCrossSpecies,
    /// Reference organism plus every target organism, normalised against
    /// the reference organism.
    MultiCrossSpecies,
}

fn default_reference_organism() -> Organism {
    Organism::Human
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./phenodigm_results")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Analysis input JSON: query terms, organism matches and models.
    pub input: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    pub strategy: ScoringStrategy,
    #[serde(default = "default_reference_organism")]
    pub reference_organism: Organism,
    #[serde(default)]
    pub target_organisms: Vec<Organism>,
}

impl RunConfig {
    pub fn load(path: &Path) -> PhenodigmResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: RunConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PhenodigmResult<()> {
        if self.target_organisms.contains(&self.reference_organism) {
            return Err(PhenodigmError::Config(format!(
                "reference organism {} is also listed as a target organism",
                self.reference_organism
            )));
        }
        match self.strategy {
            ScoringStrategy::SameSpecies if !self.target_organisms.is_empty() => Err(
                PhenodigmError::Config("same_species scoring takes no target organisms".to_string()),
            ),
            ScoringStrategy::SingleCrossSpecies if self.target_organisms.len() != 1 => {
                Err(PhenodigmError::Config(format!(
                    "single_cross_species scoring needs exactly one target organism, got {}",
                    self.target_organisms.len()
                )))
            }
            _ => Ok(()),
        }
    }

    /// Organisms whose models get scored, reference organism first.
    pub fn scored_organisms(&self) -> Vec<Organism> {
        match self.strategy {
            ScoringStrategy::SameSpecies => vec![self.reference_organism],
            ScoringStrategy::SingleCrossSpecies => self.target_organisms.clone(),
            ScoringStrategy::MultiCrossSpecies => std::iter::once(self.reference_organism)
                .chain(self.target_organisms.iter().copied())
                .collect(),
        }
    }
}
