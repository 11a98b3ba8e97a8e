//! Nose and toe phenotypes shared by the scoring unit tests.

use crate::models::{Organism, PhenotypeMatch, PhenotypeTerm};
use crate::scoring::match_index::MatchIndex;

pub fn big_nose() -> PhenotypeTerm {
    PhenotypeTerm::new("HP:0000001", "Big nose", 2.0)
}

pub fn nose() -> PhenotypeTerm {
    PhenotypeTerm::new("HP:0000002", "Nose", 1.0)
}

pub fn little_nose() -> PhenotypeTerm {
    PhenotypeTerm::new("HP:0000003", "Little nose", 2.0)
}

pub fn toe() -> PhenotypeTerm {
    PhenotypeTerm::new("HP:0000004", "Toe", 1.0)
}

pub fn big_toe() -> PhenotypeTerm {
    PhenotypeTerm::new("HP:0000005", "Big toe", 2.0)
}

pub fn crooked_toe() -> PhenotypeTerm {
    PhenotypeTerm::new("HP:0000006", "Crooked toe", 2.0)
}

pub fn long_toe() -> PhenotypeTerm {
    PhenotypeTerm::new("HP:0000007", "Long toe", 2.0)
}

pub fn perfect_nose_match() -> PhenotypeMatch {
    PhenotypeMatch::between(&big_nose(), &big_nose(), 1.0, 4.0, &big_nose())
}

pub fn nose_match() -> PhenotypeMatch {
    PhenotypeMatch::between(&big_nose(), &little_nose(), 0.5, 1.0, &nose())
}

pub fn best_toe_match() -> PhenotypeMatch {
    PhenotypeMatch::between(&big_toe(), &long_toe(), 1.0, 2.0, &toe())
}

pub fn big_toe_crooked_toe_match() -> PhenotypeMatch {
    PhenotypeMatch::between(&big_toe(), &crooked_toe(), 1.0, 1.5, &toe())
}

pub fn nose_and_toe_input() -> Vec<(PhenotypeTerm, Vec<PhenotypeMatch>)> {
    vec![
        (big_nose(), vec![perfect_nose_match(), nose_match()]),
        (big_toe(), vec![best_toe_match(), big_toe_crooked_toe_match()]),
    ]
}

pub fn nose_and_toe_index() -> MatchIndex {
    MatchIndex::build(Organism::Human, nose_and_toe_input())
}
