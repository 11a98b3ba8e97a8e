//! End-to-end scoring of disease and ortholog models across organisms.

use phenodigm::analysis::run_analysis;
use phenodigm::config::{RunConfig, ScoringStrategy};
use phenodigm::data_handling::analysis_input::{AnalysisInput, AnalysisInputFile, OrganismMatches};
use phenodigm::data_handling::Dataset;
use phenodigm::ranking::rank_models;
use phenodigm::report::{write_report, REPORT_FILE_NAME};
use phenodigm::{
    GeneDiseaseModel, GeneOrthologModel, MatchIndex, Model, ModelScorer, Organism, OrganismPhenotypeMatcher,
    PhenotypeMatch, PhenotypeTerm,
};
use std::path::PathBuf;
use tempfile::tempdir;

fn query_terms() -> Vec<PhenotypeTerm> {
    vec![
        PhenotypeTerm::new("HP:0001156", "Brachydactyly", 6.2),
        PhenotypeTerm::new("HP:0001363", "Craniosynostosis", 7.4),
        PhenotypeTerm::new("HP:0011304", "Broad thumb", 8.1),
        PhenotypeTerm::new("HP:0010055", "Broad hallux", 8.3),
    ]
}

fn human_matches() -> Vec<PhenotypeMatch> {
    vec![
        PhenotypeMatch::new("HP:0001156", "HP:0001156", 2.49, 6.2),
        PhenotypeMatch::new("HP:0001156", "HP:0011304", 1.58, 4.0),
        PhenotypeMatch::new("HP:0001363", "HP:0001363", 2.72, 7.4),
        PhenotypeMatch::new("HP:0011304", "HP:0011304", 2.85, 8.1),
        PhenotypeMatch::new("HP:0011304", "HP:0010055", 1.99, 5.0),
        PhenotypeMatch::new("HP:0010055", "HP:0010055", 2.88, 8.3),
        PhenotypeMatch::new("HP:0010055", "HP:0011304", 1.99, 5.0),
    ]
}

fn mouse_matches() -> Vec<PhenotypeMatch> {
    vec![
        PhenotypeMatch::new("HP:0001156", "MP:0002544", 2.10, 4.4),
        PhenotypeMatch::new("HP:0001363", "MP:0000081", 2.31, 5.3),
        PhenotypeMatch::new("HP:0011304", "MP:0002544", 1.72, 3.0),
        PhenotypeMatch::new("HP:0010055", "MP:0002544", 1.65, 2.7),
    ]
}

fn fish_matches() -> Vec<PhenotypeMatch> {
    vec![
        PhenotypeMatch::new("HP:0001363", "ZP:0000383", 1.21, 1.5),
        PhenotypeMatch::new("HP:0001156", "ZP:0001402", 0.95, 0.9),
    ]
}

fn matcher(organism: Organism, matches: Vec<PhenotypeMatch>) -> OrganismPhenotypeMatcher {
    let input = AnalysisInput {
        query_terms: query_terms(),
        organism_matches: vec![OrganismMatches { organism, matches }],
        models: vec![],
    };
    input.matcher_for(organism)
}

fn disease(id: &str, phenotype_ids: Vec<String>) -> Model {
    GeneDiseaseModel {
        model_id: id.to_string(),
        organism: Organism::Human,
        entrez_gene_id: 2263,
        human_gene_symbol: "FGFR2".to_string(),
        disease_id: id.to_string(),
        disease_term: "Pfeiffer syndrome".to_string(),
        phenotype_ids,
    }
    .into()
}

fn ortholog(id: &str, organism: Organism, phenotype_ids: Vec<String>) -> Model {
    GeneOrthologModel {
        model_id: id.to_string(),
        organism,
        entrez_gene_id: 2263,
        human_gene_symbol: "FGFR2".to_string(),
        model_gene_id: id.to_string(),
        model_gene_symbol: "Fgfr2".to_string(),
        phenotype_ids,
    }
    .into()
}

#[test]
fn perfect_models_score_one_against_their_own_organism() {
    for (organism, matches) in [
        (Organism::Human, human_matches()),
        (Organism::Mouse, mouse_matches()),
        (Organism::Fish, fish_matches()),
    ] {
        let matcher = matcher(organism, matches);
        let best_ids = matcher.best_theoretical_model().best_phenotype_ids();
        let model = match organism {
            Organism::Human => disease("OMIM:101600", best_ids),
            _ => ortholog("MODEL:1", organism, best_ids),
        };

        let scorer = match organism {
            Organism::Human => ModelScorer::for_same_species(&matcher),
            _ => ModelScorer::for_single_cross_species(&matcher),
        };
        assert_eq!(scorer.score_model(&model).unwrap().score(), 1.0, "{}", organism);
    }
}

#[test]
fn cross_species_scores_fall_below_the_reference() {
    let human = matcher(Organism::Human, human_matches());
    let mouse = matcher(Organism::Mouse, mouse_matches());
    let fish = matcher(Organism::Fish, fish_matches());
    let reference = human.best_theoretical_model();

    let score_best = |matcher: &OrganismPhenotypeMatcher, model: Model| {
        ModelScorer::for_multi_cross_species(reference, matcher)
            .score_model(&model)
            .unwrap()
            .score()
    };

    let human_score = score_best(&human, disease("OMIM:101600", reference.best_phenotype_ids()));
    let mouse_score = score_best(
        &mouse,
        ortholog("MGI:95523", Organism::Mouse, mouse.best_theoretical_model().best_phenotype_ids()),
    );
    let fish_score = score_best(
        &fish,
        ortholog("ZFIN:1", Organism::Fish, fish.best_theoretical_model().best_phenotype_ids()),
    );

    assert_eq!(human_score, 1.0);
    assert!(mouse_score < 1.0 && mouse_score > 0.0);
    assert!(fish_score < mouse_score);
}

#[test]
fn scores_stay_in_range_and_are_reproducible() {
    let human = matcher(Organism::Human, human_matches());
    let scorer = ModelScorer::for_same_species(&human);
    let models = vec![
        disease("OMIM:1", vec!["HP:0011304".to_string()]),
        disease("OMIM:2", vec!["HP:0001156".to_string(), "HP:0010055".to_string()]),
        disease("OMIM:3", vec!["HP:0000001".to_string()]),
        disease("OMIM:4", vec![]),
    ];

    let first = rank_models(&scorer, &models);
    let second = rank_models(&scorer, &models);

    assert_eq!(first, second);
    for entry in &first {
        let score = entry.score.score();
        assert!((0.0..=1.0).contains(&score), "{} scored {}", entry.model.id(), score);
    }
    assert_eq!(first.last().map(|r| r.score.score()), Some(0.0));
}

/// `sqrt(mean * max)` over the matches a score was built from.
fn raw_score(matches: &[PhenotypeMatch]) -> f64 {
    let scores: Vec<f64> = matches.iter().map(PhenotypeMatch::score).collect();
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    let max = scores.iter().copied().fold(0.0, f64::max);
    (mean * max).sqrt()
}

#[test]
fn no_model_exceeds_the_theoretical_score_before_capping() {
    let human = matcher(Organism::Human, human_matches());
    let mouse = matcher(Organism::Mouse, mouse_matches());
    let reference = human.best_theoretical_model();

    let human_models = vec![
        disease("OMIM:1", vec!["HP:0011304".to_string()]),
        disease("OMIM:2", vec!["HP:0001156".to_string(), "HP:0010055".to_string()]),
        disease("OMIM:101600", vec!["HP:0001156".to_string(), "HP:0001363".to_string()]),
        disease("OMIM:123500", reference.best_phenotype_ids()),
    ];
    let mouse_models = vec![
        ortholog("MGI:95523", Organism::Mouse, vec!["MP:0002544".to_string()]),
        ortholog("MGI:95523_1", Organism::Mouse, vec!["MP:0002544".to_string(), "MP:0000081".to_string()]),
    ];

    for (matcher, models) in [(&human, human_models), (&mouse, mouse_models)] {
        let scorer = ModelScorer::for_multi_cross_species(reference, matcher);
        for model in &models {
            let result = scorer.score_model(model).unwrap();
            let raw = raw_score(result.best_phenotype_matches());
            assert!(
                raw <= reference.score(),
                "{} raw {} above theoretical {}",
                model.id(),
                raw,
                reference.score()
            );
            assert!((result.score() - raw / reference.score()).abs() < 1e-12);
        }
    }
}

#[test]
fn reordered_match_sets_build_the_same_index_and_theoretical_model() {
    let mut reordered = human_matches();
    reordered.reverse();

    let forward = matcher(Organism::Human, human_matches());
    let backward = matcher(Organism::Human, reordered);

    assert_eq!(forward.index(), backward.index());
    assert_eq!(forward.best_theoretical_model(), backward.best_theoretical_model());
}

#[test]
fn shuffled_input_builds_the_same_index() {
    let ordered: Vec<(PhenotypeTerm, Vec<PhenotypeMatch>)> = query_terms()
        .into_iter()
        .map(|term| {
            let matches = human_matches()
                .into_iter()
                .filter(|m| m.query_phenotype_id() == term.id())
                .collect();
            (term, matches)
        })
        .collect();
    let mut shuffled = ordered.clone();
    shuffled.rotate_left(2);

    let a = MatchIndex::build(Organism::Human, ordered);
    let b = MatchIndex::build(Organism::Human, shuffled);

    assert_eq!(a, b);
    assert_eq!(a.matched_query_ids(), b.matched_query_ids());
    assert_eq!(a.matched_organism_ids(), b.matched_organism_ids());
    for query_id in a.matched_query_ids() {
        for match_id in a.matched_organism_ids() {
            assert_eq!(a.lookup(query_id, match_id), b.lookup(query_id, match_id));
        }
    }
}

#[test]
fn run_from_files_writes_a_ranked_report() {
    let dir = tempdir().unwrap();
    let input = AnalysisInput {
        query_terms: query_terms(),
        organism_matches: vec![
            OrganismMatches { organism: Organism::Human, matches: human_matches() },
            OrganismMatches { organism: Organism::Mouse, matches: mouse_matches() },
        ],
        models: vec![
            disease("OMIM:101600", vec!["HP:0001156".to_string(), "HP:0001363".to_string()]),
            ortholog("MGI:95523", Organism::Mouse, vec!["MP:0002544".to_string()]),
            ortholog("ZFIN:1", Organism::Fish, vec!["ZP:0000383".to_string()]),
        ],
    };
    let input_path = dir.path().join("input.json");
    std::fs::write(&input_path, serde_json::to_string_pretty(&input).unwrap()).unwrap();

    let config = RunConfig {
        input: input_path.clone(),
        output_dir: dir.path().join("results"),
        strategy: ScoringStrategy::MultiCrossSpecies,
        reference_organism: Organism::Human,
        target_organisms: vec![Organism::Mouse],
    };

    let loaded = AnalysisInputFile { path: input_path }.load().unwrap();
    let ranking = run_analysis(&config, &loaded).unwrap();

    // fish is not a target organism, so its model is never scored
    assert_eq!(ranking.len(), 2);
    assert!(ranking[0].score.score() >= ranking[1].score.score());

    let report = write_report(&ranking, &config.output_dir).unwrap();
    assert_eq!(report, config.output_dir.join(REPORT_FILE_NAME));
    let contents = std::fs::read_to_string(report).unwrap();
    assert_eq!(contents.lines().count(), 3);
}

#[test]
fn demo_run_ranks_every_configured_organism() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let config = RunConfig::load(&root.join("demo/phenodigm.json")).unwrap();
    let input = AnalysisInputFile { path: root.join(&config.input) }.load().unwrap();

    let ranking = run_analysis(&config, &input).unwrap();

    let ids: Vec<&str> = ranking.iter().map(|r| r.model.id()).collect();
    assert_eq!(ids, ["OMIM:101600", "OMIM:123500", "MGI:95523_1", "ZFIN:ZDB-GENE-1_1"]);
}
