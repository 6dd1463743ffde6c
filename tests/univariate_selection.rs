//! Integration tests for the built-in univariate scoring methods.

use hypex_selectors::error::{ScoringError, TableError};
use hypex_selectors::feature_selection::univariate_selection::{UnivariateScore, UnivariateScorer};
use hypex_selectors::feature_selection::{FeatureSelectionMethod, FeatureSelector, SelectionParams};
use hypex_selectors::Table;

fn make_experiment() -> Table {
    Table::from_columns(vec![
        ("conversion", vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
        ("group", vec![0.0, 1.0, 0.0, 1.0, 0.0, 1.0]),
        ("visits", vec![2.0, 4.1, 5.9, 8.0, 10.2, 11.9]),
        ("bounce", vec![0.9, 0.7, 0.6, 0.4, 0.2, 0.1]),
        ("noise", vec![0.3, -0.2, 0.1, 0.4, -0.3, 0.0]),
        ("constant", vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.0]),
    ])
    .unwrap()
}

fn score_names(scores: &Table) -> Vec<&str> {
    scores.index().unwrap().iter().map(String::as_str).collect()
}

// ---------------------------------------------------------------------------
// F-regression scorer
// ---------------------------------------------------------------------------

#[test]
fn f_regression_ranks_features_and_skips_roles() {
    let selector = FeatureSelector::new("conversion", "group", UnivariateScorer::default());
    let scores = selector.perform_selection(&make_experiment()).unwrap();

    assert_eq!(scores.columns(), &["score".to_string(), "p_value".to_string()]);
    assert_eq!(scores.nrows(), 4);

    let names = score_names(&scores);
    assert!(!names.contains(&"conversion"));
    assert!(!names.contains(&"group"));
    assert_eq!(names[3], "constant");
    // Both strongly (anti-)correlated features beat the noise column
    assert!(names[..2].contains(&"visits"));
    assert!(names[..2].contains(&"bounce"));

    let f = scores.column("score").unwrap();
    for i in 1..f.len() {
        assert!(f[i - 1] >= f[i], "scores should be sorted best first: {:?}", f);
    }
    let p = scores.column("p_value").unwrap();
    assert!(p.iter().all(|&v| (0.0..=1.0).contains(&v)));
    assert!(scores.get(3, "p_value").unwrap() > 1.0 - 1e-12);
}

#[test]
fn f_regression_truncates_to_k() {
    let scorer = UnivariateScorer {
        k: Some(1),
        ..UnivariateScorer::default()
    };
    let scores = scorer
        .select(&make_experiment(), &SelectionParams::new("conversion", "group"))
        .unwrap();

    assert_eq!(scores.nrows(), 1);
    assert_ne!(score_names(&scores)[0], "noise");
}

#[test]
fn excluded_lists_are_not_scored() {
    let mut params = SelectionParams::new("conversion", "group");
    params.info_col_list = Some(vec!["noise".to_string()]);
    params.weights_col_list = Some(vec!["constant".to_string()]);

    let scores = UnivariateScorer::default()
        .select(&make_experiment(), &params)
        .unwrap();
    let mut names = score_names(&scores);
    names.sort();
    assert_eq!(names, vec!["bounce", "visits"]);
}

// ---------------------------------------------------------------------------
// R-regression scorer
// ---------------------------------------------------------------------------

#[test]
fn r_regression_keeps_sign_and_ranks_by_magnitude() {
    let scorer = UnivariateScorer {
        score: UnivariateScore::RRegression,
        ..UnivariateScorer::default()
    };
    assert_eq!(scorer.name(), "r_regression");

    let scores = scorer
        .select(&make_experiment(), &SelectionParams::new("conversion", "group"))
        .unwrap();

    assert_eq!(scores.columns(), &["score".to_string()]);
    let names = score_names(&scores);
    let bounce_row = names.iter().position(|&n| n == "bounce").unwrap();
    let visits_row = names.iter().position(|&n| n == "visits").unwrap();
    assert!(bounce_row < 2 && visits_row < 2);
    assert!(scores.get(bounce_row, "score").unwrap() < -0.9);
    assert!(scores.get(visits_row, "score").unwrap() > 0.9);
}

// ---------------------------------------------------------------------------
// Errors surface through the selector unchanged
// ---------------------------------------------------------------------------

#[test]
fn missing_target_is_reported_by_method() {
    let selector = FeatureSelector::new("revenue", "group", UnivariateScorer::default());
    let err = selector.perform_selection(&make_experiment()).unwrap_err();
    assert_eq!(err, ScoringError::Table(TableError::MissingColumn("revenue".to_string())));
}

#[test]
fn missing_treatment_is_reported_by_method() {
    let selector = FeatureSelector::new("conversion", "arm", UnivariateScorer::default());
    let err = selector.perform_selection(&make_experiment()).unwrap_err();
    assert_eq!(err, ScoringError::Table(TableError::MissingColumn("arm".to_string())));
}

#[test]
fn no_candidate_features() {
    let table = Table::from_columns(vec![("y", vec![1.0, 2.0, 3.0]), ("t", vec![0.0, 1.0, 0.0])]).unwrap();
    let selector = FeatureSelector::new("y", "t", UnivariateScorer::default());
    assert_eq!(selector.perform_selection(&table).unwrap_err(), ScoringError::NoFeatures);
}

#[test]
fn too_few_rows() {
    let table = Table::from_columns(vec![
        ("y", vec![1.0, 2.0]),
        ("t", vec![0.0, 1.0]),
        ("x", vec![3.0, 1.0]),
    ])
    .unwrap();
    let selector = FeatureSelector::new("y", "t", UnivariateScorer::default());
    assert_eq!(
        selector.perform_selection(&table).unwrap_err(),
        ScoringError::NotEnoughSamples { found: 2, required: 3 }
    );
}
