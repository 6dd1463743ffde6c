//! Univariate feature scoring following scikit-learn's API.
//!
//! See: https://scikit-learn.org/stable/modules/feature_selection.html#univariate-feature-selection
//!
//! `UnivariateScorer` wraps these routines as a `FeatureSelectionMethod` so a
//! `FeatureSelector` can run without an external model.

use ndarray::{Array1, Array2};
use rayon::prelude::*;
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

use crate::error::{ScoringError, TableError};
use crate::feature_selection::method::{FeatureSelectionMethod, SelectionParams};
use crate::table::Table;

/// Compute Pearson's r for each feature and the target.
///
/// This function tests the individual effect of each regressor
/// on the target variable. Columns are processed in parallel.
///
/// # Parameters
///
/// * `x` - A 2D array of shape (n_samples, n_features) representing
///   the data matrix (features).
/// * `y` - A 1D array of shape (n_samples,) representing the target vector.
/// * `center` - If true, both `x` and `y` are centered by subtracting their means.
/// * `force_finite` - If true, non-finite coefficients (e.g. from constant
///   columns) are replaced with 0.0.
///
/// # Returns
///
/// An array of shape (n_features,) with the correlation coefficient of each
/// feature, clamped to [-1, 1].
///
/// # Panics
///
/// If `x` and `y` do not have the same number of rows.
pub fn r_regression(x: &Array2<f64>, y: &Array1<f64>, center: bool, force_finite: bool) -> Array1<f64> {
    assert_eq!(
        x.nrows(),
        y.len(),
        "r_regression requires x and y with equal lengths"
    );
    let n_samples = x.nrows() as f64;

    let y_centered = if center {
        let y_mean = y.sum() / n_samples;
        y.mapv(|v| v - y_mean)
    } else {
        y.to_owned()
    };
    let y_norm = y_centered.dot(&y_centered).sqrt();

    let coefficients: Vec<f64> = (0..x.ncols())
        .into_par_iter()
        .map(|j| {
            let col = x.column(j);
            let col = if center {
                let col_mean = col.sum() / n_samples;
                col.mapv(|v| v - col_mean)
            } else {
                col.to_owned()
            };
            let x_norm = col.dot(&col).sqrt();
            let r = col.dot(&y_centered) / x_norm / y_norm;

            if !r.is_finite() {
                if force_finite {
                    0.0
                } else {
                    r
                }
            } else {
                r.clamp(-1.0, 1.0)
            }
        })
        .collect();

    Array1::from_vec(coefficients)
}

/// Univariate linear regression tests returning F-statistic and p-values.
///
/// # Parameters
///
/// * `x` - A 2D array of shape (n_samples, n_features).
/// * `y` - A 1D array of shape (n_samples,).
/// * `center` - Whether to center the data. Costs one degree of freedom.
/// * `force_finite` - Whether to force F-statistics and associated p-values
///   to be finite: infinite F becomes `f64::MAX` with p = 0, NaN F becomes 0
///   with p = 1.
///
/// # Returns
///
/// A tuple of (F-statistics, p-values), both of shape (n_features,).
///
/// # Errors
///
/// * `ScoringError::LengthMismatch` when `x` and `y` have different row counts.
/// * `ScoringError::NotEnoughSamples` when there are too few rows for a
///   positive number of degrees of freedom (3 when centering, 2 otherwise).
pub fn f_regression(
    x: &Array2<f64>,
    y: &Array1<f64>,
    center: bool,
    force_finite: bool,
) -> Result<(Array1<f64>, Array1<f64>), ScoringError> {
    if x.nrows() != y.len() {
        return Err(ScoringError::LengthMismatch {
            x_rows: x.nrows(),
            y_len: y.len(),
        });
    }

    let required = if center { 3 } else { 2 };
    if y.len() < required {
        return Err(ScoringError::NotEnoughSamples {
            found: y.len(),
            required,
        });
    }

    let correlation_coefficient = r_regression(x, y, center, force_finite);
    let deg_of_freedom = y.len() as f64 - if center { 2.0 } else { 1.0 };

    let f_dist = FisherSnedecor::new(1.0, deg_of_freedom).map_err(|_| ScoringError::NotEnoughSamples {
        found: y.len(),
        required,
    })?;

    let mut f_statistic = correlation_coefficient.mapv(|r| {
        let r_squared = r.powi(2);
        r_squared / (1.0 - r_squared) * deg_of_freedom
    });
    let mut p_values = f_statistic.mapv(|f| {
        if f.is_nan() {
            f64::NAN
        } else if f.is_infinite() {
            0.0
        } else {
            f_dist.sf(f).clamp(0.0, 1.0)
        }
    });

    if force_finite {
        for (f, p) in f_statistic.iter_mut().zip(p_values.iter_mut()) {
            if f.is_infinite() {
                *f = f64::MAX;
                *p = 0.0;
            } else if f.is_nan() {
                *f = 0.0;
                *p = 1.0;
            }
        }
    }

    Ok((f_statistic, p_values))
}

/// Indices sorted by score, best first. NaN scores rank last; ties keep
/// their original order.
fn rank_descending(scores: &Array1<f64>) -> Vec<usize> {
    let key = |v: f64| if v.is_nan() { f64::NEG_INFINITY } else { v };
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    indices.sort_by(|&i, &j| key(scores[j]).total_cmp(&key(scores[i])));
    indices
}

/// F-scores, p-values and the selected feature indices (best first).
#[derive(Debug, Clone)]
pub struct KBestScores {
    pub f_scores: Array1<f64>,
    pub p_values: Array1<f64>,
    pub selected: Vec<usize>,
}

/// A struct for selecting the k best features based on F-scores.
///
/// This struct implements a feature selection method similar to scikit-learn's SelectKBest
/// with f_regression as the scoring function.
pub struct SelectKBest {
    /// The number of top features to select.
    k: usize,
}

impl SelectKBest {
    pub fn new(k: usize) -> Self {
        SelectKBest { k }
    }

    /// Keeps every feature, ranked.
    pub fn all() -> Self {
        SelectKBest { k: usize::MAX }
    }

    /// Like [`SelectKBest::fit`], but also returns the F-scores and p-values
    /// of every feature.
    pub fn fit_scores(
        &self,
        x: &Array2<f64>,
        y: &Array1<f64>,
        center: bool,
        force_finite: bool,
    ) -> Result<KBestScores, ScoringError> {
        let (f_scores, p_values) = f_regression(x, y, center, force_finite)?;
        let selected = rank_descending(&f_scores).into_iter().take(self.k).collect();
        Ok(KBestScores {
            f_scores,
            p_values,
            selected,
        })
    }

    /// Fits the SelectKBest model and returns the indices of the k best features.
    ///
    /// # Arguments
    ///
    /// * `x` - The feature matrix (n_samples x n_features).
    /// * `y` - The target vector.
    /// * `center` - Whether to center the data. Default is true.
    /// * `force_finite` - Whether to force F-statistics and associated p-values to be finite. Default is true.
    ///
    /// # Returns
    ///
    /// Indices of the k best features, best first.
    pub fn fit(
        &self,
        x: &Array2<f64>,
        y: &Array1<f64>,
        center: Option<bool>,
        force_finite: Option<bool>,
    ) -> Result<Vec<usize>, ScoringError> {
        let center = center.unwrap_or(true);
        let force_finite = force_finite.unwrap_or(true);

        Ok(self.fit_scores(x, y, center, force_finite)?.selected)
    }
}

/// Which univariate statistic a `UnivariateScorer` reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnivariateScore {
    /// F-statistic with p-values; higher is better.
    FRegression,
    /// Signed Pearson r; ranked by absolute value.
    RRegression,
}

/// Scores every candidate column of a table against the target column.
///
/// The returned table is indexed by feature name, best feature first, with
/// a `score` column and, for the F-test, a `p_value` column.
#[derive(Debug, Clone)]
pub struct UnivariateScorer {
    pub score: UnivariateScore,
    pub center: bool,
    pub force_finite: bool,
    /// Keep only the top `k` features when set.
    pub k: Option<usize>,
}

impl Default for UnivariateScorer {
    fn default() -> Self {
        UnivariateScorer {
            score: UnivariateScore::FRegression,
            center: true,
            force_finite: true,
            k: None,
        }
    }
}

impl FeatureSelectionMethod for UnivariateScorer {
    type Error = ScoringError;

    fn select(&self, table: &Table, params: &SelectionParams) -> Result<Table, ScoringError> {
        let y = table.column(&params.target)?.to_owned();
        if !table.has_column(&params.treatment_col) {
            return Err(TableError::MissingColumn(params.treatment_col.clone()).into());
        }

        let excluded = params.excluded_columns();
        let features: Vec<String> = table
            .columns()
            .iter()
            .filter(|name| !excluded.contains(&name.as_str()))
            .cloned()
            .collect();
        if features.is_empty() {
            return Err(ScoringError::NoFeatures);
        }
        log::debug!(
            "Scoring {} candidate features against '{}' with {}",
            features.len(),
            params.target,
            self.name()
        );

        let x = table.select_columns(&features)?.values().to_owned();

        let k = self.k.unwrap_or(usize::MAX);
        let (scores, p_values, order) = match self.score {
            UnivariateScore::FRegression => {
                let fitted = SelectKBest::new(k).fit_scores(&x, &y, self.center, self.force_finite)?;
                (fitted.f_scores, Some(fitted.p_values), fitted.selected)
            }
            UnivariateScore::RRegression => {
                if y.len() < 2 {
                    return Err(ScoringError::NotEnoughSamples {
                        found: y.len(),
                        required: 2,
                    });
                }
                let r = r_regression(&x, &y, self.center, self.force_finite);
                let order = rank_descending(&r.mapv(f64::abs)).into_iter().take(k).collect();
                (r, None, order)
            }
        };

        let non_finite = scores.iter().filter(|v| !v.is_finite()).count();
        if non_finite > 0 {
            log::warn!(
                "{} of {} features have non-finite {} scores",
                non_finite,
                features.len(),
                self.name()
            );
        }

        let names: Vec<String> = order.iter().map(|&i| features[i].clone()).collect();
        let mut columns = vec![("score", order.iter().map(|&i| scores[i]).collect::<Vec<f64>>())];
        if let Some(p_values) = p_values {
            columns.push(("p_value", order.iter().map(|&i| p_values[i]).collect()));
        }

        Ok(Table::from_columns(columns)?.with_index(names)?)
    }

    fn name(&self) -> &str {
        match self.score {
            UnivariateScore::FRegression => "f_regression",
            UnivariateScore::RRegression => "r_regression",
        }
    }
}
