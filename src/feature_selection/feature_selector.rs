use crate::config::SelectorConfig;
use crate::error::ScoringError;
use crate::feature_selection::factory::build_method;
use crate::feature_selection::method::{FeatureSelectionMethod, SelectionParams};
use crate::table::Table;

/// Selects top features for an outcome/treatment pair by delegating to an
/// injected scoring method.
///
/// The selector only bundles configuration: column names are not checked
/// here, and a missing column surfaces as an error from the method itself.
#[derive(Debug, Clone)]
pub struct FeatureSelector<M> {
    outcome: String,
    treatment: String,
    feature_selection_method: M,
}

impl<M> FeatureSelector<M> {
    /// Create a new FeatureSelector
    ///
    /// # Arguments
    ///
    /// * `outcome` - The target column
    /// * `treatment` - The column that determines control and test groups
    /// * `feature_selection_method` - The method used to score features
    pub fn new(outcome: impl Into<String>, treatment: impl Into<String>, feature_selection_method: M) -> Self {
        FeatureSelector {
            outcome: outcome.into(),
            treatment: treatment.into(),
            feature_selection_method,
        }
    }

    pub fn outcome(&self) -> &str {
        &self.outcome
    }

    pub fn treatment(&self) -> &str {
        &self.treatment
    }

    pub fn feature_selection_method(&self) -> &M {
        &self.feature_selection_method
    }

    /// Parameters handed to the method on every call.
    pub fn selection_params(&self) -> SelectionParams {
        SelectionParams {
            info_col_list: None,
            target: self.outcome.clone(),
            treatment_col: self.treatment.clone(),
            weights_col_list: None,
            category_col_list: None,
        }
    }
}

impl<M: FeatureSelectionMethod> FeatureSelector<M> {
    /// Run the scoring method on `df` and return its feature scores as-is.
    ///
    /// Any error from the method is returned unchanged.
    pub fn perform_selection(&self, df: &Table) -> Result<Table, M::Error> {
        let params = self.selection_params();
        log::debug!(
            "Running feature selection '{}' (target: '{}', treatment: '{}') on {} rows x {} columns",
            self.feature_selection_method.name(),
            params.target,
            params.treatment_col,
            df.nrows(),
            df.ncols()
        );
        self.feature_selection_method.select(df, &params)
    }
}

impl FeatureSelector<Box<dyn FeatureSelectionMethod<Error = ScoringError>>> {
    /// Build a selector whose method comes from `config.method`.
    pub fn from_config(config: &SelectorConfig) -> Self {
        FeatureSelector::new(
            config.outcome.clone(),
            config.treatment.clone(),
            build_method(config.method.clone()),
        )
    }
}
