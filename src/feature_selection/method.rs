use crate::table::Table;

/// Column roles handed to the scoring method: the target column and the
/// columns it must leave out of the candidate features.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roles {
    pub target: String,
    pub drop: Vec<String>,
}

/// Fixed parameter set passed along with the table to a
/// `FeatureSelectionMethod`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionParams {
    /// Informational columns (ids, timestamps) that are not features.
    pub info_col_list: Option<Vec<String>>,
    /// Outcome column to score features against.
    pub target: String,
    /// Column that splits rows into control and test groups.
    pub treatment_col: String,
    pub weights_col_list: Option<Vec<String>>,
    pub category_col_list: Option<Vec<String>>,
}

impl SelectionParams {
    pub fn new(target: impl Into<String>, treatment_col: impl Into<String>) -> Self {
        SelectionParams {
            info_col_list: None,
            target: target.into(),
            treatment_col: treatment_col.into(),
            weights_col_list: None,
            category_col_list: None,
        }
    }

    pub fn roles(&self) -> Roles {
        Roles {
            target: self.target.clone(),
            drop: vec![self.treatment_col.clone()],
        }
    }

    /// Every column that is not a candidate feature.
    pub fn excluded_columns(&self) -> Vec<&str> {
        let mut excluded = vec![self.target.as_str(), self.treatment_col.as_str()];
        for list in [
            &self.info_col_list,
            &self.weights_col_list,
            &self.category_col_list,
        ]
        .into_iter()
        .flatten()
        {
            excluded.extend(list.iter().map(String::as_str));
        }
        excluded
    }
}

/// A feature scoring strategy: takes a table plus the selection parameters
/// and returns a table of feature scores.
///
/// Implementations own their error type; callers of the selector see it
/// unchanged.
pub trait FeatureSelectionMethod {
    type Error;

    fn select(&self, table: &Table, params: &SelectionParams) -> Result<Table, Self::Error>;

    /// Optional human readable name for the method
    fn name(&self) -> &str {
        "feature_selection_method"
    }
}

impl<M: FeatureSelectionMethod + ?Sized> FeatureSelectionMethod for Box<M> {
    type Error = M::Error;

    fn select(&self, table: &Table, params: &SelectionParams) -> Result<Table, Self::Error> {
        (**self).select(table, params)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Closure-backed method, see [`from_fn`].
#[derive(Clone)]
pub struct FnMethod<F> {
    f: F,
}

/// Use a closure `Fn(&Table, &SelectionParams) -> Result<Table, E>` as a
/// feature selection method.
pub fn from_fn<F, E>(f: F) -> FnMethod<F>
where
    F: Fn(&Table, &SelectionParams) -> Result<Table, E>,
{
    FnMethod { f }
}

impl<F, E> FeatureSelectionMethod for FnMethod<F>
where
    F: Fn(&Table, &SelectionParams) -> Result<Table, E>,
{
    type Error = E;

    fn select(&self, table: &Table, params: &SelectionParams) -> Result<Table, E> {
        (self.f)(table, params)
    }

    fn name(&self) -> &str {
        "fn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excluded_columns_include_optional_lists() {
        let mut params = SelectionParams::new("y", "t");
        assert_eq!(params.excluded_columns(), vec!["y", "t"]);

        params.info_col_list = Some(vec!["id".to_string()]);
        params.category_col_list = Some(vec!["city".to_string()]);
        assert_eq!(params.excluded_columns(), vec!["y", "t", "id", "city"]);
    }

    #[test]
    fn test_roles_drop_treatment() {
        let roles = SelectionParams::new("y", "t").roles();
        assert_eq!(roles.target, "y");
        assert_eq!(roles.drop, vec!["t".to_string()]);
    }
}
