use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Configuration for a `FeatureSelector` built through the factory.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SelectorConfig {
    /// The target column
    pub outcome: String,
    /// The column that determines control and test groups
    pub treatment: String,

    #[serde(default)]
    pub method: MethodType,
}

/// Built-in scoring methods and their parameters.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum MethodType {
    /// Univariate F-test against the target.
    FRegression {
        center: bool,
        force_finite: bool,
        k: Option<usize>,
    },
    /// Pearson correlation with the target, ranked by magnitude.
    RRegression {
        center: bool,
        force_finite: bool,
        k: Option<usize>,
    },
}

impl Default for MethodType {
    fn default() -> Self {
        MethodType::FRegression {
            center: true,
            force_finite: true,
            k: None,
        }
    }
}

impl FromStr for MethodType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "f_regression" => Ok(MethodType::default()),
            "r_regression" => Ok(MethodType::RRegression {
                center: true,
                force_finite: true,
                k: None,
            }),
            _ => Err(format!(
                "Unknown feature selection method: {}. Expected one of: f_regression, r_regression",
                s
            )),
        }
    }
}

impl SelectorConfig {
    pub fn new(outcome: impl Into<String>, treatment: impl Into<String>, method: MethodType) -> Self {
        Self {
            outcome: outcome.into(),
            treatment: treatment.into(),
            method,
        }
    }
}
