use crate::config::MethodType;
use crate::error::ScoringError;
use crate::feature_selection::method::FeatureSelectionMethod;
use crate::feature_selection::univariate_selection::{UnivariateScore, UnivariateScorer};

/// Build a boxed scoring method from a `MethodType`.
pub fn build_method(method: MethodType) -> Box<dyn FeatureSelectionMethod<Error = ScoringError>> {
    match method {
        MethodType::FRegression { center, force_finite, k } => Box::new(UnivariateScorer {
            score: UnivariateScore::FRegression,
            center,
            force_finite,
            k,
        }),
        MethodType::RRegression { center, force_finite, k } => Box::new(UnivariateScorer {
            score: UnivariateScore::RRegression,
            center,
            force_finite,
            k,
        }),
    }
}
