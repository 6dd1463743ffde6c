//! Feature selection adapters.
//!
//! `FeatureSelector` bundles an outcome column, a treatment column and a
//! scoring method, and forwards tables to that method. Methods implement
//! `FeatureSelectionMethod`; `univariate_selection` provides built-in ones
//! and `factory` builds them from configuration.
pub mod factory;
pub mod feature_selector;
pub mod method;
pub mod univariate_selection;

pub use feature_selector::FeatureSelector;
pub use method::{from_fn, FeatureSelectionMethod, FnMethod, Roles, SelectionParams};
