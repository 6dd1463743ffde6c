//! hypex-selectors: feature selection for uplift and A/B test analysis.
//!
//! The core is `FeatureSelector`, which holds the outcome and treatment
//! column names together with an injected scoring method and returns the
//! method's feature score table for any input table. A univariate
//! F-test / correlation scorer is included so the selector can run without
//! an external model, along with serde configuration and a delimited
//! report writer for score tables.
//!
//! The library logs through the `log` facade and never installs a logger.
pub mod config;
pub mod error;
pub mod feature_selection;
pub mod io;
pub mod table;

pub use error::{ScoringError, TableError};
pub use feature_selection::{FeatureSelectionMethod, FeatureSelector, SelectionParams};
pub use table::Table;
