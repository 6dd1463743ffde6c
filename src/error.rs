use std::error::Error;
use std::fmt;

/// Errors raised while building or slicing a `Table`.
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// Number of column names does not match the number of value columns.
    ShapeMismatch { expected: usize, found: usize },
    /// A column has a different length than the first one.
    RaggedColumn { column: String, expected: usize, found: usize },
    DuplicateColumn(String),
    MissingColumn(String),
    /// Row labels do not cover every row.
    IndexLengthMismatch { rows: usize, labels: usize },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TableError::ShapeMismatch { expected, found } => write!(
                f,
                "Expected {} column names but the value matrix has {} columns",
                expected, found
            ),
            TableError::RaggedColumn { column, expected, found } => write!(
                f,
                "Column '{}' has {} values, expected {}",
                column, found, expected
            ),
            TableError::DuplicateColumn(name) => write!(f, "Duplicate column name '{}'", name),
            TableError::MissingColumn(name) => write!(f, "Column '{}' not found in table", name),
            TableError::IndexLengthMismatch { rows, labels } => write!(
                f,
                "Index has {} labels but the table has {} rows",
                labels, rows
            ),
        }
    }
}

impl Error for TableError {}

/// Errors raised by the built-in univariate scoring methods.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoringError {
    Table(TableError),
    /// Every column was excluded (target, treatment, info, weights, category).
    NoFeatures,
    /// Feature matrix and target vector have different row counts.
    LengthMismatch { x_rows: usize, y_len: usize },
    /// Too few rows for a positive number of degrees of freedom.
    NotEnoughSamples { found: usize, required: usize },
}

impl fmt::Display for ScoringError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScoringError::Table(err) => write!(f, "{}", err),
            ScoringError::NoFeatures => write!(f, "No candidate feature columns left to score"),
            ScoringError::LengthMismatch { x_rows, y_len } => write!(
                f,
                "Feature matrix has {} rows but the target has {} values",
                x_rows, y_len
            ),
            ScoringError::NotEnoughSamples { found, required } => write!(
                f,
                "Need at least {} rows to score features, got {}",
                required, found
            ),
        }
    }
}

impl Error for ScoringError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ScoringError::Table(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TableError> for ScoringError {
    fn from(err: TableError) -> Self {
        ScoringError::Table(err)
    }
}
