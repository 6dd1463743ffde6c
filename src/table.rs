//! Tabular dataset passed to and returned from feature selection methods.
//!
//! A `Table` is an ordered set of uniquely named `f64` columns backed by a
//! row-major `ndarray::Array2`, with optional row labels. Score tables
//! produced by the built-in methods use the labels to carry feature names.
use std::collections::HashSet;

use ndarray::{Array2, ArrayView1, Axis};

use crate::error::TableError;

#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    index: Option<Vec<String>>,
    values: Array2<f64>,
}

impl Table {
    /// Build a table from column names and a (rows x columns) value matrix.
    pub fn new(columns: Vec<String>, values: Array2<f64>) -> Result<Self, TableError> {
        if columns.len() != values.ncols() {
            return Err(TableError::ShapeMismatch {
                expected: columns.len(),
                found: values.ncols(),
            });
        }
        check_unique(&columns)?;
        Ok(Table {
            columns,
            index: None,
            values,
        })
    }

    /// Build a table from `(name, values)` pairs. All columns must have the
    /// same length.
    pub fn from_columns<S: Into<String>>(columns: Vec<(S, Vec<f64>)>) -> Result<Self, TableError> {
        let (names, data): (Vec<String>, Vec<Vec<f64>>) = columns
            .into_iter()
            .map(|(name, values)| (name.into(), values))
            .unzip();

        let nrows = data.first().map_or(0, |col| col.len());
        for (name, col) in names.iter().zip(data.iter()) {
            if col.len() != nrows {
                return Err(TableError::RaggedColumn {
                    column: name.clone(),
                    expected: nrows,
                    found: col.len(),
                });
            }
        }

        let values = Array2::from_shape_fn((nrows, data.len()), |(r, c)| data[c][r]);
        Table::new(names, values)
    }

    /// Attach row labels.
    pub fn with_index(mut self, index: Vec<String>) -> Result<Self, TableError> {
        if index.len() != self.nrows() {
            return Err(TableError::IndexLengthMismatch {
                rows: self.nrows(),
                labels: index.len(),
            });
        }
        self.index = Some(index);
        Ok(self)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn index(&self) -> Option<&[String]> {
        self.index.as_deref()
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn nrows(&self) -> usize {
        self.values.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.values.ncols()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    pub fn is_empty(&self) -> bool {
        self.nrows() == 0 || self.ncols() == 0
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn column(&self, name: &str) -> Result<ArrayView1<'_, f64>, TableError> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| TableError::MissingColumn(name.to_string()))?;
        Ok(self.values.column(idx))
    }

    /// Value at `(row, column name)`.
    pub fn get(&self, row: usize, name: &str) -> Option<f64> {
        let col = self.column_index(name)?;
        self.values.get((row, col)).copied()
    }

    /// New table holding only `names`, in the given order. Row labels are kept.
    pub fn select_columns<S: AsRef<str>>(&self, names: &[S]) -> Result<Table, TableError> {
        let indices = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.column_index(name)
                    .ok_or_else(|| TableError::MissingColumn(name.to_string()))
            })
            .collect::<Result<Vec<usize>, TableError>>()?;

        let columns: Vec<String> = names.iter().map(|n| n.as_ref().to_string()).collect();
        check_unique(&columns)?;

        Ok(Table {
            columns,
            index: self.index.clone(),
            values: self.values.select(Axis(1), &indices),
        })
    }

    /// New table without `names`. Names that are not present are ignored.
    pub fn drop_columns<S: AsRef<str>>(&self, names: &[S]) -> Table {
        let keep: Vec<usize> = (0..self.ncols())
            .filter(|&i| !names.iter().any(|n| n.as_ref() == self.columns[i]))
            .collect();

        Table {
            columns: keep.iter().map(|&i| self.columns[i].clone()).collect(),
            index: self.index.clone(),
            values: self.values.select(Axis(1), &keep),
        }
    }

    /// New table with rows taken in the order of `rows`.
    ///
    /// # Panics
    ///
    /// If any entry of `rows` is out of bounds.
    pub fn select_rows(&self, rows: &[usize]) -> Table {
        Table {
            columns: self.columns.clone(),
            index: self
                .index
                .as_ref()
                .map(|labels| rows.iter().map(|&r| labels[r].clone()).collect()),
            values: self.values.select(Axis(0), rows),
        }
    }
}

fn check_unique(columns: &[String]) -> Result<(), TableError> {
    let mut seen = HashSet::with_capacity(columns.len());
    for name in columns {
        if !seen.insert(name.as_str()) {
            return Err(TableError::DuplicateColumn(name.clone()));
        }
    }
    Ok(())
}
