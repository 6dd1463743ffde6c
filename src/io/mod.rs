pub mod score_report;

pub use score_report::{write_table, write_table_tsv};
