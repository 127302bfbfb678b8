//! Structural input errors that abort a run.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// Tabular input lacks a required column.
    #[error("{}: missing required column `{column}`", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
    /// Input parsed but yielded no usable rows.
    #[error("{}: no URLs found", .path.display())]
    Empty { path: PathBuf },
}
