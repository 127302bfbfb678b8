//! URL inventories and override lists on disk.
//!
//! Inventories are CSV files with a `url` column or plain text files with one
//! URL per line. A CSV without the column is a fatal input error: there is
//! nothing to match.

mod error;
mod read;
mod write;

pub use error::InventoryError;
pub use read::{read_overrides, read_urls};
pub use write::{write_url_csv, write_url_txt};

/// Column holding URLs in inventory CSVs.
pub const URL_COLUMN: &str = "url";
