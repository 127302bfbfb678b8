//! URL normalization: slugs, redirect paths and host checks.
//!
//! Everything here is total: a string the `url` crate cannot parse degrades
//! to an empty slug or a best-effort path instead of an error.

mod path;
mod slug;

pub use path::{is_on_host, path_of, relative_target};
pub use slug::slug_of;
