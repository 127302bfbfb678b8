//! CLI command handlers, one file per subcommand.

mod analyze;
mod batch;
mod build;
mod extract;
mod resolve;

pub use analyze::run_analyze;
pub use batch::run_batch;
pub use build::{run_build, BuildArgs};
pub use extract::run_extract;
pub use resolve::run_resolve;
