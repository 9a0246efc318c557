//! CLI command handlers. Each command is in its own file.

mod find_url;
mod grab;
mod share;

pub use find_url::run_find_url;
pub use grab::run_grab;
pub use share::run_share;
