pub mod config;
pub mod logging;

pub mod extract;
pub mod fetch;
pub mod media;
pub mod scan;
pub mod share_target;
pub mod url_match;

// Re-exported so hosts can hold a parsed page without depending on scraper directly.
pub use scraper::Html;
