//! Generic element scanner: applies one [`ScanConfig`] against a parsed page.
//!
//! Each media kind is a single declarative table entry; the scan algorithm
//! itself is shared. Three patterns are checked per kind, in order: typed
//! `<source>` children, direct `src` attributes, and generic `data-*`
//! attributes. No pattern short-circuits the others, and duplicate URLs
//! across patterns are retained.

mod config;
mod run;

pub use config::{ScanConfig, AUDIO, VIDEO};
pub use run::scan;
