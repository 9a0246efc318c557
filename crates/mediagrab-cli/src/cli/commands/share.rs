//! `mediagrab share <address>` – resolve share-target params, then grab.

use anyhow::Result;
use mediagrab_core::config::MediagrabConfig;
use mediagrab_core::share_target::resolve_share_target;

use super::run_grab;

pub fn run_share(cfg: &MediagrabConfig, address: &str, unique: bool, json: bool) -> Result<()> {
    match resolve_share_target(address) {
        Some(link) => {
            tracing::info!("share target resolved to {}", link);
            println!("Shared link: {link}");
            run_grab(cfg, &link, unique, json)
        }
        None => {
            println!("No link found in shared content.");
            Ok(())
        }
    }
}
