//! `mediagrab grab <url>` – fetch a page and list its media sources.

use anyhow::{anyhow, Result};
use mediagrab_core::config::MediagrabConfig;
use mediagrab_core::extract::{extract_media, extract_media_unique, parse_page};
use mediagrab_core::fetch::fetch_page;
use mediagrab_core::media::MediaReference;

pub fn run_grab(cfg: &MediagrabConfig, url: &str, unique: bool, json: bool) -> Result<()> {
    eprintln!("Working, please wait...");
    tracing::info!("grabbing page {}", url);

    // All fetch/parse causes collapse into one user-facing message; the
    // specific cause goes to the log only.
    let html = fetch_page(cfg, url).map_err(|err| {
        tracing::error!("fetch of {} failed: {}", url, err);
        anyhow!("Could not fetch or parse that page.")
    })?;

    let doc = parse_page(&html);
    let refs = if unique {
        extract_media_unique(&doc)
    } else {
        extract_media(&doc)
    };
    tracing::info!("found {} media reference(s) on {}", refs.len(), url);

    render(&refs, json)
}

fn render(refs: &[MediaReference], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(refs)?);
        return Ok(());
    }

    if refs.is_empty() {
        println!("No media sources found on that page.");
        return Ok(());
    }

    println!("Media sources found:");
    for r in refs {
        println!("{}", format_reference(r));
    }
    Ok(())
}

fn format_reference(r: &MediaReference) -> String {
    format!("  [{}] {}", r.kind, r.url)
}
