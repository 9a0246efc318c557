//! `mediagrab find-url <text>` – print the first URL token in the text.

use anyhow::{bail, Result};
use mediagrab_core::url_match::find_url;

pub fn run_find_url(text: &str) -> Result<()> {
    match find_url(text) {
        Some(url) => {
            println!("{url}");
            Ok(())
        }
        None => bail!("no URL found in the given text"),
    }
}
