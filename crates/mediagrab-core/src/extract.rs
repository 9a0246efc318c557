//! Aggregator: runs the scanner once per media kind and combines results.

use scraper::Html;
use std::collections::HashSet;

use crate::media::{MediaKind, MediaReference};
use crate::scan::{scan, AUDIO, VIDEO};

/// Parses raw HTML into a queryable page document.
///
/// Parsing is lenient; whatever tree the parser recovers is what gets
/// scanned.
pub fn parse_page(html: &str) -> Html {
    Html::parse_document(html)
}

/// Extracts all media references from `doc`: the full audio scan first,
/// then the full video scan, each in its internal order.
///
/// An empty result is a normal outcome. Duplicate URLs matched by several
/// patterns are retained; see [`extract_media_unique`] for the de-duplicated
/// variant.
pub fn extract_media(doc: &Html) -> Vec<MediaReference> {
    let mut refs = Vec::new();
    for url in scan(doc, &AUDIO) {
        refs.push(MediaReference {
            url,
            kind: MediaKind::Audio,
        });
    }
    for url in scan(doc, &VIDEO) {
        refs.push(MediaReference {
            url,
            kind: MediaKind::Video,
        });
    }
    refs
}

/// Like [`extract_media`], but keeps only the first occurrence of each
/// `(url, kind)` pair, preserving order.
pub fn extract_media_unique(doc: &Html) -> Vec<MediaReference> {
    let mut seen = HashSet::new();
    extract_media(doc)
        .into_iter()
        .filter(|r| seen.insert((r.url.clone(), r.kind)))
        .collect()
}
