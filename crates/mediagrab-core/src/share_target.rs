//! Share-target resolution: pulls a usable link out of the query parameters
//! a sharing host appends to our own address.
//!
//! The `link` parameter is preferred verbatim; when it is absent or empty,
//! the first URL token inside `description` is used instead.

use url::Url;

use crate::url_match::find_url;

/// Resolves the shared link from `page_url`'s query string, if any.
///
/// Returns `None` when the address does not parse, carries neither
/// parameter, or the description contains no URL token.
pub fn resolve_share_target(page_url: &str) -> Option<String> {
    let parsed = Url::parse(page_url).ok()?;

    let mut link: Option<String> = None;
    let mut description: Option<String> = None;
    for (name, value) in parsed.query_pairs() {
        match name.as_ref() {
            // First occurrence wins, matching query-param lookup semantics.
            "link" if link.is_none() => link = Some(value.into_owned()),
            "description" if description.is_none() => description = Some(value.into_owned()),
            _ => {}
        }
    }

    link.filter(|l| !l.is_empty()).or_else(|| {
        description
            .as_deref()
            .and_then(find_url)
            .map(str::to_string)
    })
}
