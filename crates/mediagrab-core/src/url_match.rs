//! URL token matching and media-extension classification.
//!
//! The matcher finds the first `http(s)://…` token inside arbitrary text;
//! the classifier combines that shape check with a case-insensitive
//! file-extension suffix test.

use regex::Regex;
use std::sync::LazyLock;

/// First URL-shaped token: an `http`/`https` scheme (any case) followed by
/// at least one non-whitespace character.
static URL_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://\S+").expect("valid URL pattern"));

/// Returns the first URL-shaped token in `text`, verbatim.
///
/// No normalization and no trailing-punctuation trimming is applied; the
/// token is returned exactly as it appears. `None` when `text` contains no
/// such token.
pub fn find_url(text: &str) -> Option<&str> {
    URL_TOKEN.find(text).map(|m| m.as_str())
}

/// True iff `url` contains a URL-shaped token and, lowercased, ends with
/// `.` + `extension`.
///
/// The shape check is deliberately loose: a candidate like
/// `"see https://x.com/a.mp3"` passes even though the whole string is not a
/// bare URL. A query string after the extension fails the suffix test.
pub fn is_of_kind(url: &str, extension: &str) -> bool {
    if find_url(url).is_none() {
        return false;
    }
    let suffix = format!(".{}", extension.to_ascii_lowercase());
    url.to_ascii_lowercase().ends_with(&suffix)
}
