//! Media reference types produced by the scanner.

use serde::Serialize;
use std::fmt;

/// Kind of media a discovered link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Video,
}

impl MediaKind {
    /// Short label used when listing results (maps to an icon in richer hosts).
    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Audio => "audio",
            MediaKind::Video => "video",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A discovered media URL paired with its kind.
///
/// `url` is non-empty and has passed extension classification for `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaReference {
    pub url: String,
    pub kind: MediaKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_labels() {
        assert_eq!(MediaKind::Audio.label(), "audio");
        assert_eq!(MediaKind::Video.to_string(), "video");
    }

    #[test]
    fn reference_serializes_with_lowercase_kind() {
        let r = MediaReference {
            url: "https://x.com/a.mp3".to_string(),
            kind: MediaKind::Audio,
        };
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"url":"https://x.com/a.mp3","kind":"audio"}"#);
    }
}
