//! Per-kind scan configuration.

/// Declarative description of how to search a page for one media kind.
///
/// Value object; the two instances below are the whole configuration table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// Container element for the media kind (`audio` / `video`).
    pub container_tag: &'static str,
    /// Wrapper element carrying typed sources inside the container.
    pub wrapper_tag: &'static str,
    /// Required `type` attribute on the wrapper element.
    pub mime_type: &'static str,
    /// Attribute read for both the wrapper and the direct-source pattern.
    pub direct_attr: &'static str,
    /// Kind-specific data attribute (wins when both are present).
    pub data_attr_primary: &'static str,
    /// Data attribute shared across kinds.
    pub data_attr_shared: &'static str,
    /// Required file extension, lowercase, without the dot.
    pub extension: &'static str,
}

pub const AUDIO: ScanConfig = ScanConfig {
    container_tag: "audio",
    wrapper_tag: "source",
    mime_type: "audio/mp3",
    direct_attr: "src",
    data_attr_primary: "data-mp3",
    data_attr_shared: "data-source",
    extension: "mp3",
};

// Typed video sources are looked up under a `video` container. Earlier
// revisions of this scanner queried them under `audio`, which matched
// nothing real; see the pinning test in scan/run.rs.
pub const VIDEO: ScanConfig = ScanConfig {
    container_tag: "video",
    wrapper_tag: "source",
    mime_type: "video/mp4",
    direct_attr: "src",
    data_attr_primary: "data-mp4",
    data_attr_shared: "data-source",
    extension: "mp4",
};

impl ScanConfig {
    /// CSS selector for typed wrapper sources, e.g.
    /// `audio > source[type="audio/mp3"]`.
    pub(crate) fn wrapper_selector(&self) -> String {
        format!(
            "{} > {}[type=\"{}\"]",
            self.container_tag, self.wrapper_tag, self.mime_type
        )
    }

    /// CSS selector for containers with a direct source attribute,
    /// e.g. `audio[src]`.
    pub(crate) fn direct_selector(&self) -> String {
        format!("{}[{}]", self.container_tag, self.direct_attr)
    }

    /// CSS selector for elements carrying either data attribute,
    /// e.g. `[data-mp3], [data-source]`.
    pub(crate) fn data_selector(&self) -> String {
        format!("[{}], [{}]", self.data_attr_primary, self.data_attr_shared)
    }
}
