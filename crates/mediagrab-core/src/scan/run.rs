//! The scan algorithm shared by all media kinds.

use scraper::{Html, Selector};

use super::ScanConfig;
use crate::url_match::is_of_kind;

fn selector(css: &str) -> Selector {
    // Selectors are built from the static config table only.
    Selector::parse(css).expect("valid scan selector")
}

/// Scans `doc` for URLs matching `cfg`, in document order per pattern.
///
/// Pattern order: typed wrapper sources, then direct container `src`
/// attributes, then data attributes. All three patterns are always
/// evaluated; a URL matched by more than one pattern appears once per
/// match. Missing or unclassifiable attributes contribute nothing.
pub fn scan(doc: &Html, cfg: &ScanConfig) -> Vec<String> {
    let mut urls = Vec::new();

    let wrapper = selector(&cfg.wrapper_selector());
    for el in doc.select(&wrapper) {
        if let Some(src) = el.value().attr(cfg.direct_attr) {
            if is_of_kind(src, cfg.extension) {
                urls.push(src.to_string());
            }
        }
    }

    let direct = selector(&cfg.direct_selector());
    for el in doc.select(&direct) {
        if let Some(src) = el.value().attr(cfg.direct_attr) {
            if is_of_kind(src, cfg.extension) {
                urls.push(src.to_string());
            }
        }
    }

    let data = selector(&cfg.data_selector());
    for el in doc.select(&data) {
        let candidate = el
            .value()
            .attr(cfg.data_attr_primary)
            .or_else(|| el.value().attr(cfg.data_attr_shared));
        if let Some(url) = candidate {
            if is_of_kind(url, cfg.extension) {
                urls.push(url.to_string());
            }
        }
    }

    urls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{AUDIO, VIDEO};

    fn doc(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn typed_source_match() {
        let d = doc(r#"<audio><source type="audio/mp3" src="https://x.com/a.mp3"></audio>"#);
        assert_eq!(scan(&d, &AUDIO), vec!["https://x.com/a.mp3"]);
    }

    #[test]
    fn typed_source_wrong_mime_ignored() {
        let d = doc(r#"<audio><source type="audio/ogg" src="https://x.com/a.mp3"></audio>"#);
        assert!(scan(&d, &AUDIO).is_empty());
    }

    #[test]
    fn direct_src_match() {
        let d = doc(r#"<audio src="https://x.com/direct.mp3"></audio>"#);
        assert_eq!(scan(&d, &AUDIO), vec!["https://x.com/direct.mp3"]);
    }

    #[test]
    fn data_attributes_match() {
        let d = doc(
            r#"<div data-mp3="https://x.com/b.mp3"></div>
               <span data-source="https://x.com/c.mp3"></span>"#,
        );
        assert_eq!(
            scan(&d, &AUDIO),
            vec!["https://x.com/b.mp3", "https://x.com/c.mp3"]
        );
    }

    #[test]
    fn data_primary_wins_over_shared() {
        let d = doc(
            r#"<div data-mp3="https://x.com/primary.mp3" data-source="https://x.com/shared.mp3"></div>"#,
        );
        assert_eq!(scan(&d, &AUDIO), vec!["https://x.com/primary.mp3"]);
    }

    #[test]
    fn all_patterns_evaluated_no_short_circuit() {
        let d = doc(
            r#"<audio src="https://x.com/direct.mp3">
                 <source type="audio/mp3" src="https://x.com/typed.mp3">
               </audio>
               <div data-source="https://x.com/data.mp3"></div>"#,
        );
        assert_eq!(
            scan(&d, &AUDIO),
            vec![
                "https://x.com/typed.mp3",
                "https://x.com/direct.mp3",
                "https://x.com/data.mp3",
            ]
        );
    }

    #[test]
    fn duplicate_across_patterns_retained() {
        let d = doc(
            r#"<audio src="https://x.com/same.mp3"></audio>
               <div data-mp3="https://x.com/same.mp3"></div>"#,
        );
        assert_eq!(
            scan(&d, &AUDIO),
            vec!["https://x.com/same.mp3", "https://x.com/same.mp3"]
        );
    }

    #[test]
    fn missing_src_is_a_non_match() {
        let d = doc(r#"<audio><source type="audio/mp3"></audio>"#);
        assert!(scan(&d, &AUDIO).is_empty());
    }

    #[test]
    fn relative_src_rejected_by_classifier() {
        let d = doc(r#"<audio><source type="audio/mp3" src="a.mp3"></audio>"#);
        assert!(scan(&d, &AUDIO).is_empty());
    }

    #[test]
    fn query_string_after_extension_rejected() {
        let d = doc(r#"<audio src="https://x.com/a.mp3?track=1"></audio>"#);
        assert!(scan(&d, &AUDIO).is_empty());
    }

    // Pins the corrected cross-kind behavior: typed video sources live under
    // a `video` container, never under `audio`.
    #[test]
    fn typed_video_source_under_audio_is_not_a_video_match() {
        let d = doc(r#"<audio><source type="video/mp4" src="https://x.com/v.mp4"></audio>"#);
        assert!(scan(&d, &VIDEO).is_empty());

        let d = doc(r#"<video><source type="video/mp4" src="https://x.com/v.mp4"></video>"#);
        assert_eq!(scan(&d, &VIDEO), vec!["https://x.com/v.mp4"]);
    }

    #[test]
    fn video_data_attributes() {
        let d = doc(
            r#"<div data-mp4="https://x.com/v.mp4"></div>
               <div data-source="https://x.com/w.mp4"></div>"#,
        );
        assert_eq!(
            scan(&d, &VIDEO),
            vec!["https://x.com/v.mp4", "https://x.com/w.mp4"]
        );
    }

    #[test]
    fn shared_data_attribute_filtered_by_extension() {
        // data-source holds an mp3; the video scan must not pick it up.
        let d = doc(r#"<div data-source="https://x.com/a.mp3"></div>"#);
        assert!(scan(&d, &VIDEO).is_empty());
        assert_eq!(scan(&d, &AUDIO), vec!["https://x.com/a.mp3"]);
    }
}
