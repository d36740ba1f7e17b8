//! Stream resolution: direct media paths short-circuit, player pages are
//! scraped for their embedded `<source>`.

use scraper::Html;

use cinebd_core::error::SourceError;
use cinebd_core::types::VideoSource;

use crate::dom;
use crate::urls;

const DIRECT_SUFFIXES: &[&str] = &[".mp4", ".mkv"];
const DIRECT_SEGMENT: &str = "/Data/";

/// True when the URL can be handed to a player without scraping a page.
pub fn is_direct_media(url: &str) -> bool {
    DIRECT_SUFFIXES.iter().any(|suffix| url.ends_with(suffix)) || url.contains(DIRECT_SEGMENT)
}

/// The single source entry for an already-direct media URL.
pub fn direct_source(url: &str) -> VideoSource {
    VideoSource {
        url: url.to_string(),
        label: "Direct".to_string(),
    }
}

/// Extract the embedded media source from a player page. An empty result
/// means the host has nothing to play; it is not an error.
pub fn parse_player_page(html: &str, base_url: &str) -> Result<Vec<VideoSource>, SourceError> {
    let doc = Html::parse_document(html);

    let mp4 = dom::sel("source[type='video/mp4']")?;
    let any = dom::sel("source")?;

    let src = doc
        .select(&mp4)
        .next()
        .or_else(|| doc.select(&any).next())
        .and_then(|element| element.value().attr("src"));

    match src {
        Some(src) if !src.trim().is_empty() => Ok(vec![VideoSource {
            url: urls::absolutize(base_url, src),
            label: "Original".to_string(),
        }]),
        _ => Ok(vec![]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_media_detection() {
        assert!(is_direct_media("http://site.example/d/ep1.mp4"));
        assert!(is_direct_media("http://site.example/d/ep1.mkv"));
        assert!(is_direct_media("http://site.example/Data/ep1"));
        assert!(!is_direct_media("http://site.example/player.php?id=1"));
    }

    #[test]
    fn direct_source_carries_the_url_verbatim() {
        let source = direct_source("http://site.example/d/ep1.mkv");
        assert_eq!(source.url, "http://site.example/d/ep1.mkv");
        assert_eq!(source.label, "Direct");
    }

    #[test]
    fn mp4_source_preferred_over_other_types() {
        let html = r#"
            <video>
                <source type="video/webm" src="/v/a.webm">
                <source type="video/mp4" src="/v/a.mp4">
            </video>
        "#;
        let sources = parse_player_page(html, "http://site.example").unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].url, "http://site.example/v/a.mp4");
        assert_eq!(sources[0].label, "Original");
    }

    #[test]
    fn any_source_accepted_when_no_mp4() {
        let html = r#"<video><source type="video/webm" src="v/a.webm"></video>"#;
        let sources = parse_player_page(html, "http://site.example").unwrap();
        assert_eq!(sources[0].url, "http://site.example/v/a.webm");
    }

    #[test]
    fn absolute_source_url_passes_through() {
        let html = r#"<video><source type="video/mp4" src="https://cdn.example/a.mp4"></video>"#;
        let sources = parse_player_page(html, "http://site.example").unwrap();
        assert_eq!(sources[0].url, "https://cdn.example/a.mp4");
    }

    #[test]
    fn pages_without_sources_yield_nothing() {
        let sources = parse_player_page("<html><body></body></html>", "http://site.example").unwrap();
        assert!(sources.is_empty());
    }

    #[test]
    fn blank_src_is_treated_as_missing() {
        let html = r#"<video><source type="video/mp4" src=""></video>"#;
        let sources = parse_player_page(html, "http://site.example").unwrap();
        assert!(sources.is_empty());
    }
}
