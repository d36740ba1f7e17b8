//! Detail page parser.

use scraper::Html;

use cinebd_core::error::SourceError;
use cinebd_core::types::{MediaDetail, MediaStatus};

use crate::dom;
use crate::strategy::ScrapeStrategy;
use crate::urls;

/// Trailing suffix the site appends to detail-page titles.
const TITLE_SUFFIX: &str = " — Watch";

/// Parse an item's detail page. Every field degrades to an empty value when
/// its markup is missing.
pub fn parse_detail(
    html: &str,
    base_url: &str,
    strategy: &ScrapeStrategy,
) -> Result<MediaDetail, SourceError> {
    let doc = Html::parse_document(html);
    let root = doc.root_element();

    let raw_title = dom::first_match(root, strategy.detail_title_selectors)?
        .map(dom::text_of)
        .map(|t| t.strip_suffix(TITLE_SUFFIX).unwrap_or(&t).to_string())
        .unwrap_or_default();

    let synopsis = dom::first_match(root, strategy.synopsis_selectors)?
        .map(dom::text_of)
        .unwrap_or_default();

    let genres: Vec<String> = doc
        .select(&dom::union(strategy.genre_selectors)?)
        .map(dom::text_of)
        .filter(|g| !g.is_empty())
        .collect();

    let thumbnail_url = dom::first_match(root, strategy.poster_selectors)?
        .and_then(dom::image_src)
        .map(|src| urls::absolutize(base_url, src));

    let title = if strategy.annotate_fourk {
        annotate_fourk(raw_title, &doc, &genres, strategy)?
    } else {
        raw_title
    };

    Ok(MediaDetail {
        title,
        synopsis,
        genres,
        status: MediaStatus::Completed,
        thumbnail_url,
    })
}

/// Append `" (4K)"` when a quality badge or genre tag carries the marker but
/// the raw title does not. Display-only annotation.
fn annotate_fourk(
    title: String,
    doc: &Html,
    genres: &[String],
    strategy: &ScrapeStrategy,
) -> Result<String, SourceError> {
    if title.to_lowercase().contains("4k") {
        return Ok(title);
    }

    let badge_hit = doc
        .select(&dom::union(strategy.badge_selectors)?)
        .map(dom::text_of)
        .chain(genres.iter().cloned())
        .any(|text| text.to_lowercase().contains("4k"));

    if badge_hit {
        Ok(format!("{title} (4K)"))
    } else {
        Ok(title)
    }
}
