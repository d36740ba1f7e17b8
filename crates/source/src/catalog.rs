//! Catalog listing: request paths in, deduplicated media items out.

use std::collections::HashSet;

use scraper::{ElementRef, Html};

use cinebd_core::error::SourceError;
use cinebd_core::types::{CatalogPage, FilterSelection, MediaItem};

use crate::dom;
use crate::filters::{self, SearchTarget};
use crate::strategy::ScrapeStrategy;
use crate::urls;

/// Placeholder when a card carries no usable title markup.
pub const FALLBACK_TITLE: &str = "Unknown Title";

/// Path for the default listing. The site exposes no distinct popular or
/// latest ranking, so both browse intents page through an empty search.
pub fn listing_request_path(page: u32) -> String {
    format!("/search.php?q=&page={page}")
}

/// Path for a search request, honoring at most one active category facet.
pub fn search_request_path(page: u32, query: &str, selection: &FilterSelection) -> String {
    match filters::resolve_target(selection) {
        SearchTarget::Category(category) => format!(
            "/category.php?category={}&page={page}",
            urlencoding::encode(&category)
        ),
        SearchTarget::TvCategory(category) => format!(
            "/tcategory.php?category={}&page={page}",
            urlencoding::encode(&category)
        ),
        SearchTarget::Search => {
            format!("/search.php?q={}&page={page}", urlencoding::encode(query))
        }
    }
}

/// Parse a listing page into deduplicated items plus a has-more flag.
pub fn parse_catalog(
    html: &str,
    base_url: &str,
    strategy: &ScrapeStrategy,
) -> Result<CatalogPage, SourceError> {
    let doc = Html::parse_document(html);
    let anchors = dom::sel("a")?;

    let mut seen = HashSet::new();
    let mut items = Vec::new();

    for anchor in doc.select(&anchors) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if !is_detail_link(href, strategy) {
            continue;
        }
        let item = parse_card(anchor, href, base_url, strategy)?;
        if seen.insert(item.path.clone()) {
            items.push(item);
        }
    }

    let has_next_page = probe_next_page(&doc)?;

    Ok(CatalogPage {
        items,
        has_next_page,
    })
}

fn is_detail_link(href: &str, strategy: &ScrapeStrategy) -> bool {
    let trimmed = href.trim_start_matches('/');
    strategy
        .detail_link_prefixes
        .iter()
        .any(|prefix| trimmed.starts_with(prefix))
}

fn parse_card(
    anchor: ElementRef<'_>,
    href: &str,
    base_url: &str,
    strategy: &ScrapeStrategy,
) -> Result<MediaItem, SourceError> {
    let img = anchor.select(&dom::sel("img")?).next();

    let title = match dom::first_match(anchor, strategy.card_title_selectors)? {
        Some(element) => dom::text_of(element),
        None => img
            .and_then(|i| i.value().attr("alt"))
            .map(str::to_string)
            .unwrap_or_else(|| FALLBACK_TITLE.to_string()),
    };

    let thumbnail_url = img
        .and_then(dom::image_src)
        .map(|src| urls::absolutize(base_url, src));

    Ok(MediaItem {
        path: href.to_string(),
        title,
        thumbnail_url,
    })
}

/// Pagination affordances differ across site templates; probe all known ones.
fn probe_next_page(doc: &Html) -> Result<bool, SourceError> {
    let after_active = dom::sel("ul.pagination li.active + li a")?;
    if doc.select(&after_active).next().is_some() {
        return Ok(true);
    }

    let marked_next = dom::sel("a.next")?;
    if doc.select(&marked_next).next().is_some() {
        return Ok(true);
    }

    // No `:contains` in CSS proper; check anchor text by hand.
    let anchors = dom::sel("a")?;
    Ok(doc.select(&anchors).any(|a| {
        let text = dom::text_of(a);
        text.contains("Next") || text.contains('»')
    }))
}
