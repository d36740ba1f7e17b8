//! Thin selection helpers over `scraper`.

use cinebd_core::error::SourceError;
use scraper::{ElementRef, Selector};

pub(crate) fn sel(css: &str) -> Result<Selector, SourceError> {
    Selector::parse(css).map_err(|e| SourceError::Selector(e.to_string()))
}

/// One selector matching any of the candidates, in document order.
pub(crate) fn union(candidates: &[&str]) -> Result<Selector, SourceError> {
    sel(&candidates.join(", "))
}

/// First element matched by the candidate list, trying selectors in order.
pub(crate) fn first_match<'a>(
    scope: ElementRef<'a>,
    candidates: &[&str],
) -> Result<Option<ElementRef<'a>>, SourceError> {
    for css in candidates {
        if let Some(element) = scope.select(&sel(css)?).next() {
            return Ok(Some(element));
        }
    }
    Ok(None)
}

/// Element text with surrounding whitespace trimmed.
pub(crate) fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Image source, preferring the lazy-load attribute over the eager one.
pub(crate) fn image_src<'a>(img: ElementRef<'a>) -> Option<&'a str> {
    let value = img.value();
    value.attr("data-src").or_else(|| value.attr("src"))
}
