//! Selector and heuristic tables driving the parsers.
//!
//! Markup drift on the target site is absorbed here: every extracted field is
//! backed by an ordered candidate list, and the behaviors that differed
//! between site revisions are explicit policies instead of scattered code.

/// How episode sort keys are derived within a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonNumbering {
    /// Use the resolved episode number as-is.
    Raw,
    /// Add `season * 1000` so one flat key stays globally sortable.
    Offset,
}

/// Ordering applied to the fully assembled episode list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalOrdering {
    /// Season-major, episode-number-minor, as assembled.
    SeasonMajor,
    /// Reverse the assembled list for newest-first presentation.
    Reversed,
}

/// Everything the parsers need to know about the site's markup.
#[derive(Debug, Clone)]
pub struct ScrapeStrategy {
    /// `href` prefixes that mark an anchor as a detail-page link.
    pub detail_link_prefixes: &'static [&'static str],
    /// URL markers identifying a movie detail page.
    pub movie_page_markers: &'static [&'static str],
    /// URL markers identifying a series detail page.
    pub series_page_markers: &'static [&'static str],
    /// Title candidates inside a catalog card, tried in order.
    pub card_title_selectors: &'static [&'static str],
    /// Title candidates on a detail page, tried in order.
    pub detail_title_selectors: &'static [&'static str],
    pub synopsis_selectors: &'static [&'static str],
    /// Genre tag elements; matches from all candidates are kept in page order.
    pub genre_selectors: &'static [&'static str],
    pub poster_selectors: &'static [&'static str],
    /// Quality badges consulted by the 4K annotation.
    pub badge_selectors: &'static [&'static str],
    /// Append `" (4K)"` when a badge carries the marker and the title lacks it.
    pub annotate_fourk: bool,
    pub season_numbering: SeasonNumbering,
    pub final_ordering: FinalOrdering,
}

impl ScrapeStrategy {
    /// Behavior of the most complete site revision.
    pub fn canonical() -> Self {
        Self {
            detail_link_prefixes: &["view.php", "watch.php", "tview.php"],
            movie_page_markers: &["view.php", "tview.php"],
            series_page_markers: &["watch.php"],
            card_title_selectors: &[
                "span.truncate",
                "div.text-sm",
                "div.cp-title",
                "h2",
                ".card-title",
            ],
            detail_title_selectors: &["h1", ".movie-title", "title"],
            synopsis_selectors: &["p.leading-relaxed", "#synopsis"],
            genre_selectors: &["div.ganre-wrapper a", ".meta-cat"],
            poster_selectors: &["img.poster", ".tvCard img"],
            badge_selectors: &["span.badge", ".quality"],
            annotate_fourk: false,
            season_numbering: SeasonNumbering::Raw,
            final_ordering: FinalOrdering::SeasonMajor,
        }
    }

    /// Revision that tags 4K releases in the display title.
    pub fn fourk_badges() -> Self {
        Self {
            annotate_fourk: true,
            ..Self::canonical()
        }
    }

    /// Revision that folds the season into a flat sortable key.
    pub fn season_offset() -> Self {
        Self {
            season_numbering: SeasonNumbering::Offset,
            ..Self::canonical()
        }
    }

    /// Revision that presents the assembled episode list newest-first.
    pub fn reversed() -> Self {
        Self {
            final_ordering: FinalOrdering::Reversed,
            ..Self::canonical()
        }
    }
}

impl Default for ScrapeStrategy {
    fn default() -> Self {
        Self::canonical()
    }
}
