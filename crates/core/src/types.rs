use serde::{Deserialize, Serialize};

/// One entry in a catalog listing.
///
/// Identity is the site-relative `path`; listings collapse duplicate paths
/// to the first occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub path: String,
    pub title: String,
    pub thumbnail_url: Option<String>,
}

/// One page of a catalog or search listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogPage {
    pub items: Vec<MediaItem>,
    pub has_next_page: bool,
}

/// Metadata scraped from an item's detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaDetail {
    pub title: String,
    pub synopsis: String,
    /// Genre tags in page order.
    pub genres: Vec<String>,
    pub status: MediaStatus,
    pub thumbnail_url: Option<String>,
}

impl MediaDetail {
    /// Genres joined for display, preserving page order.
    pub fn genre_line(&self) -> String {
        self.genres.join(", ")
    }
}

/// Publication status of an item. The site only carries finished content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaStatus {
    Completed,
}

impl MediaStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for MediaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A playable entry under an item: the single synthetic movie entry, or one
/// per season-manifest record for a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub display_name: String,
    /// Ordering key within the assembled list; season-major for series.
    pub sort_key: f32,
    pub path: String,
}

/// A resolved stream for an episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSource {
    pub url: String,
    pub label: String,
}

/// One facet group offered by a source. `options[0]` is always the
/// "no filter" default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterGroup {
    pub name: String,
    pub options: Vec<FilterOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

/// Selected option per filter group, positionally matching the groups
/// returned by the source. Missing entries mean "default".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub indices: Vec<usize>,
}

impl FilterSelection {
    /// Selected option index for a group, 0 when unset.
    pub fn index(&self, group: usize) -> usize {
        self.indices.get(group).copied().unwrap_or(0)
    }
}
