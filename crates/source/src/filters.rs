//! Search facet taxonomy and request-target resolution.

use cinebd_core::types::{FilterGroup, FilterOption, FilterSelection};

pub const TYPE_GROUP: usize = 0;
pub const CATEGORY_GROUP: usize = 1;

static TYPE_OPTIONS: &[(&str, &str)] = &[("All", ""), ("Movies", "movie"), ("TV Series", "tv")];

// Site taxonomy, verbatim (including the site's own typos and duplicates).
static CATEGORIES: &[&str] = &[
    "Any",
    "3D Movies",
    "4K Movies",
    "Animation",
    "Anime",
    "Bangla",
    "Bangla Dubbed",
    "Bangla Movies",
    "Chinese",
    "Documentaries",
    "Dual Audio",
    "English",
    "Exclusive Full HD",
    "Foreign",
    "Hindi",
    "Indonesian",
    "Japanese",
    "Kids Cartoon",
    "Korean",
    "Pakistani",
    "Punjabi",
    "Romance",
    "Hindi Dubbed/Chinees Movies",
    "Hindi Dubbed/English Movies",
    "Hindi Dubbed/Indonesian Movies",
    "Hindi Dubbed/Japanese Movies",
    "Hindi Dubbed/Korean Movies",
    "Hindi Dubbed/Tamil Movies",
    "Animation Series",
    "Bangla Animation",
    "Hindi Animation",
    "English Animation",
    "Others Animation",
    "Award Shows",
    "Bangla Shows",
    "English Shows",
    "Hindi Shows",
    "Others Shows",
    "Bangla Series",
    "Bangla Drama",
    "Entertainment",
    "Indian Bangla",
    "Indian Bangla Drama",
    "Documentary",
    "Islamic Series",
    "Bangla Dubbed",
    "Hindi Dubbed",
    "Web Series",
    "Hindi Series",
    "Pakistani Series",
    "English Series",
    "Korean Series",
    "Japanese Series",
    "Others Series",
    "WWE",
    "AEW Wrestling",
    "WWE Wrestling",
];

/// Filter groups offered to the host. Option 0 of each group is the
/// "no filter" default.
pub fn filter_groups() -> Vec<FilterGroup> {
    let type_group = FilterGroup {
        name: "Type".to_string(),
        options: TYPE_OPTIONS
            .iter()
            .map(|(label, value)| FilterOption {
                label: (*label).to_string(),
                value: (*value).to_string(),
            })
            .collect(),
    };

    let category_group = FilterGroup {
        name: "Category".to_string(),
        options: CATEGORIES
            .iter()
            .map(|label| FilterOption {
                label: (*label).to_string(),
                value: if *label == "Any" {
                    String::new()
                } else {
                    (*label).to_string()
                },
            })
            .collect(),
    };

    vec![type_group, category_group]
}

/// Where a search request should be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTarget {
    /// Free-text search endpoint.
    Search,
    /// Movie category listing.
    Category(String),
    /// TV category listing.
    TvCategory(String),
}

/// Resolve the single effective facet for a request.
///
/// The category group wins; the type group only steers which category
/// endpoint is used. TV-flavored category labels ("Series", "Shows") route to
/// the TV endpoint regardless of the type selection. With no active category
/// the request falls through to free-text search.
pub fn resolve_target(selection: &FilterSelection) -> SearchTarget {
    let type_value = TYPE_OPTIONS
        .get(selection.index(TYPE_GROUP))
        .map(|(_, value)| *value)
        .unwrap_or("");

    let category = CATEGORIES
        .get(selection.index(CATEGORY_GROUP))
        .copied()
        .filter(|label| *label != "Any");

    match category {
        Some(label) if type_value == "tv" || label.contains("Series") || label.contains("Shows") => {
            SearchTarget::TvCategory(label.to_string())
        }
        Some(label) => SearchTarget::Category(label.to_string()),
        None => SearchTarget::Search,
    }
}
