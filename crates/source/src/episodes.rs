//! Episode enumeration: movie dispatch, season discovery, manifest fan-out.
//!
//! A movie page yields one synthetic entry pointing at the player endpoint.
//! A series page fans out to one JSON manifest per season; each season is
//! sorted by resolved episode number and appended in season order, so the
//! final list is season-major even when episode numbers restart per season.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;
use serde_json::Value;
use tracing::warn;

use cinebd_core::error::SourceError;
use cinebd_core::types::Episode;

use crate::dom;
use crate::strategy::{FinalOrdering, ScrapeStrategy, SeasonNumbering};
use crate::urls;

/// `E07`-style marker inside an episode title.
static RE_EPISODE_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)E(\d+)").unwrap());

pub const MOVIE_EPISODE_NAME: &str = "Movie";

/// True when the path points at a movie detail page.
pub fn is_movie_path(path: &str, strategy: &ScrapeStrategy) -> bool {
    strategy
        .movie_page_markers
        .iter()
        .any(|marker| path.contains(marker))
}

/// True when the path points at a series detail page.
pub fn is_series_path(path: &str, strategy: &ScrapeStrategy) -> bool {
    strategy
        .series_page_markers
        .iter()
        .any(|marker| path.contains(marker))
}

/// The single synthetic episode for a movie page.
pub fn movie_episode(path: &str) -> Episode {
    let id = urls::query_param(path, "id").unwrap_or_default();
    Episode {
        display_name: MOVIE_EPISODE_NAME.to_string(),
        sort_key: 1.0,
        path: format!("/player.php?id={id}"),
    }
}

/// Item id the season manifests hang off. Series pages may carry either
/// parameter; `series_id` wins when both are present.
pub fn series_id(path: &str) -> String {
    urls::query_param(path, "series_id")
        .or_else(|| urls::query_param(path, "id"))
        .unwrap_or_default()
}

/// Season keys from the detail page's selector, in declaration order, or the
/// implicit single season when no selector exists.
pub fn discover_seasons(html: &str) -> Result<Vec<String>, SourceError> {
    let doc = Html::parse_document(html);
    let options = dom::sel("select[name=season] option")?;

    let seasons: Vec<String> = doc
        .select(&options)
        .filter_map(|option| option.value().attr("value").map(str::to_string))
        .collect();

    Ok(if seasons.is_empty() {
        vec!["1".to_string()]
    } else {
        seasons
    })
}

/// Parse one season manifest into its episodes, sorted by resolved number.
pub fn parse_season_manifest(
    body: &str,
    season_key: &str,
    season_position: usize,
    multi_season: bool,
    strategy: &ScrapeStrategy,
) -> Result<Vec<Episode>, SourceError> {
    let manifest: Value =
        serde_json::from_str(body).map_err(|e| SourceError::Parse(e.to_string()))?;

    let mut episodes = Vec::new();

    if let Some(records) = manifest["episodes"].as_object() {
        for (key, record) in records {
            let Some(record) = record.as_object() else {
                continue;
            };

            let title = record.get("title").and_then(Value::as_str);
            let path = record.get("path").and_then(Value::as_str).unwrap_or_default();
            let number = resolve_episode_number(record.get("episode_number"), key, title);

            let mut display_name = match title {
                Some(t) => t.to_string(),
                None => format!("Episode {key}"),
            };
            if multi_season {
                display_name = format!("S{season_key} {display_name}");
            }

            episodes.push(Episode {
                display_name,
                sort_key: number,
                path: path.to_string(),
            });
        }
    }

    episodes.sort_by(|a, b| a.sort_key.total_cmp(&b.sort_key));

    if let SeasonNumbering::Offset = strategy.season_numbering {
        let season_number: f32 = season_key
            .parse()
            .unwrap_or((season_position + 1) as f32);
        for episode in &mut episodes {
            episode.sort_key += season_number * 1000.0;
        }
    }

    Ok(episodes)
}

/// Number resolution order: manifest field, map key, `E<digits>` in the
/// title, `0`.
fn resolve_episode_number(field: Option<&Value>, key: &str, title: Option<&str>) -> f32 {
    let mut number = field
        .and_then(numeric_value)
        .or_else(|| key.parse().ok())
        .unwrap_or(0.0);

    if number == 0.0 {
        if let Some(caps) = title.and_then(|t| RE_EPISODE_MARKER.captures(t)) {
            number = caps[1].parse().unwrap_or(0.0);
        }
    }

    number
}

/// `episode_number` arrives as either a JSON number or a numeric string.
fn numeric_value(value: &Value) -> Option<f32> {
    match value {
        Value::Number(n) => n.as_f64().map(|f| f as f32),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Flatten per-season manifest payloads into one episode list.
///
/// A season whose fetch or parse failed contributes zero episodes; the
/// remaining seasons are still assembled.
pub fn assemble_episodes<I>(seasons: I, strategy: &ScrapeStrategy) -> Vec<Episode>
where
    I: IntoIterator<Item = (String, Result<String, SourceError>)>,
{
    let seasons: Vec<_> = seasons.into_iter().collect();
    let multi_season = seasons.len() > 1;

    let mut episodes = Vec::new();
    for (position, (key, body)) in seasons.into_iter().enumerate() {
        let parsed = body
            .and_then(|b| parse_season_manifest(&b, &key, position, multi_season, strategy));
        match parsed {
            Ok(season_episodes) => episodes.extend(season_episodes),
            Err(e) => warn!(season = %key, error = %e, "skipping season"),
        }
    }

    if let FinalOrdering::Reversed = strategy.final_ordering {
        episodes.reverse();
    }

    episodes
}
