//! The CineplexBD site adapter.
//!
//! Stateless request-builder/response-parser pairs over one `reqwest`
//! client. Every operation performs at most a handful of sequential fetches;
//! timeout and retry policy belong to the transport the host supplies.

use tracing::debug;

use cinebd_core::error::SourceError;
use cinebd_core::types::{
    CatalogPage, Episode, FilterGroup, FilterSelection, MediaDetail, MediaItem, VideoSource,
};

use crate::catalog;
use crate::detail;
use crate::episodes;
use crate::filters;
use crate::provider::MediaSource;
use crate::strategy::ScrapeStrategy;
use crate::urls;
use crate::video;

pub const NAME: &str = "Cineplex BD";
pub const LANGUAGE: &str = "all";
pub const SOURCE_ID: i64 = 5181466391484419848;

const BASE_URL: &str = "http://cineplexbd.net";

pub struct CineplexBd {
    client: reqwest::Client,
    base_url: String,
    strategy: ScrapeStrategy,
}

impl CineplexBd {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_base_url(client, BASE_URL)
    }

    /// Point the adapter at a mirror or a test server.
    pub fn with_base_url(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            strategy: ScrapeStrategy::canonical(),
        }
    }

    /// Swap in one of the documented revision behaviors.
    pub fn with_strategy(mut self, strategy: ScrapeStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    async fn fetch_html(&self, path: &str) -> Result<String, SourceError> {
        let url = urls::absolutize(&self.base_url, path);
        debug!(url = %url, "cineplex request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SourceError::Network(format!(
                "{url} returned {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))
    }
}

#[async_trait::async_trait]
impl MediaSource for CineplexBd {
    fn name(&self) -> &str {
        NAME
    }

    fn language(&self) -> &str {
        LANGUAGE
    }

    fn filters(&self) -> Vec<FilterGroup> {
        filters::filter_groups()
    }

    async fn popular(&self, page: u32) -> Result<CatalogPage, SourceError> {
        let html = self.fetch_html(&catalog::listing_request_path(page)).await?;
        catalog::parse_catalog(&html, &self.base_url, &self.strategy)
    }

    // The site has no separate recency ranking; latest mirrors popular.
    async fn latest(&self, page: u32) -> Result<CatalogPage, SourceError> {
        self.popular(page).await
    }

    async fn search(
        &self,
        page: u32,
        query: &str,
        selection: &FilterSelection,
    ) -> Result<CatalogPage, SourceError> {
        let path = catalog::search_request_path(page, query, selection);
        let html = self.fetch_html(&path).await?;
        catalog::parse_catalog(&html, &self.base_url, &self.strategy)
    }

    async fn detail(&self, item: &MediaItem) -> Result<MediaDetail, SourceError> {
        let html = self.fetch_html(&item.path).await?;
        detail::parse_detail(&html, &self.base_url, &self.strategy)
    }

    async fn episodes(&self, item: &MediaItem) -> Result<Vec<Episode>, SourceError> {
        if episodes::is_movie_path(&item.path, &self.strategy) {
            return Ok(vec![episodes::movie_episode(&item.path)]);
        }
        if !episodes::is_series_path(&item.path, &self.strategy) {
            return Ok(vec![]);
        }

        let id = episodes::series_id(&item.path);
        let html = self.fetch_html(&item.path).await?;
        let seasons = episodes::discover_seasons(&html)?;

        // One fetch per season, sequential; a failure drops that season only.
        let mut payloads = Vec::with_capacity(seasons.len());
        for key in seasons {
            let path = format!("/watch.php?id={id}&season={key}&meta=1");
            let body = self.fetch_html(&path).await;
            payloads.push((key, body));
        }

        Ok(episodes::assemble_episodes(payloads, &self.strategy))
    }

    async fn video_sources(&self, episode: &Episode) -> Result<Vec<VideoSource>, SourceError> {
        let url = urls::absolutize(&self.base_url, &episode.path);
        if video::is_direct_media(&url) {
            return Ok(vec![video::direct_source(&url)]);
        }

        let html = self.fetch_html(&url).await?;
        video::parse_player_page(&html, &self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> CineplexBd {
        CineplexBd::new(reqwest::Client::new())
    }

    #[test]
    fn identity_constants() {
        let source = source();
        assert_eq!(source.name(), "Cineplex BD");
        assert_eq!(source.language(), "all");
        assert_eq!(SOURCE_ID, 5181466391484419848);
    }

    #[test]
    fn exposes_both_filter_groups() {
        let groups = source().filters();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "Type");
        assert_eq!(groups[1].name, "Category");
    }

    #[tokio::test]
    async fn movie_items_need_no_network_to_enumerate() {
        let item = MediaItem {
            path: "/view.php?id=42".to_string(),
            title: "A Movie".to_string(),
            thumbnail_url: None,
        };
        let episodes = source().episodes(&item).await.unwrap();
        assert_eq!(episodes.len(), 1);
        assert_eq!(episodes[0].display_name, "Movie");
        assert_eq!(episodes[0].path, "/player.php?id=42");
    }

    #[tokio::test]
    async fn unrecognized_paths_enumerate_to_nothing() {
        let item = MediaItem {
            path: "/about.php".to_string(),
            title: "About".to_string(),
            thumbnail_url: None,
        };
        assert!(source().episodes(&item).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn direct_paths_resolve_without_a_fetch() {
        let episode = Episode {
            display_name: "E1".to_string(),
            sort_key: 1.0,
            path: "/d/ep1.mkv".to_string(),
        };
        let sources = source().video_sources(&episode).await.unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].url, "http://cineplexbd.net/d/ep1.mkv");
        assert_eq!(sources[0].label, "Direct");
    }
}
